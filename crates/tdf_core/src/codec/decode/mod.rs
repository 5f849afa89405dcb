use tracing::{debug, trace};

use crate::codec::kind::ElementRole;
use crate::codec::value::UNION_NO_MEMBER;
use crate::codec::varint::read_varint;
use crate::codec::{Cursor, Label, ListValue, MapValue, ObjectId, ObjectType, Payload, Result, TdfError, UnionValue, Value, ValueKind};

/// Runtime limits for decoding untrusted buffers.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum record nesting depth (top-level records sit at depth 0).
	pub max_depth: u32,
	/// Maximum declared element count for lists, maps, and variables.
	pub max_elements: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			max_elements: 1 << 20,
		}
	}
}

impl DecodeOptions {
	/// Tighter preset for buffers received from unknown peers.
	pub fn strict() -> Self {
		Self {
			max_depth: 16,
			max_elements: 4096,
		}
	}
}

/// Decode every top-level record in `bytes` with default limits.
pub fn decode(bytes: &[u8]) -> Result<Vec<Value>> {
	Decoder::new(bytes).decode_all()
}

/// Decode every top-level record in `bytes`.
pub fn decode_with_options(bytes: &[u8], opt: DecodeOptions) -> Result<Vec<Value>> {
	Decoder::with_options(bytes, opt).decode_all()
}

/// Recursive-descent reader over one buffer.
///
/// Consumed by [`Decoder::decode_all`]; create a fresh decoder per buffer.
pub struct Decoder<'a> {
	cursor: Cursor<'a>,
	opt: DecodeOptions,
}

impl<'a> Decoder<'a> {
	/// Create a decoder with default limits.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self::with_options(bytes, DecodeOptions::default())
	}

	/// Create a decoder with explicit limits.
	pub fn with_options(bytes: &'a [u8], opt: DecodeOptions) -> Self {
		Self {
			cursor: Cursor::new(bytes),
			opt,
		}
	}

	/// Read top-level records until the buffer is exhausted.
	pub fn decode_all(mut self) -> Result<Vec<Value>> {
		let mut values = Vec::new();
		while self.cursor.remaining() > 0 {
			let value = self
				.read_tdf(0)
				.inspect_err(|err| debug!(offset = self.cursor.pos(), error = %err, "TDF decode aborted"))?;
			values.push(value);
		}

		debug!(records = values.len(), bytes = self.cursor.pos(), "decoded TDF buffer");
		Ok(values)
	}

	fn read_tdf(&mut self, depth: u32) -> Result<Value> {
		if depth >= self.opt.max_depth {
			return Err(TdfError::DepthExceeded { max_depth: self.opt.max_depth });
		}

		let at = self.cursor.pos();
		let label = Label::from_bytes(self.cursor.read_array()?);
		let kind = self.read_kind()?;
		trace!(offset = at, label = %label, kind = kind.as_str(), depth, "read record");

		let payload = self.read_payload(kind, depth)?;
		Ok(Value::new(label, payload))
	}

	fn read_payload(&mut self, kind: ValueKind, depth: u32) -> Result<Payload> {
		Ok(match kind {
			ValueKind::Integer => Payload::Integer(read_varint(&mut self.cursor)?),
			ValueKind::String => Payload::String(self.read_string()?),
			ValueKind::Binary => Payload::Binary(self.read_binary()?),
			ValueKind::Struct => Payload::Struct(self.read_struct(depth)?),
			ValueKind::List => Payload::List(self.read_list(depth)?),
			ValueKind::Map => Payload::Map(self.read_map(depth)?),
			ValueKind::Union => Payload::Union(self.read_union(depth)?),
			ValueKind::Variable => Payload::Variable(self.read_variable()?),
			ValueKind::ObjectType => Payload::ObjectType(ObjectType {
				component: read_varint(&mut self.cursor)?,
				type_id: read_varint(&mut self.cursor)?,
			}),
			ValueKind::ObjectId => Payload::ObjectId(ObjectId {
				component: read_varint(&mut self.cursor)?,
				type_id: read_varint(&mut self.cursor)?,
				entity: read_varint(&mut self.cursor)?,
			}),
		})
	}

	fn read_kind(&mut self) -> Result<ValueKind> {
		let at = self.cursor.pos();
		ValueKind::from_u8(self.cursor.read_u8()?, at)
	}

	/// Read a non-negative length varint.
	fn read_len(&mut self) -> Result<(usize, usize)> {
		let at = self.cursor.pos();
		let len = read_varint(&mut self.cursor)?;
		let len_usize = usize::try_from(len).map_err(|_| TdfError::InvalidLength { at, len })?;
		Ok((at, len_usize))
	}

	/// Read an element count and validate it against the configured ceiling.
	fn read_count(&mut self) -> Result<usize> {
		let (_, count) = self.read_len()?;
		if count > self.opt.max_elements {
			return Err(TdfError::CountTooLarge {
				count,
				max: self.opt.max_elements,
			});
		}
		Ok(count)
	}

	/// Capacity hint that never exceeds what the remaining bytes could hold.
	fn capacity_for(&self, count: usize) -> usize {
		count.min(self.cursor.remaining())
	}

	fn read_string(&mut self) -> Result<String> {
		let (at, len) = self.read_len()?;
		if len == 0 {
			return Err(TdfError::InvalidLength { at, len: 0 });
		}

		let content_at = self.cursor.pos();
		let content = self.cursor.read_exact(len - 1)?;
		let text = std::str::from_utf8(content).map_err(|_| TdfError::InvalidUtf8 { at: content_at })?;
		let _terminator = self.cursor.read_u8()?;
		Ok(text.to_owned())
	}

	fn read_binary(&mut self) -> Result<Vec<u8>> {
		let (_, len) = self.read_len()?;
		Ok(self.cursor.read_exact(len)?.to_vec())
	}

	fn read_struct(&mut self, depth: u32) -> Result<Vec<Value>> {
		let mut children = Vec::new();
		loop {
			self.cursor.mark();
			if self.cursor.read_u8()? == 0 {
				return Ok(children);
			}
			self.cursor.reset();
			children.push(self.read_tdf(depth + 1)?);
		}
	}

	fn read_list(&mut self, depth: u32) -> Result<ListValue> {
		let element_kind = self.read_kind()?;
		ElementRole::ListElement.check(element_kind)?;
		let count = self.read_count()?;

		let mut items = Vec::with_capacity(self.capacity_for(count));
		for _ in 0..count {
			items.push(self.read_payload(element_kind, depth)?);
		}
		Ok(ListValue { element_kind, items })
	}

	fn read_map(&mut self, depth: u32) -> Result<MapValue> {
		let key_kind = self.read_kind()?;
		let value_kind = self.read_kind()?;
		ElementRole::MapKey.check(key_kind)?;
		ElementRole::MapValue.check(value_kind)?;
		let count = self.read_count()?;

		let mut entries = Vec::with_capacity(self.capacity_for(count));
		for _ in 0..count {
			let key = self.read_payload(key_kind, depth)?;
			let value = self.read_payload(value_kind, depth)?;
			entries.push((key, value));
		}
		Ok(MapValue {
			key_kind,
			value_kind,
			entries,
		})
	}

	fn read_union(&mut self, depth: u32) -> Result<UnionValue> {
		let at = self.cursor.pos();
		let discriminant = self.cursor.read_u8()?;
		if discriminant == UNION_NO_MEMBER {
			return Err(TdfError::InvalidUnionDiscriminant { at });
		}

		let member = self.read_tdf(depth + 1)?;
		Ok(UnionValue {
			discriminant,
			member: Box::new(member),
		})
	}

	fn read_variable(&mut self) -> Result<Vec<i64>> {
		let count = self.read_count()?;
		let mut values = Vec::with_capacity(self.capacity_for(count));
		for _ in 0..count {
			values.push(read_varint(&mut self.cursor)?);
		}
		// Terminated like a struct regardless of the declared count.
		let _terminator = self.cursor.read_u8()?;
		Ok(values)
	}
}
