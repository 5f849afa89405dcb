use tracing::{debug, trace};

use crate::codec::kind::ElementRole;
use crate::codec::value::UNION_NO_MEMBER;
use crate::codec::varint::write_varint;
use crate::codec::{ListValue, MapValue, Payload, Result, Sink, TdfError, UnionValue, Value, ValueKind};

/// Runtime limits and buffer sizing for encoding.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
	/// Maximum record nesting depth (top-level records sit at depth 0).
	pub max_depth: u32,
	/// Maximum element count for lists, maps, and variables, matching [`crate::codec::DecodeOptions::max_elements`].
	pub max_elements: usize,
	/// Initial output buffer capacity in bytes.
	pub initial_capacity: usize,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			max_elements: 1 << 20,
			initial_capacity: 1024,
		}
	}
}

/// Encode `values` as consecutive top-level records with default limits.
pub fn encode(values: &[Value]) -> Result<Vec<u8>> {
	Encoder::new().encode_all(values)
}

/// Encode `values` as consecutive top-level records.
pub fn encode_with_options(values: &[Value], opt: EncodeOptions) -> Result<Vec<u8>> {
	Encoder::with_options(opt).encode_all(values)
}

/// Writer mirroring [`crate::codec::Decoder`].
///
/// Consumed by [`Encoder::encode_all`]; create a fresh encoder per document.
pub struct Encoder {
	sink: Sink,
	opt: EncodeOptions,
}

impl Default for Encoder {
	fn default() -> Self {
		Self::new()
	}
}

impl Encoder {
	/// Create an encoder with default limits.
	pub fn new() -> Self {
		Self::with_options(EncodeOptions::default())
	}

	/// Create an encoder with explicit limits.
	pub fn with_options(opt: EncodeOptions) -> Self {
		Self {
			sink: Sink::with_capacity(opt.initial_capacity),
			opt,
		}
	}

	/// Write every record and return the encoded bytes.
	pub fn encode_all(mut self, values: &[Value]) -> Result<Vec<u8>> {
		for value in values {
			self.write_tdf(value, 0)
				.inspect_err(|err| debug!(offset = self.sink.len(), error = %err, "TDF encode aborted"))?;
		}

		debug!(records = values.len(), bytes = self.sink.len(), "encoded TDF buffer");
		Ok(self.sink.take())
	}

	fn write_tdf(&mut self, value: &Value, depth: u32) -> Result<()> {
		if depth >= self.opt.max_depth {
			return Err(TdfError::DepthExceeded { max_depth: self.opt.max_depth });
		}

		let kind = value.kind();
		trace!(offset = self.sink.len(), label = %value.label, kind = kind.as_str(), depth, "write record");
		self.sink.write_bytes(&value.label.to_bytes());
		self.sink.write_u8(kind.as_u8());
		self.write_payload(&value.payload, depth)
	}

	fn write_payload(&mut self, payload: &Payload, depth: u32) -> Result<()> {
		match payload {
			Payload::Integer(value) => write_varint(&mut self.sink, *value),
			Payload::String(text) => {
				write_varint(&mut self.sink, len_i64(text.len())?.saturating_add(1));
				self.sink.write_bytes(text.as_bytes());
				self.sink.write_u8(0);
			}
			Payload::Binary(bytes) => {
				write_varint(&mut self.sink, len_i64(bytes.len())?);
				self.sink.write_bytes(bytes);
			}
			Payload::Struct(children) => {
				for child in children {
					if child.label.starts_with_terminator() {
						return Err(TdfError::TerminatorLabel {
							label: child.label.to_string(),
							at: self.sink.len(),
						});
					}
					self.write_tdf(child, depth + 1)?;
				}
				self.sink.write_u8(0);
			}
			Payload::List(list) => self.write_list(list, depth)?,
			Payload::Map(map) => self.write_map(map, depth)?,
			Payload::Union(item) => self.write_union(item, depth)?,
			Payload::Variable(values) => {
				self.write_count(values.len())?;
				for value in values {
					write_varint(&mut self.sink, *value);
				}
				self.sink.write_u8(0);
			}
			Payload::ObjectType(item) => {
				write_varint(&mut self.sink, item.component);
				write_varint(&mut self.sink, item.type_id);
			}
			Payload::ObjectId(item) => {
				write_varint(&mut self.sink, item.component);
				write_varint(&mut self.sink, item.type_id);
				write_varint(&mut self.sink, item.entity);
			}
		}
		Ok(())
	}

	fn write_list(&mut self, list: &ListValue, depth: u32) -> Result<()> {
		ElementRole::ListElement.check(list.element_kind)?;
		self.sink.write_u8(list.element_kind.as_u8());
		self.write_count(list.items.len())?;

		for item in &list.items {
			self.write_element(list.element_kind, item, depth)?;
		}
		Ok(())
	}

	fn write_map(&mut self, map: &MapValue, depth: u32) -> Result<()> {
		ElementRole::MapKey.check(map.key_kind)?;
		ElementRole::MapValue.check(map.value_kind)?;
		self.sink.write_u8(map.key_kind.as_u8());
		self.sink.write_u8(map.value_kind.as_u8());
		self.write_count(map.entries.len())?;

		for (key, value) in &map.entries {
			self.write_element(map.key_kind, key, depth)?;
			self.write_element(map.value_kind, value, depth)?;
		}
		Ok(())
	}

	/// Write an element count, refusing counts the default decoder would reject.
	fn write_count(&mut self, count: usize) -> Result<()> {
		if count > self.opt.max_elements {
			return Err(TdfError::CountTooLarge {
				count,
				max: self.opt.max_elements,
			});
		}
		write_varint(&mut self.sink, len_i64(count)?);
		Ok(())
	}

	fn write_element(&mut self, expected: ValueKind, item: &Payload, depth: u32) -> Result<()> {
		let got = item.kind();
		if got != expected {
			return Err(TdfError::KindMismatch { expected, got });
		}
		self.write_payload(item, depth)
	}

	fn write_union(&mut self, item: &UnionValue, depth: u32) -> Result<()> {
		if item.discriminant == UNION_NO_MEMBER {
			return Err(TdfError::InvalidUnionDiscriminant { at: self.sink.len() });
		}
		self.sink.write_u8(item.discriminant);
		self.write_tdf(&item.member, depth + 1)
	}
}

fn len_i64(len: usize) -> Result<i64> {
	i64::try_from(len).map_err(|_| TdfError::CountTooLarge {
		count: len,
		max: i64::MAX as usize,
	})
}
