use std::fmt;

use crate::codec::{Result, TdfError};

/// Wire discriminant selecting one of the ten value shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ValueKind {
	/// Signed varint.
	Integer = 0,
	/// Length-prefixed, zero-terminated UTF-8 text.
	String = 1,
	/// Length-prefixed raw bytes.
	Binary = 2,
	/// Tagged children closed by a zero byte.
	Struct = 3,
	/// Homogeneous payload-only elements.
	List = 4,
	/// Payload-only key/value pairs.
	Map = 5,
	/// Discriminant byte plus one tagged member.
	Union = 6,
	/// Counted varints closed by a zero byte.
	Variable = 7,
	/// `(component, type)` varint pair.
	ObjectType = 8,
	/// `(component, type, entity)` varint triple.
	ObjectId = 9,
}

impl ValueKind {
	/// All kinds in discriminant order.
	pub const ALL: [Self; 10] = [
		Self::Integer,
		Self::String,
		Self::Binary,
		Self::Struct,
		Self::List,
		Self::Map,
		Self::Union,
		Self::Variable,
		Self::ObjectType,
		Self::ObjectId,
	];

	/// Map a wire byte to a kind; `at` is reported on failure.
	pub fn from_u8(kind: u8, at: usize) -> Result<Self> {
		Self::ALL.get(usize::from(kind)).copied().ok_or(TdfError::UnknownType { kind, at })
	}

	/// Wire discriminant.
	pub fn as_u8(self) -> u8 {
		self as u8
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Integer => "integer",
			Self::String => "string",
			Self::Binary => "binary",
			Self::Struct => "struct",
			Self::List => "list",
			Self::Map => "map",
			Self::Union => "union",
			Self::Variable => "variable",
			Self::ObjectType => "object_type",
			Self::ObjectId => "object_id",
		}
	}

	/// Parse a label produced by [`ValueKind::as_str`].
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.as_str() == name)
	}

	/// Whether the kind has a payload-only form inside a list.
	pub fn supports_list_element(self) -> bool {
		matches!(
			self,
			Self::Integer | Self::String | Self::Binary | Self::Struct | Self::ObjectType | Self::ObjectId
		)
	}

	/// Whether the kind may be used as a map key.
	pub fn supports_map_key(self) -> bool {
		matches!(self, Self::Integer | Self::String | Self::Binary)
	}

	/// Whether the kind may be used as a map value.
	pub fn supports_map_value(self) -> bool {
		self.supports_list_element()
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Role a kind plays inside a container, used for support checks and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementRole {
	ListElement,
	MapKey,
	MapValue,
}

impl ElementRole {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			Self::ListElement => "list element",
			Self::MapKey => "map key",
			Self::MapValue => "map value",
		}
	}

	/// Fail `NotImplemented` when `kind` has no payload-only form in this role.
	pub(crate) fn check(self, kind: ValueKind) -> Result<()> {
		let supported = match self {
			Self::ListElement => kind.supports_list_element(),
			Self::MapKey => kind.supports_map_key(),
			Self::MapValue => kind.supports_map_value(),
		};
		if supported {
			Ok(())
		} else {
			Err(TdfError::NotImplemented {
				kind,
				context: self.as_str(),
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::codec::{TdfError, ValueKind};

	#[test]
	fn discriminants_are_stable() {
		for (index, kind) in ValueKind::ALL.into_iter().enumerate() {
			assert_eq!(usize::from(kind.as_u8()), index);
			assert_eq!(ValueKind::from_u8(kind.as_u8(), 0).expect("known kind"), kind);
			assert_eq!(ValueKind::from_name(kind.as_str()), Some(kind));
		}
	}

	#[test]
	fn bytes_ten_and_above_are_unknown() {
		for byte in [10_u8, 11, 127, 255] {
			let err = ValueKind::from_u8(byte, 7).expect_err("unknown kind");
			assert!(matches!(err, TdfError::UnknownType { kind, at: 7 } if kind == byte));
		}
	}

	#[test]
	fn containers_have_no_payload_only_form() {
		for kind in [ValueKind::List, ValueKind::Map, ValueKind::Union, ValueKind::Variable] {
			assert!(!kind.supports_list_element(), "{kind} should not be a list element");
			assert!(!kind.supports_map_value(), "{kind} should not be a map value");
			assert!(!kind.supports_map_key(), "{kind} should not be a map key");
		}
		assert!(!ValueKind::Struct.supports_map_key());
	}
}
