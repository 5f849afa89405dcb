use crate::codec::{Label, Result, ValueKind};

/// Union discriminant reserved for "no active member".
pub const UNION_NO_MEMBER: u8 = 127;

/// One tagged record: label plus kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
	/// Packed field label.
	pub label: Label,
	/// Kind-specific content.
	pub payload: Payload,
}

/// Record content without its label/kind header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
	/// Signed integer.
	Integer(i64),
	/// UTF-8 text.
	String(String),
	/// Raw bytes.
	Binary(Vec<u8>),
	/// Tagged children in wire order.
	Struct(Vec<Value>),
	/// Homogeneous payload-only elements.
	List(ListValue),
	/// Payload-only key/value pairs in wire order.
	Map(MapValue),
	/// Active member of a tagged union.
	Union(UnionValue),
	/// Counted integer sequence.
	Variable(Vec<i64>),
	/// Object type identifier.
	ObjectType(ObjectType),
	/// Object instance identifier.
	ObjectId(ObjectId),
}

/// List payload with its declared element kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListValue {
	/// Kind every item must have.
	pub element_kind: ValueKind,
	/// Items in wire order.
	pub items: Vec<Payload>,
}

/// Map payload with declared key and value kinds.
///
/// Entries keep wire order; duplicate keys are preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapValue {
	/// Kind every key must have.
	pub key_kind: ValueKind,
	/// Kind every value must have.
	pub value_kind: ValueKind,
	/// Key/value pairs in wire order.
	pub entries: Vec<(Payload, Payload)>,
}

/// Union payload: discriminant plus one fully tagged member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionValue {
	/// Active member index (`0..=126`).
	pub discriminant: u8,
	/// Active member record.
	pub member: Box<Value>,
}

/// `(component, type)` identifier pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectType {
	/// Owning component id.
	pub component: i64,
	/// Type id within the component.
	pub type_id: i64,
}

/// `(component, type, entity)` identifier triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId {
	/// Owning component id.
	pub component: i64,
	/// Type id within the component.
	pub type_id: i64,
	/// Entity id.
	pub entity: i64,
}

impl Payload {
	/// Kind discriminant of this payload.
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Integer(_) => ValueKind::Integer,
			Self::String(_) => ValueKind::String,
			Self::Binary(_) => ValueKind::Binary,
			Self::Struct(_) => ValueKind::Struct,
			Self::List(_) => ValueKind::List,
			Self::Map(_) => ValueKind::Map,
			Self::Union(_) => ValueKind::Union,
			Self::Variable(_) => ValueKind::Variable,
			Self::ObjectType(_) => ValueKind::ObjectType,
			Self::ObjectId(_) => ValueKind::ObjectId,
		}
	}
}

impl Value {
	/// Pair an already-packed label with a payload.
	pub fn new(label: Label, payload: Payload) -> Self {
		Self { label, payload }
	}

	/// Kind discriminant of this record.
	pub fn kind(&self) -> ValueKind {
		self.payload.kind()
	}

	/// 32-bit tag with the label in the upper 24 bits.
	pub fn tag(&self) -> u32 {
		self.label.tag()
	}

	/// Build an integer record.
	pub fn integer(label: &str, value: i64) -> Result<Self> {
		Ok(Self::new(Label::new(label)?, Payload::Integer(value)))
	}

	/// Build a string record.
	pub fn string(label: &str, value: impl Into<String>) -> Result<Self> {
		Ok(Self::new(Label::new(label)?, Payload::String(value.into())))
	}

	/// Build a binary record.
	pub fn binary(label: &str, value: impl Into<Vec<u8>>) -> Result<Self> {
		Ok(Self::new(Label::new(label)?, Payload::Binary(value.into())))
	}

	/// Build a struct record from ordered children.
	pub fn structure(label: &str, children: Vec<Value>) -> Result<Self> {
		Ok(Self::new(Label::new(label)?, Payload::Struct(children)))
	}

	/// Build a list record.
	pub fn list(label: &str, element_kind: ValueKind, items: Vec<Payload>) -> Result<Self> {
		Ok(Self::new(Label::new(label)?, Payload::List(ListValue { element_kind, items })))
	}

	/// Build a map record.
	pub fn map(label: &str, key_kind: ValueKind, value_kind: ValueKind, entries: Vec<(Payload, Payload)>) -> Result<Self> {
		Ok(Self::new(
			Label::new(label)?,
			Payload::Map(MapValue {
				key_kind,
				value_kind,
				entries,
			}),
		))
	}

	/// Build a union record with an active member.
	pub fn union(label: &str, discriminant: u8, member: Value) -> Result<Self> {
		Ok(Self::new(
			Label::new(label)?,
			Payload::Union(UnionValue {
				discriminant,
				member: Box::new(member),
			}),
		))
	}

	/// Build a variable (integer sequence) record.
	pub fn variable(label: &str, values: Vec<i64>) -> Result<Self> {
		Ok(Self::new(Label::new(label)?, Payload::Variable(values)))
	}

	/// Build an object-type record.
	pub fn object_type(label: &str, component: i64, type_id: i64) -> Result<Self> {
		Ok(Self::new(Label::new(label)?, Payload::ObjectType(ObjectType { component, type_id })))
	}

	/// Build an object-id record.
	pub fn object_id(label: &str, component: i64, type_id: i64, entity: i64) -> Result<Self> {
		Ok(Self::new(
			Label::new(label)?,
			Payload::ObjectId(ObjectId {
				component,
				type_id,
				entity,
			}),
		))
	}

	/// Return the first struct child carrying `label`.
	///
	/// `None` for non-struct records or unpackable labels.
	pub fn find(&self, label: &str) -> Option<&Value> {
		let Payload::Struct(children) = &self.payload else {
			return None;
		};
		let wanted = Label::new(label).ok()?;
		children.iter().find(|child| child.label == wanted)
	}
}

#[cfg(test)]
mod tests {
	use crate::codec::{Payload, TdfError, Value, ValueKind};

	#[test]
	fn constructors_set_kind_and_label() {
		let value = Value::integer("VALU", 1337).expect("integer builds");
		assert_eq!(value.kind(), ValueKind::Integer);
		assert_eq!(value.label.to_string(), "VALU");
		assert_eq!(value.tag(), 0xDA1B_3500);

		let list = Value::list("LIST", ValueKind::String, vec![Payload::String("a".into())]).expect("list builds");
		assert_eq!(list.kind(), ValueKind::List);
	}

	#[test]
	fn constructors_reject_bad_labels() {
		let err = Value::string("TOOLONG", "x").expect_err("label too long");
		assert!(matches!(err, TdfError::InvalidLabel { .. }));
	}

	#[test]
	fn find_returns_first_matching_child() {
		let value = Value::structure(
			"STRC",
			vec![
				Value::integer("INT ", 1).expect("child"),
				Value::integer("INT ", 2).expect("child"),
				Value::string("STR ", "x").expect("child"),
			],
		)
		.expect("struct builds");

		assert_eq!(value.find("int ").map(|child| &child.payload), Some(&Payload::Integer(1)));
		assert!(value.find("NONE").is_none());
		assert!(value.find("bad label").is_none());
		assert!(Value::integer("INT ", 0).expect("scalar").find("INT ").is_none());
	}
}
