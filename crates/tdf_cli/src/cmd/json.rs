use serde::{Deserialize, Serialize};
use serde_json::{Value as Json, json};
use tdf::codec::{Label, ListValue, MapValue, ObjectId, ObjectType, Payload, Result, TdfError, UnionValue, Value, ValueKind};

use crate::cmd::util::{parse_hex, render_hex};

/// Top-level JSON document: records in wire order.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentJson {
	/// Top-level records.
	pub values: Vec<ValueJson>,
}

/// One labelled record; `value` shape depends on `kind`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValueJson {
	/// Four-character label.
	pub label: String,
	/// Lowercase kind name (`integer`, `object_type`, ...).
	pub kind: String,
	/// Kind-specific payload.
	pub value: Json,
}

#[derive(Deserialize)]
struct ListJson {
	element_kind: String,
	items: Vec<Json>,
}

#[derive(Deserialize)]
struct MapJson {
	key_kind: String,
	value_kind: String,
	entries: Vec<(Json, Json)>,
}

#[derive(Deserialize)]
struct UnionJson {
	discriminant: u8,
	member: ValueJson,
}

#[derive(Deserialize)]
struct ObjectTypeJson {
	component: i64,
	#[serde(rename = "type")]
	type_id: i64,
}

#[derive(Deserialize)]
struct ObjectIdJson {
	component: i64,
	#[serde(rename = "type")]
	type_id: i64,
	entity: i64,
}

impl DocumentJson {
	/// Snapshot decoded records.
	pub fn from_values(values: &[Value]) -> Self {
		Self {
			values: values.iter().map(ValueJson::from_value).collect(),
		}
	}

	/// Rebuild records, validating labels and kind names.
	pub fn into_values(self) -> Result<Vec<Value>> {
		self.values.into_iter().map(ValueJson::into_value).collect()
	}
}

impl ValueJson {
	/// Snapshot one record.
	pub fn from_value(value: &Value) -> Self {
		Self {
			label: value.label.to_string(),
			kind: value.kind().as_str().to_owned(),
			value: payload_json(&value.payload),
		}
	}

	/// Rebuild one record.
	pub fn into_value(self) -> Result<Value> {
		let label = Label::new(&self.label)?;
		let kind = parse_kind(&self.kind)?;
		Ok(Value::new(label, payload_from_json(kind, self.value)?))
	}
}

fn payload_json(payload: &Payload) -> Json {
	match payload {
		Payload::Integer(value) => json!(value),
		Payload::String(value) => json!(value),
		Payload::Binary(bytes) => json!(render_hex(bytes)),
		Payload::Struct(children) => Json::Array(children.iter().map(|child| json!(ValueJson::from_value(child))).collect()),
		Payload::List(list) => json!({
			"element_kind": list.element_kind.as_str(),
			"items": list.items.iter().map(payload_json).collect::<Vec<_>>(),
		}),
		Payload::Map(map) => json!({
			"key_kind": map.key_kind.as_str(),
			"value_kind": map.value_kind.as_str(),
			"entries": map
				.entries
				.iter()
				.map(|(key, value)| json!([payload_json(key), payload_json(value)]))
				.collect::<Vec<_>>(),
		}),
		Payload::Union(item) => json!({
			"discriminant": item.discriminant,
			"member": ValueJson::from_value(&item.member),
		}),
		Payload::Variable(values) => json!(values),
		Payload::ObjectType(id) => json!({ "component": id.component, "type": id.type_id }),
		Payload::ObjectId(id) => json!({ "component": id.component, "type": id.type_id, "entity": id.entity }),
	}
}

fn payload_from_json(kind: ValueKind, value: Json) -> Result<Payload> {
	let payload = match kind {
		ValueKind::Integer => Payload::Integer(value.as_i64().ok_or_else(|| shape_err(kind, &value))?),
		ValueKind::String => Payload::String(value.as_str().ok_or_else(|| shape_err(kind, &value))?.to_owned()),
		ValueKind::Binary => Payload::Binary(parse_hex(value.as_str().ok_or_else(|| shape_err(kind, &value))?)?),
		ValueKind::Struct => {
			let children: Vec<ValueJson> = from_json(value)?;
			Payload::Struct(children.into_iter().map(ValueJson::into_value).collect::<Result<_>>()?)
		}
		ValueKind::List => {
			let list: ListJson = from_json(value)?;
			let element_kind = parse_kind(&list.element_kind)?;
			let items = list
				.items
				.into_iter()
				.map(|item| payload_from_json(element_kind, item))
				.collect::<Result<_>>()?;
			Payload::List(ListValue { element_kind, items })
		}
		ValueKind::Map => {
			let map: MapJson = from_json(value)?;
			let key_kind = parse_kind(&map.key_kind)?;
			let value_kind = parse_kind(&map.value_kind)?;
			let entries = map
				.entries
				.into_iter()
				.map(|(key, value)| Ok((payload_from_json(key_kind, key)?, payload_from_json(value_kind, value)?)))
				.collect::<Result<_>>()?;
			Payload::Map(MapValue {
				key_kind,
				value_kind,
				entries,
			})
		}
		ValueKind::Union => {
			let item: UnionJson = from_json(value)?;
			Payload::Union(UnionValue {
				discriminant: item.discriminant,
				member: Box::new(item.member.into_value()?),
			})
		}
		ValueKind::Variable => Payload::Variable(from_json(value)?),
		ValueKind::ObjectType => {
			let id: ObjectTypeJson = from_json(value)?;
			Payload::ObjectType(ObjectType {
				component: id.component,
				type_id: id.type_id,
			})
		}
		ValueKind::ObjectId => {
			let id: ObjectIdJson = from_json(value)?;
			Payload::ObjectId(ObjectId {
				component: id.component,
				type_id: id.type_id,
				entity: id.entity,
			})
		}
	};
	Ok(payload)
}

fn parse_kind(name: &str) -> Result<ValueKind> {
	ValueKind::from_name(name).ok_or_else(|| TdfError::InvalidJson {
		reason: format!("unknown kind {name:?}"),
	})
}

fn from_json<T: serde::de::DeserializeOwned>(value: Json) -> Result<T> {
	serde_json::from_value(value).map_err(|err| TdfError::InvalidJson { reason: err.to_string() })
}

fn shape_err(kind: ValueKind, value: &Json) -> TdfError {
	TdfError::InvalidJson {
		reason: format!("{kind} payload cannot be {value}"),
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;
	use tdf::codec::{Payload, TdfError, Value, ValueKind};

	use super::{DocumentJson, ValueJson};

	#[test]
	fn scalar_records_map_to_plain_json() {
		let doc = DocumentJson::from_values(&[
			Value::integer("VALU", -5).expect("value"),
			Value::binary("BLOB", vec![0xDE, 0xAD]).expect("value"),
			Value::object_type("OTYP", 7, 300).expect("value"),
		]);
		let out = serde_json::to_value(&doc).expect("serializes");

		assert_eq!(out["values"][0], json!({ "label": "VALU", "kind": "integer", "value": -5 }));
		assert_eq!(out["values"][1]["value"], json!("dead"));
		assert_eq!(out["values"][2]["value"], json!({ "component": 7, "type": 300 }));
	}

	#[test]
	fn containers_survive_json_round_trip() {
		let values = vec![
			Value::structure(
				"STRC",
				vec![
					Value::integer("INT ", 42).expect("child"),
					Value::string("STR ", "Nested struct").expect("child"),
				],
			)
			.expect("struct"),
			Value::list("LIST", ValueKind::Struct, vec![Payload::Struct(vec![Value::integer("INT ", 1).expect("child")])]).expect("list"),
			Value::map(
				"MAP ",
				ValueKind::String,
				ValueKind::Integer,
				vec![(Payload::String("k".into()), Payload::Integer(1337))],
			)
			.expect("map"),
			Value::union("UNIO", 2, Value::integer("VALU", -5).expect("member")).expect("union"),
			Value::variable("VARS", vec![4, -5, 1337]).expect("variable"),
			Value::object_id("OBID", 4, 7, 12345).expect("object id"),
		];

		let text = serde_json::to_string(&DocumentJson::from_values(&values)).expect("serializes");
		let doc: DocumentJson = serde_json::from_str(&text).expect("parses");
		assert_eq!(doc.into_values().expect("maps back"), values);
	}

	#[test]
	fn unknown_kind_name_is_invalid_json() {
		let item = ValueJson {
			label: "VALU".into(),
			kind: "float".into(),
			value: json!(1.5),
		};
		assert!(matches!(item.into_value(), Err(TdfError::InvalidJson { .. })));
	}

	#[test]
	fn payload_shape_mismatch_is_invalid_json() {
		let item = ValueJson {
			label: "VALU".into(),
			kind: "integer".into(),
			value: json!("1337"),
		};
		assert!(matches!(item.into_value(), Err(TdfError::InvalidJson { .. })));
	}

	#[test]
	fn bad_label_is_reported_as_label_error() {
		let item = ValueJson {
			label: "TOOLONG".into(),
			kind: "integer".into(),
			value: json!(1),
		};
		assert!(matches!(item.into_value(), Err(TdfError::InvalidLabel { .. })));
	}
}
