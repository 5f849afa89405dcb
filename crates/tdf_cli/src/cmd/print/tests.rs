use tdf::codec::{Payload, Value, ValueKind};

use super::{PrintOptions, render_values};

fn nested() -> Value {
	Value::structure(
		"STRC",
		vec![
			Value::integer("INT ", 42).expect("child"),
			Value::string("STR ", "Nested struct").expect("child"),
		],
	)
	.expect("struct")
}

#[test]
fn struct_children_are_indented() {
	let lines = render_values(&[nested()], PrintOptions::default());
	assert_eq!(lines, ["STRC struct {", "  INT  integer = 42", "  STR  string = \"Nested struct\"", "}"]);
}

#[test]
fn containers_render_headers_and_entries() {
	let values = [
		Value::list("LIST", ValueKind::String, vec![Payload::String("a".into()), Payload::String(String::new())]).expect("list"),
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
		Value::binary("BLOB", vec![0xDE, 0xAD, 0xBE, 0xEF]).expect("binary"),
	];

	let lines = render_values(&values, PrintOptions::default());
	assert_eq!(
		lines,
		[
			"LIST list<string> [",
			"  \"a\"",
			"  \"\"",
			"]",
			"MAP  map<string, integer> {",
			"  \"k\" => 1337",
			"}",
			"UNIO union #2",
			"  VALU integer = -5",
			"VARS variable = [4, -5, 1337]",
			"OBID object_id = (4, 7, 12345)",
			"BLOB binary = bytes[4] deadbeef",
		]
	);
}

#[test]
fn struct_list_elements_expand() {
	let list = Value::list("LIST", ValueKind::Struct, vec![Payload::Struct(vec![Value::integer("INT ", 1).expect("child")])]).expect("list");
	let lines = render_values(&[list], PrintOptions::default());
	assert_eq!(lines, ["LIST list<struct> [", "  {", "    INT  integer = 1", "  }", "]"]);
}

#[test]
fn depth_and_item_limits_truncate() {
	let options = PrintOptions {
		max_items: 1,
		max_print_depth: 1,
		..PrintOptions::default()
	};
	let outer = Value::structure("ROOT", vec![nested(), Value::integer("INT ", 1).expect("child")]).expect("root");

	let lines = render_values(&[outer], options);
	assert_eq!(lines, ["ROOT struct {", "  STRC struct { ... 2 fields }", "  ... 1 more fields", "}"]);
}

#[test]
fn long_strings_are_truncated() {
	let options = PrintOptions {
		max_string_len: 3,
		..PrintOptions::default()
	};
	let lines = render_values(&[Value::string("TEST", "hello").expect("string")], options);
	assert_eq!(lines, ["TEST string = \"hel...\""]);
}
