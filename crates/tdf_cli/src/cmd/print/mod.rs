use tdf::codec::{Payload, Value};

use crate::cmd::util::render_hex;

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of bytes rendered for binary payloads.
	pub max_binary_len: usize,
	/// Maximum number of children, items, or entries printed per container.
	pub max_items: usize,
	/// Maximum recursive print depth for nested containers.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_string_len: 200,
			max_binary_len: 64,
			max_items: 64,
			max_print_depth: 8,
		}
	}
}

/// Render top-level records as indented lines.
pub fn render_values(values: &[Value], options: PrintOptions) -> Vec<String> {
	let mut out = Vec::new();
	for value in values {
		render_value(&mut out, value, 0, 0, options);
	}
	out
}

fn render_value(out: &mut Vec<String>, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	let head = format!("{pad}{} {}", value.label, value.kind());

	match &value.payload {
		Payload::Struct(children) => {
			if depth >= options.max_print_depth {
				out.push(format!("{head} {{ ... {} fields }}", children.len()));
				return;
			}
			out.push(format!("{head} {{"));
			render_children(out, children, indent + 2, depth + 1, options);
			out.push(format!("{pad}}}"));
		}
		Payload::List(list) => {
			let head = format!("{pad}{} list<{}>", value.label, list.element_kind);
			if depth >= options.max_print_depth {
				out.push(format!("{head} [ ... {} items ]", list.items.len()));
				return;
			}
			out.push(format!("{head} ["));
			for item in list.items.iter().take(options.max_items) {
				render_item(out, "", item, indent + 2, depth + 1, options);
			}
			push_more(out, indent + 2, list.items.len(), options.max_items, "items");
			out.push(format!("{pad}]"));
		}
		Payload::Map(map) => {
			let head = format!("{pad}{} map<{}, {}>", value.label, map.key_kind, map.value_kind);
			if depth >= options.max_print_depth {
				out.push(format!("{head} {{ ... {} entries }}", map.entries.len()));
				return;
			}
			out.push(format!("{head} {{"));
			for (key, item) in map.entries.iter().take(options.max_items) {
				let prefix = format!("{} => ", inline(key, options));
				render_item(out, &prefix, item, indent + 2, depth + 1, options);
			}
			push_more(out, indent + 2, map.entries.len(), options.max_items, "entries");
			out.push(format!("{pad}}}"));
		}
		Payload::Union(item) => {
			out.push(format!("{head} #{}", item.discriminant));
			if depth >= options.max_print_depth {
				out.push(format!("{pad}  ..."));
				return;
			}
			render_value(out, &item.member, indent + 2, depth + 1, options);
		}
		scalar => out.push(format!("{head} = {}", inline(scalar, options))),
	}
}

fn render_children(out: &mut Vec<String>, children: &[Value], indent: usize, depth: u32, options: PrintOptions) {
	for child in children.iter().take(options.max_items) {
		render_value(out, child, indent, depth, options);
	}
	push_more(out, indent, children.len(), options.max_items, "fields");
}

/// Payload-only element: struct elements expand, everything else stays on one line.
fn render_item(out: &mut Vec<String>, prefix: &str, item: &Payload, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match item {
		Payload::Struct(children) if depth < options.max_print_depth => {
			out.push(format!("{pad}{prefix}{{"));
			render_children(out, children, indent + 2, depth + 1, options);
			out.push(format!("{pad}}}"));
		}
		other => out.push(format!("{pad}{prefix}{}", inline(other, options))),
	}
}

fn inline(payload: &Payload, options: PrintOptions) -> String {
	match payload {
		Payload::Integer(value) => value.to_string(),
		Payload::String(value) => format!("{:?}", truncate(value, options.max_string_len)),
		Payload::Binary(bytes) => {
			let shown = &bytes[..bytes.len().min(options.max_binary_len)];
			let more = if shown.len() < bytes.len() { "..." } else { "" };
			format!("bytes[{}] {}{more}", bytes.len(), render_hex(shown))
		}
		Payload::Struct(children) => format!("{{ ... {} fields }}", children.len()),
		Payload::List(list) => format!("list<{}>[{}]", list.element_kind, list.items.len()),
		Payload::Map(map) => format!("map<{}, {}>[{}]", map.key_kind, map.value_kind, map.entries.len()),
		Payload::Union(item) => format!("union #{} {}", item.discriminant, item.member.label),
		Payload::Variable(values) => {
			let items: Vec<String> = values.iter().take(options.max_items).map(i64::to_string).collect();
			let more = if values.len() > options.max_items { ", ..." } else { "" };
			format!("[{}{more}]", items.join(", "))
		}
		Payload::ObjectType(id) => format!("({}, {})", id.component, id.type_id),
		Payload::ObjectId(id) => format!("({}, {}, {})", id.component, id.type_id, id.entity),
	}
}

fn push_more(out: &mut Vec<String>, indent: usize, total: usize, shown: usize, what: &str) {
	if total > shown {
		out.push(format!("{}... {} more {what}", " ".repeat(indent), total - shown));
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

#[cfg(test)]
mod tests;
