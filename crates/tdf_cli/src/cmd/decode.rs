use std::path::PathBuf;

use tdf::codec::{DecodeOptions, decode_with_options};

use crate::cmd::json::DocumentJson;
use crate::cmd::print::{PrintOptions, render_values};
use crate::cmd::util::{emit_json, read_input};

#[derive(clap::Args)]
pub struct Args {
	/// TDF buffer to decode.
	pub path: PathBuf,
	/// Treat the input file as hex text instead of raw bytes.
	#[arg(long)]
	pub hex: bool,
	/// Emit the JSON document format instead of a tree.
	#[arg(long)]
	pub json: bool,
	/// Reject nesting deeper than this many levels.
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	/// Reject list/map/variable counts above this value.
	#[arg(long = "max-elements")]
	pub max_elements: Option<usize>,
}

/// Decode a buffer and print its records.
pub fn run(args: Args) -> tdf::codec::Result<()> {
	let Args {
		path,
		hex,
		json,
		max_depth,
		max_elements,
	} = args;

	let bytes = read_input(&path, hex)?;
	let mut options = DecodeOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}
	if let Some(max_elements) = max_elements {
		options.max_elements = max_elements;
	}
	let values = decode_with_options(&bytes, options)?;

	if json {
		return emit_json(&DocumentJson::from_values(&values));
	}

	println!("path: {}", path.display());
	println!("bytes: {}", bytes.len());
	println!("records: {}", values.len());
	for line in render_values(&values, PrintOptions::default()) {
		println!("{line}");
	}
	Ok(())
}
