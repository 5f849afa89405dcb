use std::fs;
use std::path::PathBuf;

use tdf::codec::{EncodeOptions, TdfError, encode_with_options};

use crate::cmd::json::DocumentJson;
use crate::cmd::util::render_hex;

#[derive(clap::Args)]
pub struct Args {
	/// JSON document (`{"values": [...]}`) to encode.
	pub path: PathBuf,
	/// Write raw bytes here instead of printing hex.
	#[arg(long)]
	pub out: Option<PathBuf>,
	/// Reject nesting deeper than this many levels.
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
}

/// Encode a JSON document into TDF bytes.
pub fn run(args: Args) -> tdf::codec::Result<()> {
	let text = fs::read(&args.path)?;
	let doc: DocumentJson = serde_json::from_slice(&text).map_err(|err| TdfError::InvalidJson { reason: err.to_string() })?;
	let values = doc.into_values()?;

	let mut options = EncodeOptions::default();
	if let Some(max_depth) = args.max_depth {
		options.max_depth = max_depth;
	}
	let bytes = encode_with_options(&values, options)?;

	match args.out {
		Some(out) => {
			fs::write(&out, &bytes)?;
			println!("wrote {} bytes ({} records) to {}", bytes.len(), values.len(), out.display());
		}
		None => println!("{}", render_hex(&bytes)),
	}
	Ok(())
}
