use tdf::codec::{LABEL_BYTES, TdfError, decode_label, encode_label};

use crate::cmd::util::{parse_hex, render_hex};

#[derive(clap::Subcommand)]
pub enum Command {
	/// Pack a four-character label into three bytes.
	Encode {
		/// Label text; lowercase letters are uppercased.
		label: String,
	},
	/// Unpack three hex bytes into a label.
	Decode {
		/// Packed label as hex (`d25cf4`).
		hex: String,
	},
}

/// Run a label subcommand.
pub fn run(command: Command) -> tdf::codec::Result<()> {
	match command {
		Command::Encode { label } => {
			let packed = encode_label(&label)?;
			println!("{}", render_hex(&packed));
		}
		Command::Decode { hex } => {
			let bytes = parse_hex(&hex)?;
			let packed: [u8; LABEL_BYTES] = bytes.as_slice().try_into().map_err(|_| TdfError::InvalidHex {
				reason: format!("label needs {LABEL_BYTES} bytes, got {}", bytes.len()),
			})?;
			// Quoted so trailing spaces stay visible.
			println!("{:?}", decode_label(packed));
		}
	}
	Ok(())
}
