use std::fs;
use std::path::Path;

use tdf::codec::{Result, TdfError};

/// Parse hex text into bytes, ignoring whitespace and an optional `0x` prefix.
pub(crate) fn parse_hex(text: &str) -> Result<Vec<u8>> {
	let trimmed = text.trim();
	let trimmed = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")).unwrap_or(trimmed);
	let digits: Vec<u8> = trimmed.bytes().filter(|byte| !byte.is_ascii_whitespace()).collect();

	if digits.len() % 2 != 0 {
		return Err(TdfError::InvalidHex {
			reason: format!("odd number of hex digits ({})", digits.len()),
		});
	}

	digits
		.chunks_exact(2)
		.enumerate()
		.map(|(idx, pair)| match (hex_digit(pair[0]), hex_digit(pair[1])) {
			(Some(hi), Some(lo)) => Ok((hi << 4) | lo),
			_ => Err(TdfError::InvalidHex {
				reason: format!("non-hex digit in pair {idx} ({:?})", String::from_utf8_lossy(pair)),
			}),
		})
		.collect()
}

fn hex_digit(byte: u8) -> Option<u8> {
	char::from(byte).to_digit(16).and_then(|digit| u8::try_from(digit).ok())
}

/// Render bytes as contiguous lowercase hex.
pub(crate) fn render_hex(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(bytes.len() * 2);
	for byte in bytes {
		out.push_str(&format!("{byte:02x}"));
	}
	out
}

/// Read a TDF buffer from `path`, either raw or as hex text.
pub(crate) fn read_input(path: &Path, hex: bool) -> Result<Vec<u8>> {
	if hex {
		parse_hex(&fs::read_to_string(path)?)
	} else {
		Ok(fs::read(path)?)
	}
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(value).map_err(|err| TdfError::InvalidJson { reason: err.to_string() })?;
	println!("{text}");
	Ok(())
}
