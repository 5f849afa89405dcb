use std::fmt;

use crate::codec::{Result, TdfError};

/// Number of characters in a label.
pub const LABEL_CHARS: usize = 4;
/// Number of packed bytes a label occupies on the wire.
pub const LABEL_BYTES: usize = 3;

/// Four-character field label packed at 6 bits per character.
///
/// Stored as a 32-bit tag with the packed label in the upper 24 bits and the
/// low byte zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(u32);

impl Label {
	/// Pack a four-character label string.
	pub fn new(label: &str) -> Result<Self> {
		encode_label(label).map(Self::from_bytes)
	}

	/// Build from the three packed wire bytes.
	pub fn from_bytes(bytes: [u8; LABEL_BYTES]) -> Self {
		Self(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], 0]))
	}

	/// Build from a 32-bit tag, discarding the reserved low byte.
	pub fn from_tag(tag: u32) -> Self {
		Self(tag & !0xFF)
	}

	/// Return the 32-bit tag (label in the upper 24 bits).
	pub fn tag(self) -> u32 {
		self.0
	}

	/// Return the three packed wire bytes.
	pub fn to_bytes(self) -> [u8; LABEL_BYTES] {
		let [b0, b1, b2, _] = self.0.to_be_bytes();
		[b0, b1, b2]
	}

	/// Whether the first packed byte is zero, which a struct reader takes as its terminator.
	///
	/// True for labels starting with a space followed by one of `' '..='/'`.
	pub fn starts_with_terminator(self) -> bool {
		self.to_bytes()[0] == 0
	}

	/// Unpack the four label characters.
	pub fn chars(self) -> [u8; LABEL_CHARS] {
		unpack(self.to_bytes())
	}
}

impl fmt::Display for Label {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for byte in self.chars() {
			write!(f, "{}", char::from(byte))?;
		}
		Ok(())
	}
}

/// Pack a four-character label into three big-endian bytes.
///
/// The input is uppercased first. Space maps to 0; every other character maps to
/// `code - 32` and must land in `1..=63`.
pub fn encode_label(label: &str) -> Result<[u8; LABEL_BYTES]> {
	let invalid = || TdfError::InvalidLabel { label: label.to_owned() };

	let mut chars = label.chars();
	let mut packed = 0_u32;
	for _ in 0..LABEL_CHARS {
		let ch = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
		let six = match ch {
			' ' => 0,
			'!'..='_' => u32::from(ch) - 32,
			_ => return Err(invalid()),
		};
		packed = (packed << 6) | six;
	}
	if chars.next().is_some() {
		return Err(invalid());
	}

	let [_, b0, b1, b2] = packed.to_be_bytes();
	Ok([b0, b1, b2])
}

/// Unpack three label bytes into the four-character label string.
pub fn decode_label(bytes: [u8; LABEL_BYTES]) -> String {
	unpack(bytes).into_iter().map(char::from).collect()
}

fn unpack(bytes: [u8; LABEL_BYTES]) -> [u8; LABEL_CHARS] {
	let packed = u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]);
	let mut out = [b' '; LABEL_CHARS];
	for (index, slot) in out.iter_mut().enumerate() {
		let shift = 6 * (LABEL_CHARS - 1 - index);
		let six = ((packed >> shift) & 0x3F) as u8;
		if six != 0 {
			*slot = six + 32;
		}
	}
	out
}
