use thiserror::Error;

use crate::codec::ValueKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, TdfError>;

/// Errors produced while reading, writing, and packing TDF data.
#[derive(Debug, Error)]
pub enum TdfError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Kind or element-kind byte outside the ten known kinds.
	#[error("unknown TDF type {kind} at offset {at}")]
	UnknownType {
		/// Offending discriminant byte.
		kind: u8,
		/// Byte offset of the discriminant.
		at: usize,
	},
	/// Structurally valid but unsupported kind combination.
	#[error("TDF type {kind} is not implemented as a {context}")]
	NotImplemented {
		/// Kind that has no defined form in this position.
		kind: ValueKind,
		/// Position the kind was declared for (`list element`, `map key`, `map value`).
		context: &'static str,
	},
	/// Label source string is not four packable characters.
	#[error("invalid label {label:?} (expected 4 characters from the range 0x20..=0x5f after uppercasing)")]
	InvalidLabel {
		/// User-provided label string.
		label: String,
	},
	/// Struct child label packs to a leading zero byte, which reads back as the struct terminator.
	#[error("label {label:?} cannot be a struct child: its packed form starts with the terminator byte (offset {at})")]
	TerminatorLabel {
		/// Offending label, as decoded from its packed form.
		label: String,
		/// Output offset where the child record would have started.
		at: usize,
	},
	/// Not enough bytes remained for a requested read.
	#[error("buffer underrun at offset {at}, need {need} bytes, remaining {rem}")]
	BufferUnderrun {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Varint continuation chain ran off the end of the buffer.
	#[error("unterminated varint starting at offset {at}")]
	InvalidVarint {
		/// Offset of the first varint byte.
		at: usize,
	},
	/// Varint magnitude does not fit a signed 64-bit integer.
	#[error("varint at offset {at} overflows i64")]
	VarintOverflow {
		/// Offset of the first varint byte.
		at: usize,
	},
	/// Union carried the reserved "no active member" discriminant.
	#[error("invalid union discriminant 127 (no active member) at offset {at}")]
	InvalidUnionDiscriminant {
		/// Offset of the discriminant byte in the buffer being read or written.
		at: usize,
	},
	/// Length or count field is negative or otherwise impossible.
	#[error("invalid length {len} at offset {at}")]
	InvalidLength {
		/// Offset of the length varint.
		at: usize,
		/// Decoded length value.
		len: i64,
	},
	/// String content is not valid UTF-8.
	#[error("invalid utf-8 in string content at offset {at}")]
	InvalidUtf8 {
		/// Offset of the first content byte.
		at: usize,
	},
	/// Nesting exceeded the configured recursion ceiling.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Declared element count exceeded the configured ceiling.
	#[error("element count too large: count={count}, max={max}")]
	CountTooLarge {
		/// Declared element count.
		count: usize,
		/// Maximum permitted element count.
		max: usize,
	},
	/// List or map element payload does not match the declared element kind.
	#[error("element kind mismatch: declared {expected}, got {got}")]
	KindMismatch {
		/// Declared element kind.
		expected: ValueKind,
		/// Kind of the offending payload.
		got: ValueKind,
	},
	/// Hex input text could not be parsed.
	#[error("invalid hex input: {reason}")]
	InvalidHex {
		/// Parser failure detail.
		reason: String,
	},
	/// JSON document could not be parsed or mapped onto values.
	#[error("invalid json document: {reason}")]
	InvalidJson {
		/// Parser or mapping failure detail.
		reason: String,
	},
}
