use proptest::prelude::*;

use super::{MAX_VARINT_LEN, encoded_len, read_varint, write_varint};
use crate::codec::{Cursor, Sink, TdfError};

fn encode(value: i64) -> Vec<u8> {
	let mut sink = Sink::default();
	write_varint(&mut sink, value);
	sink.take()
}

fn decode(bytes: &[u8]) -> Result<i64, TdfError> {
	let mut cursor = Cursor::new(bytes);
	let value = read_varint(&mut cursor)?;
	assert_eq!(cursor.remaining(), 0, "varint should consume the whole buffer");
	Ok(value)
}

#[test]
fn known_encodings() {
	assert_eq!(encode(0), [0x00]);
	assert_eq!(encode(1), [0x01]);
	assert_eq!(encode(42), [0x2A]);
	assert_eq!(encode(63), [0x3F]);
	assert_eq!(encode(64), [0x80, 0x01]);
	assert_eq!(encode(1337), [0xB9, 0x14]);
	assert_eq!(encode(-1), [0x41]);
	assert_eq!(encode(-63), [0x7F]);
	assert_eq!(encode(-64), [0xC0, 0x01]);
	assert_eq!(encode(-65), [0xC1, 0x01]);
}

#[test]
fn representative_values_round_trip_with_minimal_length() {
	let cases: &[(i64, usize)] = &[
		(0, 1),
		(1, 1),
		(63, 1),
		(64, 2),
		(65, 2),
		(8191, 2),
		(8192, 3),
		(-1, 1),
		(-63, 1),
		(-64, 2),
		(-65, 2),
		(i64::MIN + 1, 10),
		(i64::MIN, 10),
		(i64::MAX, 10),
	];

	for &(value, len) in cases {
		let bytes = encode(value);
		assert_eq!(bytes.len(), len, "unexpected length for {value}");
		assert_eq!(encoded_len(value), len);
		assert_eq!(decode(&bytes).expect("decodes"), value);
	}
}

#[test]
fn negative_zero_decodes_to_zero() {
	assert_eq!(decode(&[0x40]).expect("negative zero"), 0);
}

#[test]
fn non_minimal_encoding_is_accepted() {
	assert_eq!(decode(&[0x81, 0x00]).expect("padded varint"), 1);
}

#[test]
fn unterminated_chain_is_invalid() {
	let err = decode(&[0x80]).expect_err("dangling continuation");
	assert!(matches!(err, TdfError::InvalidVarint { at: 0 }));

	let mut cursor = Cursor::new(&[0x00, 0xFF, 0xFF]);
	read_varint(&mut cursor).expect("first varint");
	let err = read_varint(&mut cursor).expect_err("dangling continuation");
	assert!(matches!(err, TdfError::InvalidVarint { at: 1 }));
}

#[test]
fn empty_input_is_buffer_underrun() {
	let err = decode(&[]).expect_err("no bytes");
	assert!(matches!(err, TdfError::BufferUnderrun { at: 0, .. }));
}

#[test]
fn magnitude_above_i64_overflows() {
	let mut positive_min = vec![0x80; MAX_VARINT_LEN - 1];
	positive_min.push(0x02);
	let err = decode(&positive_min).expect_err("2^63 is not a positive i64");
	assert!(matches!(err, TdfError::VarintOverflow { at: 0 }));

	let mut negative_min = positive_min.clone();
	negative_min[0] = 0xC0;
	assert_eq!(decode(&negative_min).expect("-2^63 fits"), i64::MIN);

	let mut too_wide = vec![0x80; MAX_VARINT_LEN - 1];
	too_wide.push(0x04);
	let err = decode(&too_wide).expect_err("bit 64 set");
	assert!(matches!(err, TdfError::VarintOverflow { .. }));
}

proptest! {
	#[test]
	fn any_i64_round_trips(value in any::<i64>()) {
		let bytes = encode(value);
		prop_assert_eq!(decode(&bytes).expect("decodes"), value);
		prop_assert_eq!(bytes.len(), encoded_len(value));
	}

	#[test]
	fn encoding_is_minimal(value in any::<i64>()) {
		let bytes = encode(value);
		let bits = u64::BITS - value.unsigned_abs().leading_zeros();
		let expected = if bits <= 6 { 1 } else { 1 + (bits as usize - 6).div_ceil(7) };
		prop_assert_eq!(bytes.len(), expected);
		prop_assert_eq!(bytes.last().copied().unwrap_or(0) & 0x80, 0);
	}
}
