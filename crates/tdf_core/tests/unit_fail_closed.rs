#![allow(missing_docs)]

use proptest::prelude::*;
use tdf::codec::{TdfError, Value, decode, encode};

fn sample_record() -> Vec<u8> {
	let value = Value::structure(
		"STRC",
		vec![
			Value::integer("INT ", 42).expect("child builds"),
			Value::string("STR ", "Nested struct").expect("child builds"),
			Value::union("UNIO", 1, Value::variable("VARS", vec![5, -6]).expect("member")).expect("child builds"),
		],
	)
	.expect("struct builds");
	encode(&[value]).expect("encodes")
}

proptest! {
	#[test]
	fn kind_byte_ten_or_more_is_unknown(kind in 10_u8..=255, tail in proptest::collection::vec(any::<u8>(), 0..8)) {
		let mut bytes = vec![0xDA, 0x1B, 0x35, kind];
		bytes.extend(tail);
		let err = decode(&bytes).expect_err("unknown kind");
		prop_assert!(matches!(err, TdfError::UnknownType { kind: got, at: 3 } if got == kind), "unexpected error: {}", err);
	}

	#[test]
	fn truncated_header_is_buffer_underrun(len in 1_usize..4) {
		let bytes = sample_record();
		let err = decode(&bytes[..len]).expect_err("header is incomplete");
		prop_assert!(
			matches!(err, TdfError::BufferUnderrun { .. }),
			"unexpected error: {}",
			err
		);
	}

	#[test]
	fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
		let _ = decode(&bytes);
	}
}

#[test]
fn every_proper_prefix_of_a_record_fails() {
	let bytes = sample_record();
	for len in 1..bytes.len() {
		assert!(decode(&bytes[..len]).is_err(), "prefix of {len} bytes should not decode");
	}
	assert!(decode(&bytes).is_ok());
}
