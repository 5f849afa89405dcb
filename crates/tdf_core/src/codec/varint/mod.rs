//! Sign-magnitude variable-length integers.
//!
//! Every byte carries a continuation flag in bit `0x80`. The first byte holds the
//! sign in bit `0x40` and the low 6 magnitude bits; each following byte adds the
//! next 7 magnitude bits.

use crate::codec::{Cursor, Result, Sink, TdfError};

const MORE: u8 = 0x80;
const NEGATIVE: u8 = 0x40;
const FIRST_BITS: u32 = 6;
const NEXT_BITS: u32 = 7;

/// Largest encoding of an `i64` magnitude: 6 + 9 * 7 >= 64 bits.
pub const MAX_VARINT_LEN: usize = 10;

/// Decode one varint from the cursor.
pub fn read_varint(cursor: &mut Cursor<'_>) -> Result<i64> {
	let at = cursor.pos();
	let mut byte = cursor.read_u8()?;
	let negative = byte & NEGATIVE != 0;
	let mut magnitude = u64::from(byte & (NEGATIVE - 1));
	let mut shift = FIRST_BITS;

	while byte & MORE != 0 {
		byte = cursor.read_u8().map_err(|_| TdfError::InvalidVarint { at })?;
		let part = u64::from(byte & !MORE);
		if shift >= u64::BITS {
			if part != 0 {
				return Err(TdfError::VarintOverflow { at });
			}
		} else {
			let shifted = part << shift;
			if shifted >> shift != part {
				return Err(TdfError::VarintOverflow { at });
			}
			magnitude |= shifted;
		}
		shift = shift.saturating_add(NEXT_BITS);
	}

	if negative {
		0_i64.checked_sub_unsigned(magnitude).ok_or(TdfError::VarintOverflow { at })
	} else {
		i64::try_from(magnitude).map_err(|_| TdfError::VarintOverflow { at })
	}
}

/// Append the minimal encoding of `value`.
pub fn write_varint(sink: &mut Sink, value: i64) {
	let mut buf = [0_u8; MAX_VARINT_LEN];
	let len = pack(value, &mut buf);
	sink.write_bytes(&buf[..len]);
}

/// Number of bytes [`write_varint`] emits for `value`.
pub fn encoded_len(value: i64) -> usize {
	let mut buf = [0_u8; MAX_VARINT_LEN];
	pack(value, &mut buf)
}

fn pack(value: i64, buf: &mut [u8; MAX_VARINT_LEN]) -> usize {
	let mut magnitude = value.unsigned_abs();

	let mut first = (magnitude & u64::from(NEGATIVE - 1)) as u8;
	if value < 0 {
		first |= NEGATIVE;
	}
	magnitude >>= FIRST_BITS;
	if magnitude != 0 {
		first |= MORE;
	}
	buf[0] = first;

	let mut len = 1;
	while magnitude != 0 {
		let mut byte = (magnitude & u64::from(!MORE)) as u8;
		magnitude >>= NEXT_BITS;
		if magnitude != 0 {
			byte |= MORE;
		}
		buf[len] = byte;
		len += 1;
	}
	len
}

#[cfg(test)]
mod tests;
