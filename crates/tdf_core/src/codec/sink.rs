/// Append-only growable byte buffer.
///
/// Capacity doubles (or grows to fit the pending write, whichever is larger) so
/// appends stay amortized O(1).
#[derive(Debug, Default)]
pub struct Sink {
	buf: Vec<u8>,
}

impl Sink {
	/// Create an empty sink with room for `capacity` bytes.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buf: Vec::with_capacity(capacity),
		}
	}

	/// Number of bytes written so far.
	pub fn len(&self) -> usize {
		self.buf.len()
	}

	/// Return `true` when nothing has been written.
	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	/// Append one byte.
	pub fn write_u8(&mut self, value: u8) {
		self.write_bytes(&[value]);
	}

	/// Append a little-endian `u16`.
	pub fn write_u16_le(&mut self, value: u16) {
		self.write_bytes(&value.to_le_bytes());
	}

	/// Append a little-endian `u32`.
	pub fn write_u32_le(&mut self, value: u32) {
		self.write_bytes(&value.to_le_bytes());
	}

	/// Append a little-endian `u64`.
	pub fn write_u64_le(&mut self, value: u64) {
		self.write_bytes(&value.to_le_bytes());
	}

	/// Append raw bytes.
	pub fn write_bytes(&mut self, bytes: &[u8]) {
		self.ensure_capacity(bytes.len());
		self.buf.extend_from_slice(bytes);
	}

	/// Return the written region.
	pub fn as_slice(&self) -> &[u8] {
		&self.buf
	}

	/// Consume the sink and return exactly the written bytes.
	pub fn take(self) -> Vec<u8> {
		self.buf
	}

	fn ensure_capacity(&mut self, additional: usize) {
		let need = self.buf.len().saturating_add(additional);
		if need <= self.buf.capacity() {
			return;
		}
		let target = need.max(self.buf.capacity().saturating_mul(2));
		self.buf.reserve_exact(target - self.buf.len());
	}
}

#[cfg(test)]
mod tests {
	use crate::codec::Sink;

	#[test]
	fn writes_fixed_width_little_endian_values() {
		let mut sink = Sink::default();
		sink.write_u8(0xAB);
		sink.write_u16_le(0x1122);
		sink.write_u32_le(0x3344_5566);
		sink.write_u64_le(0x0102_0304_0506_0708);

		assert_eq!(
			sink.take(),
			vec![0xAB, 0x22, 0x11, 0x66, 0x55, 0x44, 0x33, 0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
		);
	}

	#[test]
	fn capacity_doubles_when_full() {
		let mut sink = Sink::with_capacity(4);
		sink.write_bytes(&[1, 2, 3, 4]);
		sink.write_u8(5);
		assert!(sink.buf.capacity() >= 8, "capacity should at least double");
		assert_eq!(sink.as_slice(), &[1, 2, 3, 4, 5]);
	}

	#[test]
	fn large_write_grows_to_fit() {
		let mut sink = Sink::with_capacity(2);
		sink.write_bytes(&[0xEE; 100]);
		assert_eq!(sink.len(), 100);
		assert!(!sink.is_empty());
		assert!(sink.buf.capacity() >= 100);
	}

	#[test]
	fn take_returns_only_written_region() {
		let mut sink = Sink::with_capacity(1024);
		sink.write_bytes(b"abc");
		let out = sink.take();
		assert_eq!(out, b"abc");
	}
}
