//! Public library API for reading and writing TDF tagged binary records.

/// Label packing, varints, byte cursor/sink primitives, the value model, and the recursive decoder/encoder.
pub mod codec;
