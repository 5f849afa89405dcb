mod bytes;
mod decode;
mod encode;
mod error;
mod kind;
mod label;
mod sink;
mod value;
mod varint;

/// Bounded byte cursor with single-slot lookahead.
pub use bytes::Cursor;
/// Decoder, limits, and decode entry points.
pub use decode::{DecodeOptions, Decoder, decode, decode_with_options};
/// Encoder, limits, and encode entry points.
pub use encode::{EncodeOptions, Encoder, encode, encode_with_options};
/// Error and result aliases.
pub use error::{Result, TdfError};
/// Wire kind discriminants.
pub use kind::ValueKind;
/// Label packing types and helpers.
pub use label::{LABEL_BYTES, LABEL_CHARS, Label, decode_label, encode_label};
/// Growable output buffer.
pub use sink::Sink;
/// Decoded and encodable value model.
pub use value::{ListValue, MapValue, ObjectId, ObjectType, Payload, UNION_NO_MEMBER, UnionValue, Value};
/// Variable-length integer primitives.
pub use varint::{MAX_VARINT_LEN, encoded_len, read_varint, write_varint};
