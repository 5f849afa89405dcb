/// Buffer decode command.
pub mod decode;
/// JSON-to-TDF encode command.
pub mod encode;
/// JSON document mapping for decoded values.
pub mod json;
/// Label pack/unpack command.
pub mod label;
/// Subscriber setup for `tracing` output.
pub mod logging;
/// Indented tree rendering for decoded values.
pub mod print;
/// Shared input/output helpers.
pub mod util;
