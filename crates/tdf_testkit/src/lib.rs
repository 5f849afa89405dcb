//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read a fixture file as raw bytes.
pub fn fixture_bytes(name: &str) -> Vec<u8> {
	let path = fixture_path(name);
	std::fs::read(&path).unwrap_or_else(|err| panic!("fixture {} should be readable: {err}", path.display()))
}

/// Parse whitespace-separated hex (`"DA 1B 35"`) into bytes.
pub fn hex_bytes(text: &str) -> Vec<u8> {
	let digits: String = text.chars().filter(|ch| !ch.is_whitespace()).collect();
	assert!(digits.len() % 2 == 0, "hex input should have an even number of digits: {text:?}");
	(0..digits.len())
		.step_by(2)
		.map(|idx| u8::from_str_radix(&digits[idx..idx + 2], 16).unwrap_or_else(|_| panic!("invalid hex pair in {text:?}")))
		.collect()
}

/// Parse command stdout as a JSON document.
pub fn stdout_json(stdout: &[u8]) -> serde_json::Value {
	serde_json::from_slice(stdout).expect("stdout should be valid json")
}
