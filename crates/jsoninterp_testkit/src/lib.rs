//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

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

/// Read and decode a fixture document.
pub fn load_fixture(name: &str) -> Value {
	let path = fixture_path(name);
	let bytes = std::fs::read(&path).unwrap_or_else(|err| panic!("fixture {} is readable: {err}", path.display()));
	serde_json::from_slice(&bytes).unwrap_or_else(|err| panic!("fixture {} is valid json: {err}", path.display()))
}

/// Read a fixture whose root is an object.
pub fn load_fixture_object(name: &str) -> Map<String, Value> {
	match load_fixture(name) {
		Value::Object(map) => map,
		other => panic!("fixture {name} root is not an object: {other}"),
	}
}
