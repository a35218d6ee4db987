//! Test fixture loader for Causeway golden datasets.
//!
//! Provides typed deserialization of fixture JSON files and helper functions
//! for loading them in tests across crates.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the fixtures folder inside this crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until the fixtures
    // directory is found.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    loop {
        let candidate = path.join("crates").join("test-fixtures").join("fixtures");
        if candidate.exists() {
            return candidate;
        }
        let local = path.join("fixtures");
        if local.exists() {
            return local;
        }
        if !path.pop() {
            panic!(
                "Could not find fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as a raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}
