//! Module path fixtures

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Module path holding `eight_hundred` at version 8.0.0
pub fn fixture_modulepath() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/module/forge")
}

/// A module path with nothing installed
pub fn empty_modulepath() -> TempDir {
    TempDir::new().unwrap()
}

/// Install a module with the given `metadata.json` content into a fresh module path
pub fn modulepath_with_metadata(name: &str, metadata: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let module_dir = dir.path().join(name);
    std::fs::create_dir_all(&module_dir).unwrap();
    std::fs::write(module_dir.join("metadata.json"), metadata).unwrap();
    dir
}
