//! Temporary locations for test databases.

use std::path::PathBuf;

/// File name used for fixture databases, matching the production layout.
pub const FIXTURE_DB_NAME: &str = "hawaii.sqlite";

/// Creates a temporary directory with a specific prefix.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn temp_test_dir_with_prefix(prefix: &str) -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("Failed to create temporary test directory")
}

/// Path of the fixture database inside `dir`.
pub fn fixture_db_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(FIXTURE_DB_NAME)
}
