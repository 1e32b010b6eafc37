//! Testing utilities for gifr
//!
//! This module provides helper types and functions for writing tests,
//! including a `TestDb` wrapper for temporary database management and a
//! temporary GIF folder builder.
//!
//! Only available when compiled with `cfg(test)`.

use crate::db::Database;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Wrapper for a temporary test database that cleans up on drop
///
/// The database lives in its own temporary directory, so parallel tests never
/// share state.
pub struct TestDb {
    db: Database,
    // Dropped after `db`, removing the directory once sled has flushed.
    _dir: TempDir,
}

impl TestDb {
    /// Create a new empty test database
    ///
    /// # Panics
    /// Panics if the temporary directory or the database cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let db = Database::open(dir.path().join("db")).expect("Failed to open test database");
        Self { db, _dir: dir }
    }

    /// Get a reference to the underlying database
    #[must_use]
    pub const fn db(&self) -> &Database {
        &self.db
    }
}

impl Default for TestDb {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a temporary folder containing files with the given names
///
/// # Panics
/// Panics if the folder or any file cannot be created.
#[must_use]
pub fn gif_folder(names: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for name in names {
        create_test_file(dir.path().join(name)).expect("Failed to create test file");
    }
    dir
}

/// Create a test file with placeholder content
///
/// # Errors
/// Returns an `io::Error` if the file cannot be written.
pub fn create_test_file(path: impl AsRef<Path>) -> std::io::Result<()> {
    fs::write(path, b"GIF89a")
}
