//! Database wrapper module for gifr
//!
//! Provides the persistent key-value slots that hold tag metadata and usage
//! history, using sled as the embedded database backend.
//!
//! All values live in a single `kv` tree keyed by fixed slot names. Each value
//! is written whole and flushed before the write is reported as done.

use sled::{Db, Tree};
use std::path::Path;

pub mod error;
pub mod memory;
pub mod traits;

pub use error::DbError;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;

/// Database wrapper that encapsulates all storage operations
pub struct Database {
    db: Db,
    kv: Tree,
}

impl Database {
    /// Opens or creates a database at the specified path
    ///
    /// # Arguments
    /// * `path` - Path to the database directory
    ///
    /// # Examples
    /// ```no_run
    /// use gifr::db::Database;
    /// let db = Database::open("my_db").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the database cannot be opened (for example when
    /// another process holds it) or if the internal tree cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DbError> {
        let db = sled::open(path)?;
        let kv = db.open_tree("kv")?;
        Ok(Self { db, kv })
    }

    /// Get the number of occupied slots
    #[cfg(test)]
    #[must_use]
    pub fn count(&self) -> usize {
        self.kv.len()
    }

    /// Flush all pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the flush operation fails.
    pub fn flush(&self) -> Result<(), DbError> {
        self.db.flush()?;
        Ok(())
    }

}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DbError> {
        Ok(self.kv.get(key.as_bytes())?.map(|value| value.to_vec()))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), DbError> {
        self.kv.insert(key.as_bytes(), value)?;
        self.flush()?;
        tracing::debug!(key, bytes = value.len(), "wrote slot");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, DbError> {
        let existed = self.kv.remove(key.as_bytes())?.is_some();
        self.flush()?;
        Ok(existed)
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        // Errors cannot be propagated from Drop; writes already flush.
        let _ = self.db.flush();
    }
}
