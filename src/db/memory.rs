//! In-memory key-value store for testing

use super::error::DbError;
use super::traits::KeyValueStore;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Volatile store that keeps values in a map
///
/// Useful for testing without touching the filesystem. Writes can be made to
/// fail on demand to exercise the error paths of callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, Vec<u8>>>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one value already present
    #[must_use]
    pub fn with_value(key: &str, value: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.to_string(), value.into());
        store
    }

    /// Make every subsequent `set` and `remove` fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful writes since creation
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Raw bytes stored under `key`, bypassing the trait
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DbError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), DbError> {
        if self.fail_writes.get() {
            return Err(DbError::WriteRejected(key.to_string()));
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_vec());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, DbError> {
        if self.fail_writes.get() {
            return Err(DbError::WriteRejected(key.to_string()));
        }
        self.writes.set(self.writes.get() + 1);
        Ok(self.values.borrow_mut().remove(key).is_some())
    }
}
