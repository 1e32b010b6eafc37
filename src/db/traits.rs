//! The key-value slot abstraction shared by metadata and usage storage

use super::error::DbError;

/// A persistent key-value store holding whole serialized blobs
///
/// Every value is read and written as a unit. Implementations must make a
/// successful `set` visible to the next `get` on the same key.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the underlying storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DbError>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the value cannot be written.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), DbError>;

    /// Remove the value stored under `key`, returning whether one existed
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the underlying storage cannot be written.
    fn remove(&self, key: &str) -> Result<bool, DbError>;
}
