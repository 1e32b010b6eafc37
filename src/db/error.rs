//! Storage-specific error types
//!
//! This module defines all error types that can occur while reading or writing
//! the key-value slots backing tag metadata and usage history.
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`DecodeError`** / **`EncodeError`**: bincode failures on usage records
//! - **`JsonError`**: Failures encoding or decoding the metadata blob
//! - **`SerializeError`**: Generic serialization errors (e.g., invalid UTF-8)
//! - **`WriteRejected`**: A store refused the write

use thiserror::Error;

/// Storage-specific errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding data: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding data: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    /// Represents a JSON encoding or decoding error
    #[error("Error while processing JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic serialization/deserialization error
    #[error("Error during serialization: {0}")]
    SerializeError(String),

    /// The store did not accept the write
    #[error("Write rejected for key '{0}'")]
    WriteRejected(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
