//! Gifr - tag, rank and browse a folder of GIFs
//!
//! This library keeps free-form tags for the images of a watched folder in an
//! embedded key-value store, ranks the gallery by frecency and filters it by tag.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod gallery;
pub mod metadata;
pub mod output;
pub mod usage;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum GifrError {
    /// Database error
    #[error("Database error: {0}")]
    DbError(#[from] db::DbError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// No folder to watch has been configured
    #[error("No GIF folder configured. Run `gifr config set folder=<DIR>`")]
    FolderNotConfigured,
    /// The system clipboard could not be used
    #[error("Clipboard error: {0}")]
    ClipboardError(String),
    /// The system viewer could not be launched
    #[error("Failed to open {0}")]
    OpenError(String),
}
