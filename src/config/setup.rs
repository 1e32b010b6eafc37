//! Interactive setup wizard for first-time configuration
//!
//! This module handles the interactive prompts for creating an initial
//! configuration when gifr is run for the first time.

use super::GifrConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::{Path, PathBuf};

/// Interactive first-time setup - prompts for the GIF folder and database location
///
/// Guides the user through creating their configuration:
/// 1. Prompts for the folder to watch (default: `~/Pictures/GIFs`)
/// 2. Prompts for the database location (default: system data directory)
/// 3. Saves the configuration to `path`
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The system data directory cannot be determined
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup(path: &Path) -> Result<GifrConfig, ConfigError> {
    println!("Welcome to gifr! Let's pick the folder of GIFs to tag.\n");

    let folder: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("GIF folder")
        .default(default_folder().to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let default_db = GifrConfig::default_database_path()?;
    let db_path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Database location")
        .default(default_db.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = config_from_answers(&folder, &db_path);
    config.save_to(path)?;

    println!("\nConfiguration saved to {}", path.display());
    Ok(config)
}

/// Suggested GIF folder: `GIFs` inside the pictures or home directory
#[must_use]
pub fn default_folder() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("GIFs"))
        .unwrap_or_default()
}

/// Build the configuration from the two setup answers
///
/// Blank answers leave the setting unset.
#[must_use]
pub fn config_from_answers(folder: &str, database: &str) -> GifrConfig {
    let as_path = |answer: &str| {
        let answer = answer.trim();
        (!answer.is_empty()).then(|| PathBuf::from(answer))
    };
    GifrConfig {
        gif_folder: as_path(folder),
        database: as_path(database),
        ..GifrConfig::default()
    }
}
