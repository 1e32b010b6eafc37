//! Configuration module for gifr
//!
//! Manages the folder to watch, the database location and display options.
//! Configuration is stored in the user's config directory.

mod setup;

pub use setup::first_time_setup;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by `gifr config get/set`
pub const CONFIG_KEYS: [&str; 4] = ["folder", "database", "extensions", "quiet"];

fn default_extensions() -> Vec<String> {
    vec!["gif".to_string()]
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GifrConfig {
    /// Folder whose images make up the gallery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_folder: Option<PathBuf>,

    /// Location of the tag database; defaults to the user data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// File extensions treated as images, matched without case
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for GifrConfig {
    fn default() -> Self {
        Self {
            gif_folder: None,
            database: None,
            extensions: default_extensions(),
            quiet: false,
        }
    }
}

impl GifrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("gifr").join("config.toml"))
    }

    /// Default database location inside the user data directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system data directory cannot be determined.
    pub fn default_database_path() -> Result<PathBuf, ConfigError> {
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;
        Ok(data_dir.join("gifr").join("db"))
    }

    /// Load configuration from `path`, creating a default file if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration, running first-time setup if it doesn't exist
    ///
    /// With `interactive` off a missing file yields the defaults without
    /// prompting or writing anything.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup(interactive: bool) -> Result<Self, ConfigError> {
        Self::load_or_setup_at(&Self::config_path()?, interactive)
    }

    /// [`Self::load_or_setup`] against the file at `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup_at(path: &Path, interactive: bool) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load_from(path)
        } else if interactive {
            first_time_setup(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// The configured database path, or the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is configured and the data directory
    /// cannot be determined.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => Self::default_database_path(),
        }
    }

    /// Read a setting as text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `key` is not a known setting.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let show = |path: &Option<PathBuf>| {
            path.as_ref().map(|p| p.display().to_string()).unwrap_or_default()
        };
        match key {
            "folder" => Ok(show(&self.gif_folder)),
            "database" => Ok(show(&self.database)),
            "extensions" => Ok(self.extensions.join(",")),
            "quiet" => Ok(self.quiet.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Change a setting from text; an empty path value unsets it
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `key` is unknown or `value` is invalid for it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let as_path = |v: &str| (!v.is_empty()).then(|| PathBuf::from(v));
        match key {
            "folder" => self.gif_folder = as_path(value),
            "database" => self.database = as_path(value),
            "extensions" => {
                let extensions: Vec<String> = value
                    .split(',')
                    .map(|e| e.trim().trim_start_matches('.').to_lowercase())
                    .filter(|e| !e.is_empty())
                    .collect();
                if extensions.is_empty() {
                    return Err(ConfigError::Message("At least one extension is required".into()));
                }
                self.extensions = extensions;
            }
            "quiet" => {
                self.quiet = value
                    .parse()
                    .map_err(|_| ConfigError::Message(format!("Invalid boolean value: {value}")))?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown config key '{key}'. Valid keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}
