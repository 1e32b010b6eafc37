//! Config command - read and change settings

use crate::cli::ConfigCommands;
use crate::config::GifrConfig;
use crate::GifrError;
use std::path::Path;

type Result<T> = std::result::Result<T, GifrError>;

/// Execute the config command against the file at `path`
///
/// # Errors
/// Returns an error if the setting is malformed or unknown, or the file
/// cannot be written
pub fn execute(
    config: &mut GifrConfig,
    path: &Path,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Get { key } => {
            let value = config.get(key)?;
            if quiet {
                println!("{value}");
            } else {
                println!("{key} = {value}");
            }
        }
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                GifrError::InvalidInput(format!("Expected KEY=VALUE, got '{setting}'"))
            })?;
            let key = key.trim();
            config.set(key, value)?;
            config.save_to(path)?;
            if !quiet {
                println!("Set {key} = {}", config.get(key)?);
            }
        }
    }
    Ok(())
}
