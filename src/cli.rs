//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for gifr using the `clap` crate.
//!
//! # Commands
//!
//! - **list**: Frecency-ranked gallery, optionally filtered by tag (default)
//! - **tags**: Every tag in use with its GIF count
//! - **show**: Details of one GIF
//! - **tag**: Replace the tags of a GIF
//! - **copy** / **open**: Use a GIF and record the visit
//! - **browse**: Interactive tag filter and GIF picker
//! - **cleanup**: Drop tags of GIFs that were deleted from the folder
//! - **config**: Read and change settings
//! - **completions**: Generate shell completion scripts

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};

/// Tag, rank and browse a folder of GIFs
#[derive(Parser, Debug)]
#[command(name = "gifr", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use this GIF folder instead of the configured one
    #[arg(long, global = true, value_name = "DIR")]
    pub folder: Option<PathBuf>,

    /// Use this database instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `gifr=trace`
    #[arg(long, global = true, default_value = "warn", value_name = "FILTER")]
    pub log_level: String,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run; `list` when none was given
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List { tag: None })
    }

    /// Whether a missing config file should start the first-run prompts
    ///
    /// Quiet runs never prompt, and neither do runs that name both the folder
    /// and the database on the command line.
    #[must_use]
    pub const fn wants_setup(&self) -> bool {
        !self.quiet && !(self.folder.is_some() && self.db.is_some())
    }

    /// The clap command tree, for completion generation
    #[must_use]
    pub fn command_tree() -> clap::Command {
        Self::command()
    }
}

/// Top-level commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List GIFs, most used first
    #[command(visible_alias = "ls")]
    List {
        /// Only show GIFs carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// List every tag in use
    Tags,

    /// Show the details of a GIF
    Show {
        /// Filename inside the GIF folder
        file: PathBuf,
    },

    /// Replace the tags of a GIF (prompts when no tags are given)
    #[command(visible_alias = "t")]
    Tag {
        /// Filename inside the GIF folder
        file: PathBuf,

        /// New tags, comma or space separated
        tags: Vec<String>,
    },

    /// Copy the path of a GIF to the clipboard
    #[command(visible_alias = "cp")]
    Copy {
        /// Filename inside the GIF folder
        file: PathBuf,
    },

    /// Open a GIF in the system viewer
    Open {
        /// Filename inside the GIF folder
        file: PathBuf,
    },

    /// Pick a tag and a GIF interactively
    #[command(visible_alias = "b")]
    Browse {
        /// Start with this tag selected
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Remove tags of GIFs that no longer exist
    #[command(visible_alias = "c")]
    Cleanup,

    /// Read or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., folder=~/gifs)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., folder)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Reduce a FILE argument to the filename used as the metadata key
///
/// Accepts a bare name or any path whose last component is the name.
#[must_use]
pub fn file_id(file: &Path) -> Option<String> {
    file.file_name()
        .and_then(|name| name.to_str())
        .map(String::from)
}

/// Join positional tag arguments into one comma-separated input
#[must_use]
pub fn join_tag_args(tags: &[String]) -> String {
    tags.join(",")
}
