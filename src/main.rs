//! Gifr CLI application entry point
//!
//! This is the main executable for gifr. It provides a command-line interface
//! for tagging the GIFs of a folder and finding them again.
//!
//! # Usage
//!
//! ```bash
//! # List GIFs, most used first (default command)
//! gifr
//! gifr list -t funny
//!
//! # Replace the tags of a GIF
//! gifr tag cat.gif cat, funny
//! gifr tag cat.gif            # prompts with the current tags
//!
//! # Use a GIF
//! gifr copy cat.gif
//! gifr open cat.gif
//!
//! # Interactive picker
//! gifr browse
//!
//! # Drop tags of deleted GIFs
//! gifr cleanup
//! ```
//!
//! # Configuration
//!
//! On first run, gifr will prompt for the folder to watch. Configuration is
//! stored in the user's config directory (`~/.config/gifr/config.toml` on Linux).

use colored::Colorize;
use gifr::{
    GifrError,
    cli::{Cli, Commands},
    commands::{self, Context},
    config::GifrConfig,
    db::Database,
    output::ConsoleNotifier,
};
use std::io;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

type Result<T> = std::result::Result<T, GifrError>;

fn main() {
    let cli = Cli::parse_args();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let command = cli.get_command();

    if let Commands::Completions { shell } = command {
        let mut cmd = Cli::command_tree();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let mut config = GifrConfig::load_or_setup(cli.wants_setup())?;
    let quiet = cli.quiet || config.quiet;

    if let Commands::Config { command } = &command {
        let path = GifrConfig::config_path()?;
        return commands::config::execute(&mut config, &path, command, quiet);
    }

    let db_path = match &cli.db {
        Some(path) => path.clone(),
        None => config.database_path()?,
    };
    tracing::debug!(db = %db_path.display(), "opening database");
    let db = Database::open(&db_path)?;
    let notifier = ConsoleNotifier::new(quiet);

    let ctx = Context {
        folder: cli.folder.clone().or_else(|| config.gif_folder.clone()),
        extensions: config.extensions.clone(),
        storage: &db,
        notifier: &notifier,
        quiet,
    };

    match command {
        Commands::List { tag } => commands::list(&ctx, tag.as_deref()),
        Commands::Tags => commands::tags(&ctx),
        Commands::Show { file } => commands::show(&ctx, &file),
        Commands::Tag { file, tags } => commands::tag(&ctx, &file, &tags),
        Commands::Copy { file } => commands::actions::copy(&ctx, &file),
        Commands::Open { file } => commands::actions::open(&ctx, &file),
        Commands::Browse { tag } => commands::browse(&ctx, tag.as_deref()),
        Commands::Cleanup => commands::cleanup(&ctx).map(|_| ()),
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}
