//! Cleanup command - drop tags of GIFs that left the folder

use super::Context;
use crate::gallery::list_images;
use crate::GifrError;
use colored::Colorize;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, GifrError>;

/// Execute the cleanup command
///
/// Returns the number of stale entries removed.
///
/// # Errors
/// Returns an error if the folder is missing or unreadable, or if the pruned
/// metadata cannot be saved
pub fn execute(ctx: &Context<'_>) -> Result<usize> {
    let folder = ctx.folder()?;
    if !folder.is_dir() {
        return Err(GifrError::InvalidInput(format!(
            "GIF folder {} does not exist; refusing to drop its tags",
            folder.display()
        )));
    }

    let files = list_images(folder, &ctx.extensions)?;
    let existing: HashSet<String> = files.into_iter().collect();

    if !ctx.quiet {
        println!("Scanning tags for deleted GIFs...");
    }
    let (_, removed) = ctx.store().cleanup_counted(&existing)?;

    let forgotten = ctx.tracker().retain(&existing)?;

    if !ctx.quiet {
        if removed == 0 {
            println!("No issues found. Tags are clean.");
        } else {
            println!("{} Removed tags of {removed} deleted GIF(s)", "✓".green());
        }
    }
    if !ctx.quiet && forgotten > 0 {
        println!("Forgot usage history of {forgotten} deleted GIF(s)");
    }
    Ok(removed)
}
