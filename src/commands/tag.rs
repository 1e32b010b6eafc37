//! Tag command - replace the tags of one GIF

use super::Context;
use crate::cli::join_tag_args;
use crate::gallery::GifItem;
use crate::output::{self, Notice};
use crate::GifrError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::Path;

type Result<T> = std::result::Result<T, GifrError>;

/// Execute the tag command
///
/// With no tags given, prompts for them with the current tags pre-filled.
///
/// # Errors
/// Returns an error if the file is not in the folder, the prompt fails or
/// the new tags cannot be saved
pub fn execute(ctx: &Context<'_>, file: &Path, tags: &[String]) -> Result<()> {
    let gallery = ctx.load_gallery()?;
    let item = ctx.resolve(&gallery, file)?;

    let input = if tags.is_empty() {
        if ctx.quiet {
            return Err(GifrError::InvalidInput("No tags provided".into()));
        }
        prompt_tags(item)?
    } else {
        join_tag_args(tags)
    };

    save_tags(ctx, &item.id, &input)?;
    Ok(())
}

/// Ask for comma-separated tags, starting from the current ones
///
/// # Errors
/// Returns `GifrError::InvalidInput` if the terminal cannot be read.
pub fn prompt_tags(item: &GifItem) -> Result<String> {
    let current = if item.tags.is_empty() {
        "No tags".to_string()
    } else {
        item.tags.join(", ")
    };
    println!("File:         {}", item.id);
    println!("Current tags: {current}");

    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Tags (comma separated)")
        .with_initial_text(item.tags.join(", "))
        .allow_empty(true)
        .interact_text()
        .map_err(|e| GifrError::InvalidInput(format!("Failed to read tags: {e}")))
}

/// Sanitize and store `input` as the tags of `id`, then confirm from storage
///
/// The success notice is only shown once the write went through; a failed
/// write has already raised its own notice and is returned.
///
/// # Errors
/// Returns `GifrError::DbError` if the tags cannot be saved.
pub fn save_tags(ctx: &Context<'_>, id: &str, input: &str) -> Result<Vec<String>> {
    let store = ctx.store();
    store.update_file_tags(id, input)?;

    let saved = store.load().remove(id).map(|r| r.tags).unwrap_or_default();
    ctx.notifier
        .notify(Notice::success("Tags updated", output::tags_saved_message(saved.len(), id)));
    Ok(saved)
}
