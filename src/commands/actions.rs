//! Copy and open actions on a single GIF
//!
//! Both count as a use of the GIF and feed the frecency ranking.

use super::Context;
use crate::gallery::GifItem;
use crate::output::Notice;
use crate::GifrError;
use std::path::Path;

type Result<T> = std::result::Result<T, GifrError>;

/// Put the absolute path of `item` on the system clipboard
///
/// # Errors
/// Returns `GifrError::ClipboardError` if the clipboard is unavailable.
pub fn copy_path(ctx: &Context<'_>, item: &GifItem) -> Result<()> {
    let text = item.file_path.display().to_string();
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| GifrError::ClipboardError(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| GifrError::ClipboardError(e.to_string()))?;

    record_visit(ctx, &item.id);
    ctx.notifier
        .notify(Notice::success("Copied to clipboard", item.file_path.display().to_string()));
    Ok(())
}

/// Open `item` with the system's default viewer
///
/// # Errors
/// Returns `GifrError::OpenError` if no viewer could be launched.
pub fn open_item(ctx: &Context<'_>, item: &GifItem) -> Result<()> {
    open::that(&item.file_path)
        .map_err(|e| GifrError::OpenError(format!("{}: {e}", item.file_path.display())))?;

    record_visit(ctx, &item.id);
    Ok(())
}

/// Count a use of `id`; failing to record it never fails the action
pub fn record_visit(ctx: &Context<'_>, id: &str) {
    if let Err(e) = ctx.tracker().visit(id) {
        tracing::warn!(id, error = %e, "could not record visit");
    }
}

/// Drop the usage history of `item` so it ranks as never used
///
/// # Errors
/// Returns `GifrError::DbError` if the history cannot be written.
pub fn reset_ranking(ctx: &Context<'_>, item: &GifItem) -> Result<()> {
    if ctx.tracker().forget(&item.id)? {
        ctx.notifier.notify(Notice::success("Ranking reset", item.id.clone()));
    }
    Ok(())
}

/// Execute the copy command
///
/// # Errors
/// Returns an error if the file is not in the folder or the clipboard fails
pub fn copy(ctx: &Context<'_>, file: &Path) -> Result<()> {
    let gallery = ctx.load_gallery()?;
    let item = ctx.resolve(&gallery, file)?;
    copy_path(ctx, item)
}

/// Execute the open command
///
/// # Errors
/// Returns an error if the file is not in the folder or no viewer starts
pub fn open(ctx: &Context<'_>, file: &Path) -> Result<()> {
    let gallery = ctx.load_gallery()?;
    let item = ctx.resolve(&gallery, file)?;
    open_item(ctx, item)
}
