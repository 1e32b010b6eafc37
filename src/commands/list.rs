//! List command - the ranked gallery, optionally filtered by one tag

use super::Context;
use crate::{GifrError, output};

type Result<T> = std::result::Result<T, GifrError>;

/// Execute the list command
///
/// # Errors
/// Returns an error if no folder is configured or it cannot be read
pub fn execute(ctx: &Context<'_>, tag: Option<&str>) -> Result<()> {
    let mut gallery = ctx.load_gallery()?;
    if let Some(tag) = tag {
        gallery.select_tag(tag.trim().to_lowercase());
    }
    let visible = gallery.visible();

    if visible.is_empty() {
        if !ctx.quiet {
            match gallery.selected_tag() {
                Some(tag) => println!("No GIFs tagged '{tag}'."),
                None => println!("No GIFs found in {}.", gallery.folder().display()),
            }
        }
        return Ok(());
    }

    if !ctx.quiet {
        match gallery.selected_tag() {
            Some(tag) => println!("GIFs tagged '{tag}' ({}):", visible.len()),
            None => println!("GIFs in {} ({}):", gallery.folder().display(), visible.len()),
        }
    }
    for item in visible {
        println!("{}", output::item_with_tags(item, ctx.quiet));
    }
    Ok(())
}
