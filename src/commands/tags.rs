//! Tags command - every tag in use across the gallery

use super::Context;
use crate::{GifrError, output};

type Result<T> = std::result::Result<T, GifrError>;

/// Execute the tags command
///
/// # Errors
/// Returns an error if no folder is configured or it cannot be read
pub fn execute(ctx: &Context<'_>) -> Result<()> {
    let gallery = ctx.load_gallery()?;
    let tags = gallery.tag_universe();

    if tags.is_empty() {
        if !ctx.quiet {
            println!("No tags found. Add some with `gifr tag <FILE> <TAGS>`.");
        }
        return Ok(());
    }

    if !ctx.quiet {
        println!("Tags in use:");
    }
    for tag in tags {
        println!("{}", output::tag_with_count(tag, gallery.tag_count(tag), ctx.quiet));
    }
    Ok(())
}
