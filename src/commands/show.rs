//! Show command - details of one GIF

use super::Context;
use crate::{GifrError, output};
use std::path::Path;

type Result<T> = std::result::Result<T, GifrError>;

/// Execute the show command
///
/// # Errors
/// Returns an error if the file is not an image in the folder
pub fn execute(ctx: &Context<'_>, file: &Path) -> Result<()> {
    let gallery = ctx.load_gallery()?;
    let item = ctx.resolve(&gallery, file)?;

    if ctx.quiet {
        println!("{}", item.tags.join(","));
    } else {
        println!("{}", output::item_details(item));
    }
    Ok(())
}
