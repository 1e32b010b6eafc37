//! Image file enumeration for the watched folder

use std::fs;
use std::io;
use std::path::Path;

/// Whether `name` ends in `.` plus one of `extensions`, ignoring case
///
/// Matches on the suffix alone, so a file named just `.gif` counts.
#[must_use]
pub fn has_image_extension(name: &str, extensions: &[String]) -> bool {
    let name = name.to_lowercase();
    extensions
        .iter()
        .any(|ext| name.ends_with(&format!(".{}", ext.to_lowercase())))
}

/// List the image filenames directly inside `dir`, sorted by name
///
/// A folder that does not exist yields an empty list. Subdirectories and names
/// that are not valid UTF-8 are skipped.
///
/// # Errors
///
/// Returns an `io::Error` if an existing folder cannot be read.
pub fn list_images(dir: &Path, extensions: &[String]) -> io::Result<Vec<String>> {
    if !dir.is_dir() {
        tracing::warn!(folder = %dir.display(), "GIF folder does not exist");
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(String::from) else {
            continue;
        };
        if has_image_extension(&name, extensions) {
            names.push(name);
        }
    }
    names.sort();
    tracing::debug!(folder = %dir.display(), count = names.len(), "listed images");
    Ok(names)
}
