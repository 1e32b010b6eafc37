//! Output formatting for CLI display
//!
//! This module provides utilities for formatting gallery rows, tag counts and
//! the detail view, plus the user-visible notice sink.

pub mod notice;

pub use notice::{ConsoleNotifier, Notice, NoticeStyle, Notifier, RecordingNotifier};

use crate::gallery::GifItem;
use colored::Colorize;

/// Format a gallery item with its tags for display
#[must_use]
pub fn item_with_tags(item: &GifItem, quiet: bool) -> String {
    if quiet {
        item.file_path.display().to_string()
    } else if item.tags.is_empty() {
        format!("  {} {}", item.id, "(no tags)".dimmed())
    } else {
        format!("  {} [{}]", item.id, item.tags.join(", ").cyan())
    }
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} (used by {count} GIF(s))")
    }
}

/// Multi-line detail view of one item
#[must_use]
pub fn item_details(item: &GifItem) -> String {
    let tags = if item.tags.is_empty() {
        "No tags".dimmed().to_string()
    } else {
        item.tags.join(", ")
    };
    format!(
        "{}\n  {:<9}{}\n  {:<9}{}\n  {:<9}{}",
        item.id.bold(),
        "Filename",
        item.id,
        "Path",
        item.file_path.display(),
        "Tags",
        tags
    )
}

/// Summary line for a successful tag edit
#[must_use]
pub fn tags_saved_message(count: usize, filename: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} tag{plural} saved for {filename}")
}
