//! Gallery view model
//!
//! Joins the files of the watched folder with their stored tags, ranks them by
//! usage and projects the result through an optional single-tag filter. All
//! derived state is recomputed from (files, metadata, selected tag) by pure
//! functions; [`Gallery`] only holds the last result and the selection.

pub mod files;

pub use files::{has_image_extension, list_images};

use crate::metadata::GifMetadata;
use crate::usage::UsageRanker;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// One GIF as shown in the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifItem {
    /// Filename inside the watched folder
    pub id: String,
    pub tags: Vec<String>,
    pub file_path: PathBuf,
}

impl GifItem {
    /// Whether the item carries exactly `tag`
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Join filenames with their metadata; files without an entry get no tags
#[must_use]
pub fn build_items(folder: &Path, files: &[String], metadata: &GifMetadata) -> Vec<GifItem> {
    files
        .iter()
        .map(|name| GifItem {
            id: name.clone(),
            tags: metadata.get(name).map(|r| r.tags.clone()).unwrap_or_default(),
            file_path: folder.join(name),
        })
        .collect()
}

/// All distinct tags across `items`, sorted ascending
#[must_use]
pub fn tag_universe(items: &[GifItem]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The subsequence of `items` carrying `tag`; `None` keeps everything
#[must_use]
pub fn filter_by_tag<'a>(items: &'a [GifItem], tag: Option<&str>) -> Vec<&'a GifItem> {
    match tag {
        Some(tag) => items.iter().filter(|item| item.has_tag(tag)).collect(),
        None => items.iter().collect(),
    }
}

/// Ranked, filterable list of the GIFs in one folder
#[derive(Debug, Clone)]
pub struct Gallery {
    folder: PathBuf,
    items: Vec<GifItem>,
    tags: Vec<String>,
    selected_tag: Option<String>,
}

impl Gallery {
    /// Build the gallery for `files` in `folder`
    #[must_use]
    pub fn new(
        folder: impl Into<PathBuf>,
        files: &[String],
        metadata: &GifMetadata,
        ranker: &dyn UsageRanker,
    ) -> Self {
        let mut gallery = Self {
            folder: folder.into(),
            items: Vec::new(),
            tags: Vec::new(),
            selected_tag: None,
        };
        gallery.refresh(files, metadata, ranker);
        gallery
    }

    /// Recompute items and tags, keeping the current selection
    pub fn refresh(&mut self, files: &[String], metadata: &GifMetadata, ranker: &dyn UsageRanker) {
        self.items = ranker.rank(build_items(&self.folder, files, metadata));
        self.tags = tag_universe(&self.items);
    }

    pub fn select_tag(&mut self, tag: impl Into<String>) {
        self.selected_tag = Some(tag.into());
    }

    pub fn clear_tag(&mut self) {
        self.selected_tag = None;
    }

    #[must_use]
    pub fn selected_tag(&self) -> Option<&str> {
        self.selected_tag.as_deref()
    }

    /// Ranked items passing the tag filter
    #[must_use]
    pub fn visible(&self) -> Vec<&GifItem> {
        filter_by_tag(&self.items, self.selected_tag())
    }

    /// All ranked items, ignoring the filter
    #[must_use]
    pub fn items(&self) -> &[GifItem] {
        &self.items
    }

    /// Distinct tags of all items, sorted
    #[must_use]
    pub fn tag_universe(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Look an item up by filename
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&GifItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items carrying `tag`
    #[must_use]
    pub fn tag_count(&self, tag: &str) -> usize {
        self.items.iter().filter(|item| item.has_tag(tag)).count()
    }
}
