//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs against a [`Context`]: the watched folder, the key-value storage and
//! the notice sink.

pub mod actions;
pub mod browse;
pub mod cleanup;
pub mod config;
pub mod list;
pub mod show;
pub mod tag;
pub mod tags;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use cleanup::execute as cleanup;
pub use list::execute as list;
pub use show::execute as show;
pub use tag::execute as tag;
pub use tags::execute as tags;

use crate::cli::file_id;
use crate::db::KeyValueStore;
use crate::gallery::{Gallery, GifItem, list_images};
use crate::metadata::{MetadataStore, prune};
use crate::output::Notifier;
use crate::usage::FrecencyTracker;
use crate::GifrError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, GifrError>;

/// Everything a command needs from the outside world
pub struct Context<'a> {
    pub folder: Option<PathBuf>,
    pub extensions: Vec<String>,
    pub storage: &'a dyn KeyValueStore,
    pub notifier: &'a dyn Notifier,
    pub quiet: bool,
}

impl<'a> Context<'a> {
    #[must_use]
    pub fn store(&self) -> MetadataStore<'a> {
        MetadataStore::new(self.storage, self.notifier)
    }

    #[must_use]
    pub fn tracker(&self) -> FrecencyTracker<'a> {
        FrecencyTracker::new(self.storage)
    }

    /// The watched folder
    ///
    /// # Errors
    /// Returns `GifrError::FolderNotConfigured` if no folder is set.
    pub fn folder(&self) -> Result<&Path> {
        self.folder.as_deref().ok_or(GifrError::FolderNotConfigured)
    }

    /// Enumerate, clean up stale entries and build the ranked gallery
    ///
    /// Cleanup always runs against the fresh enumeration before the metadata
    /// is used. A failed cleanup write is logged and the stale entries are
    /// only hidden for this run. A folder that does not exist is never used
    /// to prune, so an unmounted drive does not erase every tag.
    ///
    /// # Errors
    /// Returns an error if no folder is configured or the folder cannot be read.
    pub fn load_gallery(&self) -> Result<Gallery> {
        let folder = self.folder()?;
        let files = list_images(folder, &self.extensions)?;
        let store = self.store();
        let tracker = self.tracker();

        let metadata = if folder.is_dir() {
            let existing: HashSet<String> = files.iter().cloned().collect();
            if let Err(e) = tracker.retain(&existing) {
                tracing::warn!(error = %e, "could not prune usage history");
            }
            match store.cleanup_metadata(&existing) {
                Ok(cleaned) => cleaned,
                Err(e) => {
                    tracing::warn!(error = %e, "stale metadata kept on disk");
                    prune(store.load(), &existing).0
                }
            }
        } else {
            store.load()
        };

        Ok(Gallery::new(folder, &files, &metadata, &tracker))
    }

    /// Find the gallery item named by a FILE argument
    ///
    /// # Errors
    /// Returns `GifrError::InvalidInput` if the file is not in the folder.
    pub fn resolve<'g>(&self, gallery: &'g Gallery, file: &Path) -> Result<&'g GifItem> {
        let id = file_id(file).ok_or_else(|| {
            GifrError::InvalidInput(format!("'{}' is not a file name", file.display()))
        })?;
        gallery.find(&id).ok_or_else(|| {
            GifrError::InvalidInput(format!(
                "'{id}' is not an image in {}",
                gallery.folder().display()
            ))
        })
    }
}
