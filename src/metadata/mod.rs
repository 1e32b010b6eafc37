//! Tag metadata store
//!
//! Keeps the mapping from filename to [`TagRecord`] as one JSON object in a
//! single key-value slot. Reads never fail: an unreadable or corrupted slot is
//! reported to the user and treated as empty. Writes propagate their errors so
//! callers never claim a change that did not persist.
//!
//! Every operation is a whole-value load-modify-save. There is no locking, so
//! two processes writing the slot at the same time would lose one update.

pub mod sanitize;

pub use sanitize::{MAX_TAG_LEN, normalize_tags, sanitize};

use crate::db::{DbError, KeyValueStore};
use crate::output::{Notice, Notifier};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Slot holding the serialized metadata
pub const STORAGE_KEY: &str = "gif-metadata";

/// Tags attached to one file
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TagRecord {
    pub tags: Vec<String>,
}

impl TagRecord {
    #[must_use]
    pub const fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }
}

/// Filename to tags mapping as persisted
pub type GifMetadata = BTreeMap<String, TagRecord>;

/// Load/save access to the persisted tag metadata
pub struct MetadataStore<'a> {
    storage: &'a dyn KeyValueStore,
    notifier: &'a dyn Notifier,
}

impl<'a> MetadataStore<'a> {
    #[must_use]
    pub fn new(storage: &'a dyn KeyValueStore, notifier: &'a dyn Notifier) -> Self {
        Self { storage, notifier }
    }

    /// Read the current mapping
    ///
    /// A missing slot yields an empty mapping. A slot that cannot be read or
    /// decoded is logged, reported with a failure notice and also yields an
    /// empty mapping.
    #[must_use]
    pub fn load(&self) -> GifMetadata {
        match self.read() {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::error!(error = %e, "failed to load metadata");
                self.notifier.notify(Notice::failure(
                    "Failed to load tags",
                    "Tag metadata was corrupted and has been reset",
                ));
                GifMetadata::new()
            }
        }
    }

    fn read(&self) -> Result<GifMetadata, DbError> {
        let Some(raw) = self.storage.get(STORAGE_KEY)? else {
            return Ok(GifMetadata::new());
        };
        if raw.is_empty() {
            return Ok(GifMetadata::new());
        }
        let text = std::str::from_utf8(&raw)
            .map_err(|e| DbError::SerializeError(format!("metadata is not UTF-8: {e}")))?;
        let metadata: GifMetadata = serde_json::from_str(text)?;
        tracing::debug!(entries = metadata.len(), "loaded metadata");
        Ok(metadata)
    }

    /// Replace the persisted mapping with `metadata`
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the mapping cannot be serialized or written. A
    /// failure notice has already been shown when this returns an error.
    pub fn save(&self, metadata: &GifMetadata) -> Result<(), DbError> {
        let result = serde_json::to_vec(metadata)
            .map_err(DbError::from)
            .and_then(|bytes| self.storage.set(STORAGE_KEY, &bytes));

        if let Err(e) = &result {
            tracing::error!(error = %e, "failed to save metadata");
            self.notifier.notify(Notice::failure(
                "Failed to save tags",
                "Could not persist tag changes",
            ));
        }
        result
    }

    /// Replace the tags of `filename` with the sanitized `input`
    ///
    /// Returns the tags that were stored. An input that sanitizes to nothing
    /// stores an empty record.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the updated mapping cannot be saved.
    pub fn update_file_tags(&self, filename: &str, input: &str) -> Result<Vec<String>, DbError> {
        let tags = sanitize(input);
        let mut metadata = self.load();
        metadata.insert(filename.to_string(), TagRecord::new(tags.clone()));
        self.save(&metadata)?;
        tracing::debug!(filename, tags = tags.len(), "updated file tags");
        Ok(tags)
    }

    /// Drop entries for files that are no longer present
    ///
    /// Writes only when something was removed. Returns the pruned mapping in
    /// either case.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the pruned mapping cannot be saved.
    pub fn cleanup_metadata(&self, existing: &HashSet<String>) -> Result<GifMetadata, DbError> {
        self.cleanup_counted(existing).map(|(cleaned, _)| cleaned)
    }

    /// [`cleanup_metadata`](Self::cleanup_metadata), also returning how many
    /// entries were removed
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the pruned mapping cannot be saved.
    pub fn cleanup_counted(&self, existing: &HashSet<String>) -> Result<(GifMetadata, usize), DbError> {
        let (cleaned, removed) = prune(self.load(), existing);
        if removed > 0 {
            self.save(&cleaned)?;
            tracing::info!("Cleaned up {removed} stale metadata entries");
        }
        Ok((cleaned, removed))
    }
}

/// Keep only entries whose filename is in `existing`
///
/// Returns the retained mapping and the number of entries dropped.
#[must_use]
pub fn prune(mut metadata: GifMetadata, existing: &HashSet<String>) -> (GifMetadata, usize) {
    let before = metadata.len();
    metadata.retain(|filename, _| existing.contains(filename));
    let removed = before - metadata.len();
    (metadata, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::output::{NoticeStyle, RecordingNotifier};

    fn record(tags: &[&str]) -> TagRecord {
        TagRecord::new(tags.iter().map(|t| (*t).to_string()).collect())
    }

    fn names(files: &[&str]) -> HashSet<String> {
        files.iter().map(|f| (*f).to_string()).collect()
    }

    #[test]
    fn test_load_empty_store() {
        let storage = MemoryStore::new();
        let notifier = RecordingNotifier::new();
        let store = MetadataStore::new(&storage, &notifier);

        assert!(store.load().is_empty());
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let storage = MemoryStore::new();
        let notifier = RecordingNotifier::new();
        let store = MetadataStore::new(&storage, &notifier);

        let mut metadata = GifMetadata::new();
        metadata.insert("b.gif".into(), record(&["zebra", "apple"]));
        metadata.insert("a.gif".into(), record(&[]));
        store.save(&metadata).unwrap();

        assert_eq!(store.load(), metadata);
    }

    #[test]
    fn test_persisted_format_is_json_object() {
        let storage = MemoryStore::new();
        let notifier = RecordingNotifier::new();
        let store = MetadataStore::new(&storage, &notifier);

        store.update_file_tags("cat.gif", "Cat, Funny").unwrap();

        let raw = storage.raw(STORAGE_KEY).unwrap();
        assert_eq!(
            String::from_utf8(raw).unwrap(),
            r#"{"cat.gif":{"tags":["cat","funny"]}}"#
        );
    }

    #[test]
    fn test_update_file_tags_from_empty() {
        let storage = MemoryStore::new();
        let notifier = RecordingNotifier::new();
        let store = MetadataStore::new(&storage, &notifier);

        let saved = store.update_file_tags("cat.gif", "Cat, Funny").unwrap();

        assert_eq!(saved, vec!["cat", "funny"]);
        let mut expected = GifMetadata::new();
        expected.insert("cat.gif".into(), record(&["cat", "funny"]));
        assert_eq!(store.load(), expected);
    }

    #[test]
    fn test_update_file_tags_replaces_not_merges() {
        let storage = MemoryStore::new();
        let notifier = RecordingNotifier::new();
        let store = MetadataStore::new(&storage, &notifier);

        store.update_file_tags("cat.gif", "cat, funny").unwrap();
        store.update_file_tags("dog.gif", "dog").unwrap();
        store.update_file_tags("cat.gif", "sleepy").unwrap();

        let metadata = store.load();
        assert_eq!(metadata["cat.gif"], record(&["sleepy"]));
        assert_eq!(metadata["dog.gif"], record(&["dog"]));
    }

    #[test]
    fn test_update_with_blank_input_stores_empty_record() {
        let storage = MemoryStore::new();
        let notifier = RecordingNotifier::new();
        let store = MetadataStore::new(&storage, &notifier);

        store.update_file_tags("cat.gif", "cat").unwrap();
        let saved = store.update_file_tags("cat.gif", " , ").unwrap();

        assert!(saved.is_empty());
        assert_eq!(store.load()["cat.gif"], record(&[]));
    }

    #[test]
    fn test_corrupted_value_resets_to_empty() {
        let storage = MemoryStore::with_value(STORAGE_KEY, "{not json");
        let notifier = RecordingNotifier::new();
        let store = MetadataStore::new(&storage, &notifier);

        assert!(store.load().is_empty());

        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].style, NoticeStyle::Failure);
        assert_eq!(notices[0].title, "Failed to load tags");
        assert_eq!(notices[0].message, "Tag metadata was corrupted and has been reset");
    }

    #[test]
    fn test_non_object_values_are_corruption() {
        for raw in ["[1,2,3]", "\"text\"", "42", r#"{"a.gif":["x"]}"#] {
            let storage = MemoryStore::with_value(STORAGE_KEY, raw);
            let notifier = RecordingNotifier::new();
            let store = MetadataStore::new(&storage, &notifier);

            assert!(store.load().is_empty(), "raw: {raw}");
            assert_eq!(notifier.failures(), 1, "raw: {raw}");
        }
    }

    #[test]
    fn test_non_utf8_value_is_corruption() {
        let storage = MemoryStore::with_value(STORAGE_KEY, vec![0xffu8, 0xfe, 0x00]);
        let notifier = RecordingNotifier::new();
        let store = MetadataStore::new(&storage, &notifier);

        assert!(store.load().is_empty());
        assert_eq!(notifier.failures(), 1);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let storage =
            MemoryStore::with_value(STORAGE_KEY, r#"{"a.gif":{"tags":["x"],"rating":5}}"#);
        let notifier = RecordingNotifier::new();
        let store = MetadataStore::new(&storage, &notifier);

        assert_eq!(store.load()["a.gif"], record(&["x"]));
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_corruption_is_overwritten_by_next_save() {
        let storage = MemoryStore::with_value(STORAGE_KEY, "garbage");
        let notifier = RecordingNotifier::new();
        let store = MetadataStore::new(&storage, &notifier);

        store.update_file_tags("a.gif", "x").unwrap();

        assert_eq!(store.load().len(), 1);
        assert_eq!(notifier.failures(), 1);
    }

    #[test]
    fn test_save_failure_notifies_and_propagates() {
        let storage = MemoryStore::new();
        storage.set_fail_writes(true);
        let notifier = RecordingNotifier::new();
        let store = MetadataStore::new(&storage, &notifier);

        let result = store.update_file_tags("cat.gif", "cat");

        assert!(matches!(result, Err(DbError::WriteRejected(_))));
        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Failed to save tags");
        assert_eq!(notices[0].message, "Could not persist tag changes");
        assert!(storage.raw(STORAGE_KEY).is_none());
    }

    #[test]
    fn test_cleanup_removes_stale_and_persists() {
        let storage = MemoryStore::new();
        let notifier = RecordingNotifier::new();
        let store = MetadataStore::new(&storage, &notifier);

        let mut metadata = GifMetadata::new();
        metadata.insert("a.gif".into(), record(&["x"]));
        metadata.insert("b.gif".into(), record(&["y"]));
        store.save(&metadata).unwrap();

        let cleaned = store.cleanup_metadata(&names(&["a.gif"])).unwrap();

        let mut expected = GifMetadata::new();
        expected.insert("a.gif".into(), record(&["x"]));
        assert_eq!(cleaned, expected);
        assert_eq!(store.load(), expected);
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn test_cleanup_without_stale_entries_does_not_write() {
        let storage = MemoryStore::new();
        let notifier = RecordingNotifier::new();
        let store = MetadataStore::new(&storage, &notifier);

        store.update_file_tags("a.gif", "x").unwrap();
        let writes = storage.write_count();

        let cleaned = store.cleanup_metadata(&names(&["a.gif", "new.gif"])).unwrap();

        assert_eq!(cleaned.len(), 1);
        assert_eq!(storage.write_count(), writes);
    }

    #[test]
    fn test_cleanup_result_is_key_intersection() {
        let storage = MemoryStore::new();
        let notifier = RecordingNotifier::new();
        let store = MetadataStore::new(&storage, &notifier);

        for name in ["a.gif", "b.gif", "c.gif", "d.gif"] {
            store.update_file_tags(name, "t").unwrap();
        }
        let existing = names(&["b.gif", "d.gif", "e.gif"]);

        let cleaned = store.cleanup_metadata(&existing).unwrap();

        let keys: Vec<&str> = cleaned.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b.gif", "d.gif"]);
        assert_eq!(store.load(), cleaned);
    }

    #[test]
    fn test_cleanup_write_failure_propagates() {
        let storage = MemoryStore::new();
        let notifier = RecordingNotifier::new();
        let store = MetadataStore::new(&storage, &notifier);

        store.update_file_tags("gone.gif", "x").unwrap();
        storage.set_fail_writes(true);

        assert!(store.cleanup_metadata(&names(&[])).is_err());
        assert_eq!(notifier.failures(), 1);
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_prune_counts_removed() {
        let mut metadata = GifMetadata::new();
        metadata.insert("a.gif".into(), record(&["x"]));
        metadata.insert("b.gif".into(), record(&["y"]));

        let (kept, removed) = prune(metadata, &names(&["b.gif"]));

        assert_eq!(removed, 1);
        assert!(kept.contains_key("b.gif"));
        assert!(!kept.contains_key("a.gif"));
    }
}
