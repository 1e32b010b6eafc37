//! Integration tests for gifr
//!
//! These tests run the tag lifecycle end to end against a real sled database
//! and a temporary GIF folder.

use gifr::commands::{self, Context};
use gifr::db::{Database, KeyValueStore};
use gifr::gallery::{Gallery, list_images};
use gifr::metadata::{GifMetadata, MetadataStore, STORAGE_KEY, TagRecord, sanitize};
use gifr::output::{NoticeStyle, RecordingNotifier};
use gifr::usage::FrecencyTracker;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a temporary folder of GIFs
fn setup_folder(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in names {
        fs::write(dir.path().join(name), b"GIF89a").unwrap();
    }
    dir
}

/// Helper function to open a database in its own temporary directory
fn setup_db() -> (Database, TempDir) {
    let dir = TempDir::new().unwrap();
    let db = Database::open(dir.path().join("db")).unwrap();
    (db, dir)
}

fn record(tags: &[&str]) -> TagRecord {
    TagRecord::new(tags.iter().map(|t| (*t).to_string()).collect())
}

fn context<'a>(folder: &Path, db: &'a Database, notifier: &'a RecordingNotifier) -> Context<'a> {
    Context {
        folder: Some(folder.to_path_buf()),
        extensions: vec!["gif".into()],
        storage: db,
        notifier,
        quiet: true,
    }
}

#[test]
fn test_update_then_load_scenario() {
    let (db, _dir) = setup_db();
    let notifier = RecordingNotifier::new();
    let store = MetadataStore::new(&db, &notifier);

    store.update_file_tags("cat.gif", "Cat, Funny").unwrap();

    let mut expected = GifMetadata::new();
    expected.insert("cat.gif".into(), record(&["cat", "funny"]));
    assert_eq!(store.load(), expected);
    assert!(notifier.notices().is_empty());
}

#[test]
fn test_tags_survive_reopening_database() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db");
    let notifier = RecordingNotifier::new();

    {
        let db = Database::open(&path).unwrap();
        MetadataStore::new(&db, &notifier)
            .update_file_tags("dance.gif", "party, Dance")
            .unwrap();
    }

    let db = Database::open(&path).unwrap();
    let metadata = MetadataStore::new(&db, &notifier).load();
    assert_eq!(metadata["dance.gif"], record(&["party", "dance"]));
}

#[test]
fn test_cleanup_scenario_persists_pruned_mapping() {
    let (db, _dir) = setup_db();
    let notifier = RecordingNotifier::new();
    let store = MetadataStore::new(&db, &notifier);

    let mut metadata = GifMetadata::new();
    metadata.insert("a.gif".into(), record(&["x"]));
    metadata.insert("b.gif".into(), record(&["y"]));
    store.save(&metadata).unwrap();

    let folder = setup_folder(&["a.gif"]);
    let files = list_images(folder.path(), &["gif".to_string()]).unwrap();
    let existing: HashSet<String> = files.into_iter().collect();
    let cleaned = store.cleanup_metadata(&existing).unwrap();

    let mut expected = GifMetadata::new();
    expected.insert("a.gif".into(), record(&["x"]));
    assert_eq!(cleaned, expected);
    assert_eq!(store.load(), expected);
}

#[test]
fn test_corrupted_database_value_recovers() {
    let (db, _dir) = setup_db();
    db.set(STORAGE_KEY, b"definitely { not json").unwrap();
    let notifier = RecordingNotifier::new();
    let store = MetadataStore::new(&db, &notifier);

    assert!(store.load().is_empty());
    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].style, NoticeStyle::Failure);

    store.update_file_tags("a.gif", "fresh").unwrap();
    assert_eq!(store.load()["a.gif"], record(&["fresh"]));
}

#[test]
fn test_gallery_ranks_and_filters() {
    let folder = setup_folder(&["a.gif", "b.GIF", "c.gif", "readme.md"]);
    let (db, _dir) = setup_db();
    let notifier = RecordingNotifier::new();
    let store = MetadataStore::new(&db, &notifier);
    store.update_file_tags("a.gif", "cat").unwrap();
    store.update_file_tags("c.gif", "cat, sleepy").unwrap();

    let tracker = FrecencyTracker::new(&db);
    tracker.visit("c.gif").unwrap();

    let files = list_images(folder.path(), &["gif".to_string()]).unwrap();
    let mut gallery = Gallery::new(folder.path(), &files, &store.load(), &tracker);

    let order: Vec<&str> = gallery.visible().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(order, vec!["c.gif", "a.gif", "b.GIF"]);
    assert_eq!(gallery.tag_universe(), ["cat".to_string(), "sleepy".to_string()]);

    gallery.select_tag("cat");
    let cats: Vec<&str> = gallery.visible().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(cats, vec!["c.gif", "a.gif"]);

    gallery.clear_tag();
    assert_eq!(gallery.visible().len(), 3);
}

#[test]
fn test_tag_command_then_cleanup_after_delete() {
    let folder = setup_folder(&["keep.gif", "drop.gif"]);
    let (db, _dir) = setup_db();
    let notifier = RecordingNotifier::new();
    let ctx = context(folder.path(), &db, &notifier);

    commands::tag(&ctx, Path::new("keep.gif"), &["Keep".into()]).unwrap();
    commands::tag(&ctx, Path::new("drop.gif"), &["Drop".into()]).unwrap();
    assert_eq!(ctx.store().load().len(), 2);

    fs::remove_file(folder.path().join("drop.gif")).unwrap();
    assert_eq!(commands::cleanup(&ctx).unwrap(), 1);

    let keys: Vec<String> = ctx.store().load().into_keys().collect();
    assert_eq!(keys, vec!["keep.gif"]);
}

#[test]
fn test_sanitize_round_trips_through_store() {
    let (db, _dir) = setup_db();
    let notifier = RecordingNotifier::new();
    let store = MetadataStore::new(&db, &notifier);
    let input = " Reaction,REACTION , wow ,,";

    let saved = store.update_file_tags("r.gif", input).unwrap();

    assert_eq!(saved, sanitize(input));
    assert_eq!(sanitize(&saved.join(",")), saved);
    assert_eq!(store.load()["r.gif"].tags, saved);
}
