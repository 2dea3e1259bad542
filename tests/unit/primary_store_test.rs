//! Unit tests for the SQLite primary store and its offline wrapper.

use std::time::Duration;

use matchbook::stores::{BookmarkStore, PrimaryBackend, SqlitePrimaryStore};
use matchbook::types::errors::StoreError;
use matchbook::types::player::{BookmarkRecord, BookmarkSet};
use tempfile::TempDir;

fn setup() -> SqlitePrimaryStore {
    SqlitePrimaryStore::open_in_memory().expect("Failed to open in-memory store")
}

fn record(id: &str, nickname: &str, t: i64) -> BookmarkRecord {
    BookmarkRecord::new(id, nickname, t)
}

#[test]
fn test_empty_store() {
    assert!(setup().get_all().unwrap().is_empty());
}

#[test]
fn test_get_all_in_insertion_order() {
    let mut store = setup();
    store.put(&record("P2", "Bob", 20)).unwrap();
    store.put(&record("P1", "Alice", 10)).unwrap();
    store.put(&record("P3", "Cy", 30)).unwrap();

    assert_eq!(store.get_all().unwrap().ids(), vec!["P2", "P1", "P3"]);
}

#[test]
fn test_upsert_keeps_save_time_and_position() {
    let mut store = setup();
    store.put(&record("P1", "Alice", 10)).unwrap();
    store.put(&record("P2", "Bob", 20)).unwrap();
    store.put(&record("P1", "Alice2", 30)).unwrap();

    let set = store.get_all().unwrap();
    assert_eq!(set.ids(), vec!["P1", "P2"]);
    let p1 = set.get("P1").unwrap();
    assert_eq!(p1.nickname, "Alice2");
    assert_eq!(p1.save_time, 10);
    assert_eq!(p1.last_used, 30);
}

#[test]
fn test_upsert_never_moves_last_used_backwards() {
    let mut store = setup();
    store.put(&record("P1", "Alice", 50)).unwrap();
    store.put(&record("P1", "Alice", 40)).unwrap();

    assert_eq!(store.get_all().unwrap().get("P1").unwrap().last_used, 50);
}

#[test]
fn test_delete() {
    let mut store = setup();
    store.put(&record("P1", "Alice", 10)).unwrap();
    store.put(&record("P2", "Bob", 20)).unwrap();

    assert!(store.delete("P1").unwrap());
    assert!(!store.delete("P1").unwrap());
    assert_eq!(store.get_all().unwrap().ids(), vec!["P2"]);
}

#[test]
fn test_replace_all() {
    let mut store = setup();
    store.put(&record("P1", "Alice", 10)).unwrap();

    let set: BookmarkSet = vec![record("P3", "Cy", 3), record("P2", "Bob", 2)].into_iter().collect();
    store.replace_all(&set).unwrap();

    assert_eq!(store.get_all().unwrap(), set);
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("matchbook.db");
    let timeout = Duration::from_millis(200);

    {
        let mut store = SqlitePrimaryStore::open(&path, timeout).unwrap();
        store.put(&record("P1", "Alice", 10)).unwrap();
    }

    let store = SqlitePrimaryStore::open(&path, timeout).unwrap();
    assert_eq!(store.get_all().unwrap().ids(), vec!["P1"]);
}

#[test]
fn test_backend_opens_and_creates_parent_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("matchbook.db");

    let mut backend = PrimaryBackend::open_or_offline(&path, Duration::from_millis(200));
    assert!(backend.is_online());
    backend.put(&record("P1", "Alice", 10)).unwrap();
    assert_eq!(backend.get_all().unwrap().ids(), vec!["P1"]);
    assert!(path.exists());
}

#[test]
fn test_backend_offline_when_path_unusable() {
    let dir = TempDir::new().unwrap();
    // A directory cannot be opened as a database file.
    let mut backend = PrimaryBackend::open_or_offline(dir.path(), Duration::from_millis(200));

    assert!(!backend.is_online());
    assert_eq!(backend.name(), "offline");
    assert!(matches!(backend.get_all(), Err(StoreError::Database(_))));
    assert!(backend.put(&record("P1", "Alice", 10)).is_err());
    assert!(backend.delete("P1").is_err());
    assert!(backend.replace_all(&BookmarkSet::new()).is_err());
}
