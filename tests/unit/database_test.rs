//! Unit tests for the Matchbook database layer (connection + migrations).

use matchbook::database::migrations::{self, CURRENT_SCHEMA_VERSION};
use matchbook::database::Database;
use tempfile::TempDir;

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_saved_players_table() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let exists: bool = db
        .connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='saved_players'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);
    assert!(exists, "saved_players should exist after migrations");
}

#[test]
fn test_migrations_create_last_used_index() {
    let db = Database::open_in_memory().unwrap();
    let exists: bool = db
        .connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='index' AND name='idx_saved_players_last_used'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(exists);
}

#[test]
fn test_schema_version_is_current() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(migrations::get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_migrations_are_idempotent() {
    let db = Database::open_in_memory().unwrap();
    migrations::run_all(db.connection()).expect("second run should succeed");
    assert_eq!(migrations::get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_duplicate_id_is_rejected_by_schema() {
    let db = Database::open_in_memory().unwrap();
    let conn = db.connection();
    conn.execute(
        "INSERT INTO saved_players (id, nickname, save_time, last_used) VALUES ('P1', 'a', 1, 1)",
        [],
    )
    .unwrap();
    let second = conn.execute(
        "INSERT INTO saved_players (id, nickname, save_time, last_used) VALUES ('P1', 'b', 2, 2)",
        [],
    );
    assert!(second.is_err());
}

#[test]
fn test_file_database_persists_across_opens() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("matchbook.db");

    {
        let db = Database::open(&path).unwrap();
        db.connection()
            .execute(
                "INSERT INTO saved_players (id, nickname, save_time, last_used) VALUES ('P1', 'a', 1, 1)",
                [],
            )
            .unwrap();
    }

    let db = Database::open(&path).unwrap();
    let count: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM saved_players", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(migrations::get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}
