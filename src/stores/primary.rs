//! Primary bookmark store backed by SQLite via `rusqlite`.

use rusqlite::params;
use std::path::Path;
use std::time::Duration;

use tracing::warn;

use crate::database::Database;
use crate::stores::BookmarkStore;
use crate::types::errors::StoreError;
use crate::types::player::{BookmarkRecord, BookmarkSet};

/// Durable source of truth for saved players.
///
/// Rows are listed in insertion order (`seq`); an upsert keeps the row's
/// original `seq` and `save_time`.
pub struct SqlitePrimaryStore {
    db: Database,
}

impl SqlitePrimaryStore {
    /// Opens (or creates) the database file, bounding lock waits by `busy_timeout`.
    pub fn open<P: AsRef<Path>>(path: P, busy_timeout: Duration) -> Result<Self, StoreError> {
        let db = Database::open_with_timeout(path, busy_timeout)?;
        Ok(Self { db })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let db = Database::open_in_memory()?;
        Ok(Self { db })
    }

    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<BookmarkRecord> {
        Ok(BookmarkRecord {
            id: row.get(0)?,
            nickname: row.get(1)?,
            save_time: row.get(2)?,
            last_used: row.get(3)?,
        })
    }
}

impl BookmarkStore for SqlitePrimaryStore {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn get_all(&self) -> Result<BookmarkSet, StoreError> {
        let mut stmt = self.db.connection().prepare(
            "SELECT id, nickname, save_time, last_used FROM saved_players ORDER BY seq",
        )?;
        let rows = stmt.query_map([], Self::row_to_record)?;

        let mut set = BookmarkSet::new();
        for row in rows {
            set.overwrite(row?);
        }
        Ok(set)
    }

    fn put(&mut self, record: &BookmarkRecord) -> Result<(), StoreError> {
        self.db.connection().execute(
            "INSERT INTO saved_players (id, nickname, save_time, last_used) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                 nickname = excluded.nickname,
                 last_used = MAX(saved_players.last_used, excluded.last_used)",
            params![record.id, record.nickname, record.save_time, record.last_used],
        )?;
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let affected = self
            .db
            .connection()
            .execute("DELETE FROM saved_players WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    fn replace_all(&mut self, set: &BookmarkSet) -> Result<(), StoreError> {
        let tx = self.db.connection().unchecked_transaction()?;
        tx.execute("DELETE FROM saved_players", [])?;
        for record in set {
            tx.execute(
                "INSERT INTO saved_players (id, nickname, save_time, last_used) VALUES (?1, ?2, ?3, ?4)",
                params![record.id, record.nickname, record.save_time, record.last_used],
            )?;
        }
        tx.commit()?;
        Ok(())
    }
}

/// Primary store as opened at startup.
///
/// When the database cannot be opened the process still runs: every call
/// reports the open failure and the manager serves from the fallback cache.
pub enum PrimaryBackend {
    Sqlite(SqlitePrimaryStore),
    Offline(String),
}

impl PrimaryBackend {
    /// Opens the SQLite store, turning an open failure into `Offline`.
    pub fn open_or_offline<P: AsRef<Path>>(path: P, busy_timeout: Duration) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    warn!(path = %path.display(), error = %e, "cannot create primary store directory");
                }
            }
        }
        match SqlitePrimaryStore::open(path, busy_timeout) {
            Ok(store) => PrimaryBackend::Sqlite(store),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "primary store offline");
                PrimaryBackend::Offline(e.to_string())
            }
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, PrimaryBackend::Sqlite(_))
    }

    fn offline(reason: &str) -> StoreError {
        StoreError::Database(format!("primary store offline: {}", reason))
    }
}

impl BookmarkStore for PrimaryBackend {
    fn name(&self) -> &'static str {
        match self {
            PrimaryBackend::Sqlite(store) => store.name(),
            PrimaryBackend::Offline(_) => "offline",
        }
    }

    fn get_all(&self) -> Result<BookmarkSet, StoreError> {
        match self {
            PrimaryBackend::Sqlite(store) => store.get_all(),
            PrimaryBackend::Offline(reason) => Err(Self::offline(reason)),
        }
    }

    fn put(&mut self, record: &BookmarkRecord) -> Result<(), StoreError> {
        match self {
            PrimaryBackend::Sqlite(store) => store.put(record),
            PrimaryBackend::Offline(reason) => Err(Self::offline(reason)),
        }
    }

    fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        match self {
            PrimaryBackend::Sqlite(store) => store.delete(id),
            PrimaryBackend::Offline(reason) => Err(Self::offline(reason)),
        }
    }

    fn replace_all(&mut self, set: &BookmarkSet) -> Result<(), StoreError> {
        match self {
            PrimaryBackend::Sqlite(store) => store.replace_all(set),
            PrimaryBackend::Offline(reason) => Err(Self::offline(reason)),
        }
    }
}
