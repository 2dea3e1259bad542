//! Process-local bookmark store.

use crate::stores::BookmarkStore;
use crate::types::errors::StoreError;
use crate::types::player::{BookmarkRecord, BookmarkSet};

/// Keeps bookmarks in memory only. Never fails; contents die with the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    set: BookmarkSet,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<BookmarkRecord>) -> Self {
        Self {
            set: records.into_iter().collect(),
        }
    }
}

impl BookmarkStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn get_all(&self) -> Result<BookmarkSet, StoreError> {
        Ok(self.set.clone())
    }

    fn put(&mut self, record: &BookmarkRecord) -> Result<(), StoreError> {
        self.set.upsert(record.clone());
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        Ok(self.set.remove(id))
    }

    fn replace_all(&mut self, set: &BookmarkSet) -> Result<(), StoreError> {
        self.set = set.clone();
        Ok(())
    }
}
