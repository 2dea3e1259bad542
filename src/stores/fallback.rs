//! Fallback bookmark cache persisted as a local JSON file.
//!
//! The cache mirrors the primary store's last known-good contents and takes
//! degraded writes while the primary store is unreachable. It has no network
//! or database dependency: a missing file is an empty cache, and writes land
//! in a sibling temp file that is renamed over the real one.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::stores::normalize;
use crate::stores::BookmarkStore;
use crate::types::errors::StoreError;
use crate::types::player::{BookmarkRecord, BookmarkSet};

/// Fallback cache stored as a JSON array of canonical records.
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    path: PathBuf,
}

impl JsonFileCache {
    /// Creates a cache at `path`. Nothing is touched on disk until the first write.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BookmarkSet, StoreError> {
        if !self.path.exists() {
            return Ok(BookmarkSet::new());
        }
        let text = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Io(format!("Failed to read cache file: {}", e)))?;
        normalize::parse_set(&text)
    }

    /// Reads the current contents for a read-modify-write.
    ///
    /// A cache file that no longer parses is replaced rather than blocking writes.
    fn read_for_update(&self) -> Result<BookmarkSet, StoreError> {
        match self.read() {
            Err(StoreError::Serialization(msg)) => {
                warn!(path = %self.path.display(), error = %msg, "discarding unreadable fallback cache");
                Ok(BookmarkSet::new())
            }
            other => other,
        }
    }

    fn write(&self, set: &BookmarkSet) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Io(format!("Failed to create cache directory: {}", e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(set)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)
            .map_err(|e| StoreError::Io(format!("Failed to write cache file: {}", e)))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| StoreError::Io(format!("Failed to replace cache file: {}", e)))?;
        Ok(())
    }
}

impl BookmarkStore for JsonFileCache {
    fn name(&self) -> &'static str {
        "json-cache"
    }

    fn get_all(&self) -> Result<BookmarkSet, StoreError> {
        self.read()
    }

    fn put(&mut self, record: &BookmarkRecord) -> Result<(), StoreError> {
        let mut set = self.read_for_update()?;
        set.upsert(record.clone());
        self.write(&set)
    }

    fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut set = self.read_for_update()?;
        let removed = set.remove(id);
        if removed {
            self.write(&set)?;
        }
        Ok(removed)
    }

    fn replace_all(&mut self, set: &BookmarkSet) -> Result<(), StoreError> {
        self.write(set)
    }
}
