// Matchbook backing stores
// The bookmark manager talks to its primary store and fallback cache only through `BookmarkStore`.

pub mod fallback;
pub mod memory;
pub mod normalize;
pub mod primary;

pub use fallback::JsonFileCache;
pub use memory::MemoryStore;
pub use primary::{PrimaryBackend, SqlitePrimaryStore};

use crate::types::errors::StoreError;
use crate::types::player::{BookmarkRecord, BookmarkSet};

/// Operations every bookmark backing store provides.
///
/// Implementations are driven by a single owner at a time (the bookmark
/// manager holds them behind one lock), so mutation takes `&mut self`.
pub trait BookmarkStore: Send {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Reads every record in insertion order.
    fn get_all(&self) -> Result<BookmarkSet, StoreError>;

    /// Inserts the record, or updates the existing record with the same id.
    ///
    /// On update the nickname is replaced, `last_used` becomes the larger of
    /// the two values and `save_time` and position are kept.
    fn put(&mut self, record: &BookmarkRecord) -> Result<(), StoreError>;

    /// Deletes by id. Returns whether a record was removed.
    fn delete(&mut self, id: &str) -> Result<bool, StoreError>;

    /// Overwrites the whole store with `set`.
    fn replace_all(&mut self, set: &BookmarkSet) -> Result<(), StoreError>;
}

/// Result of reading a whole store, with failures folded into a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    Ok(BookmarkSet),
    Unavailable(String),
}

impl From<Result<BookmarkSet, StoreError>> for StoreOutcome {
    fn from(result: Result<BookmarkSet, StoreError>) -> Self {
        match result {
            Ok(set) => StoreOutcome::Ok(set),
            Err(e) => StoreOutcome::Unavailable(e.to_string()),
        }
    }
}
