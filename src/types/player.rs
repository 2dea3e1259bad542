use serde::{Deserialize, Serialize};

/// One bookmarked player.
///
/// Serialized with the canonical field names `id`, `nickname`, `saveTime`
/// and `lastUsed`; both stores persist this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRecord {
    pub id: String,
    pub nickname: String,
    pub save_time: i64,
    pub last_used: i64,
}

impl BookmarkRecord {
    /// Creates a record whose `save_time` and `last_used` are both `now`.
    pub fn new(id: &str, nickname: &str, now: i64) -> Self {
        Self {
            id: id.to_string(),
            nickname: nickname.to_string(),
            save_time: now,
            last_used: now,
        }
    }

    /// Folds a newer write for the same id into this record.
    ///
    /// `nickname` is replaced, `last_used` never moves backwards and
    /// `save_time` is kept.
    pub fn apply_update(&mut self, newer: &BookmarkRecord) {
        self.nickname = newer.nickname.clone();
        self.last_used = self.last_used.max(newer.last_used);
    }
}

/// Ordered, id-unique collection of bookmark records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkSet {
    records: Vec<BookmarkRecord>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookmarkRecord> {
        self.records.iter()
    }

    pub fn get(&self, id: &str) -> Option<&BookmarkRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Inserts a record, or updates the existing one with the same id in place.
    pub fn upsert(&mut self, record: BookmarkRecord) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => existing.apply_update(&record),
            None => self.records.push(record),
        }
    }

    /// Replaces every field of an existing record, or appends.
    ///
    /// Used when collapsing duplicates read back from a store: the later
    /// occurrence wins outright but keeps the first occurrence's position.
    pub fn overwrite(&mut self, record: BookmarkRecord) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Removes the record with the given id. Returns whether one was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn into_vec(self) -> Vec<BookmarkRecord> {
        self.records
    }
}

impl FromIterator<BookmarkRecord> for BookmarkSet {
    /// Builds a set, collapsing duplicate ids (later fields, first position).
    fn from_iter<I: IntoIterator<Item = BookmarkRecord>>(iter: I) -> Self {
        let mut set = BookmarkSet::new();
        for record in iter {
            set.overwrite(record);
        }
        set
    }
}

impl IntoIterator for BookmarkSet {
    type Item = BookmarkRecord;
    type IntoIter = std::vec::IntoIter<BookmarkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a BookmarkSet {
    type Item = &'a BookmarkRecord;
    type IntoIter = std::slice::Iter<'a, BookmarkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
