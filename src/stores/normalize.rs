//! Normalization of loosely-typed stored records into [`BookmarkRecord`].
//!
//! Stores written by older builds used Go-style (`ID`, `SaveTime`) or
//! snake-case (`save_time`) field names. Every adapter reads through this
//! module so the manager only ever sees canonical records.

use serde_json::{Map, Value};
use tracing::warn;

use crate::types::errors::StoreError;
use crate::types::player::{BookmarkRecord, BookmarkSet};

// Canonical name first; earlier entries win when several are present.
const ID_KEYS: &[&str] = &["id", "ID", "Id"];
const NICKNAME_KEYS: &[&str] = &["nickname", "Nickname"];
const SAVE_TIME_KEYS: &[&str] = &["saveTime", "SaveTime", "save_time"];
const LAST_USED_KEYS: &[&str] = &["lastUsed", "LastUsed", "last_used"];

fn lookup<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| obj.get(*key).filter(|v| !v.is_null()))
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn as_timestamp(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Normalizes one stored record.
///
/// `fallback_id` is used when the object itself carries no id (records
/// stored as an id-keyed map). Returns `None` when no usable id exists.
pub fn normalize_record(value: &Value, fallback_id: Option<&str>) -> Option<BookmarkRecord> {
    let obj = value.as_object()?;

    let id = lookup(obj, ID_KEYS)
        .and_then(as_text)
        .filter(|id| !id.is_empty())
        .or_else(|| fallback_id.map(|id| id.trim().to_string()).filter(|id| !id.is_empty()))?;

    let nickname = lookup(obj, NICKNAME_KEYS)
        .and_then(as_text)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| id.clone());

    let save_time = lookup(obj, SAVE_TIME_KEYS).and_then(as_timestamp).unwrap_or(0);
    let last_used = lookup(obj, LAST_USED_KEYS)
        .and_then(as_timestamp)
        .unwrap_or(save_time);

    Some(BookmarkRecord {
        id,
        nickname,
        save_time,
        last_used,
    })
}

/// Normalizes a stored collection: an array of records or an id-keyed map.
///
/// Unusable entries are skipped and duplicate ids collapse to one record.
pub fn normalize_set(value: &Value) -> BookmarkSet {
    let mut dropped = 0usize;
    let set = match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                let record = normalize_record(item, None);
                if record.is_none() {
                    dropped += 1;
                }
                record
            })
            .collect(),
        Value::Object(map) => map
            .iter()
            .filter_map(|(key, item)| {
                let record = normalize_record(item, Some(key));
                if record.is_none() {
                    dropped += 1;
                }
                record
            })
            .collect(),
        Value::Null => BookmarkSet::new(),
        other => {
            warn!(kind = %json_kind(other), "stored bookmarks are neither an array nor a map");
            BookmarkSet::new()
        }
    };

    if dropped > 0 {
        warn!(dropped, "skipped stored bookmarks without a usable id");
    }
    set
}

/// Parses stored JSON text. Blank text is an empty set.
pub fn parse_set(text: &str) -> Result<BookmarkSet, StoreError> {
    if text.trim().is_empty() {
        return Ok(BookmarkSet::new());
    }
    let value: Value =
        serde_json::from_str(text).map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(normalize_set(&value))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
