//! Unit tests for the Matchbook error types' Display output.

use matchbook::types::errors::{
    BookmarkError, HeroCatalogError, SettingsError, StatsError, StoreError,
};

#[test]
fn test_bookmark_error_display() {
    assert_eq!(
        BookmarkError::Validation("id must not be empty".into()).to_string(),
        "Invalid bookmark: id must not be empty"
    );
    assert_eq!(
        BookmarkError::PrimaryUnavailable("locked".into()).to_string(),
        "Primary store unavailable: locked"
    );
    assert_eq!(
        BookmarkError::FallbackUnavailable("disk full".into()).to_string(),
        "Fallback cache unavailable: disk full"
    );
    assert_eq!(
        BookmarkError::NotFound("P9".into()).to_string(),
        "Saved player not found: P9"
    );
}

#[test]
fn test_store_error_display() {
    assert_eq!(
        StoreError::Database("no such table".into()).to_string(),
        "Store database error: no such table"
    );
    assert_eq!(StoreError::Io("denied".into()).to_string(), "Store I/O error: denied");
    assert_eq!(
        StoreError::Serialization("eof".into()).to_string(),
        "Store serialization error: eof"
    );
}

#[test]
fn test_store_error_from_rusqlite() {
    let err: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, StoreError::Database(_)));
}

#[test]
fn test_settings_error_display() {
    assert_eq!(SettingsError::IoError("x".into()).to_string(), "Settings I/O error: x");
    assert_eq!(
        SettingsError::SerializationError("x".into()).to_string(),
        "Settings serialization error: x"
    );
    assert_eq!(
        SettingsError::InvalidKey("a.b".into()).to_string(),
        "Invalid settings key: a.b"
    );
    assert_eq!(
        SettingsError::InvalidValue("x".into()).to_string(),
        "Invalid settings value: x"
    );
}

#[test]
fn test_stats_error_display() {
    assert_eq!(StatsError::MissingApiKey.to_string(), "No statistics API key configured");
    assert_eq!(
        StatsError::Network("timeout".into()).to_string(),
        "Statistics network error: timeout"
    );
    assert_eq!(StatsError::Api("403".into()).to_string(), "Statistics API error: 403");
    assert_eq!(StatsError::Parse("eof".into()).to_string(), "Statistics parse error: eof");
}

#[test]
fn test_hero_catalog_error_display() {
    assert_eq!(
        HeroCatalogError::FileNotFound("heroes.json".into()).to_string(),
        "Hero list not found: heroes.json"
    );
    assert_eq!(
        HeroCatalogError::Parse("bad".into()).to_string(),
        "Hero list parse error: bad"
    );
}

#[test]
fn test_errors_are_std_errors() {
    let boxed: Box<dyn std::error::Error> = Box::new(BookmarkError::Validation("x".into()));
    assert!(boxed.to_string().starts_with("Invalid bookmark"));
}
