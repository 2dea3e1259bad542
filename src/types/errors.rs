use std::fmt;

// === BookmarkError ===

/// Errors surfaced by the bookmark manager.
///
/// Only `Validation` ever reaches a caller of `save`; the other variants
/// describe degraded paths and show up in logs and in `Display` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkError {
    /// The id or nickname was blank.
    Validation(String),
    /// The primary store could not serve the request.
    PrimaryUnavailable(String),
    /// The fallback cache could not serve the request.
    FallbackUnavailable(String),
    /// No saved player with the given id.
    NotFound(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::Validation(msg) => write!(f, "Invalid bookmark: {}", msg),
            BookmarkError::PrimaryUnavailable(msg) => {
                write!(f, "Primary store unavailable: {}", msg)
            }
            BookmarkError::FallbackUnavailable(msg) => {
                write!(f, "Fallback cache unavailable: {}", msg)
            }
            BookmarkError::NotFound(id) => write!(f, "Saved player not found: {}", id),
        }
    }
}

impl std::error::Error for BookmarkError {}

// === StoreError ===

/// Errors raised by a backing store adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// SQLite operation failed.
    Database(String),
    /// A file system operation failed.
    Io(String),
    /// Stored data could not be encoded or decoded.
    Serialization(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database(msg) => write!(f, "Store database error: {}", msg),
            StoreError::Io(msg) => write!(f, "Store I/O error: {}", msg),
            StoreError::Serialization(msg) => {
                write!(f, "Store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === StatsError ===

/// Errors related to the remote statistics API.
#[derive(Debug)]
pub enum StatsError {
    /// No API key was supplied or configured.
    MissingApiKey,
    /// A network error occurred while contacting the API.
    Network(String),
    /// The API answered with a non-success code.
    Api(String),
    /// The API response could not be parsed.
    Parse(String),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::MissingApiKey => write!(f, "No statistics API key configured"),
            StatsError::Network(msg) => write!(f, "Statistics network error: {}", msg),
            StatsError::Api(msg) => write!(f, "Statistics API error: {}", msg),
            StatsError::Parse(msg) => write!(f, "Statistics parse error: {}", msg),
        }
    }
}

impl std::error::Error for StatsError {}

// === HeroCatalogError ===

/// Errors related to loading the hero catalog.
#[derive(Debug)]
pub enum HeroCatalogError {
    /// The hero list file could not be read.
    FileNotFound(String),
    /// The hero list file is malformed.
    Parse(String),
}

impl fmt::Display for HeroCatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeroCatalogError::FileNotFound(path) => write!(f, "Hero list not found: {}", path),
            HeroCatalogError::Parse(msg) => write!(f, "Hero list parse error: {}", msg),
        }
    }
}

impl std::error::Error for HeroCatalogError {}
