// Matchbook platform abstraction
// Resolves where settings, the primary database and the fallback cache live on each OS.
//
// Each OS module reports its base directories; this module appends the
// application folder and applies the `MATCHBOOK_DATA_DIR` override.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
use linux as os;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
use macos as os;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
use windows as os;

/// Environment variable that relocates the data directory (primary database).
pub const DATA_DIR_ENV: &str = "MATCHBOOK_DATA_DIR";

/// Per-user base directories before the application folder is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirs {
    pub config: PathBuf,
    pub data: PathBuf,
    pub cache: PathBuf,
}

/// Returns the configuration directory, e.g. `~/.config/matchbook` on Linux.
pub fn get_config_dir() -> PathBuf {
    os::base_dirs().config.join(os::APP_DIR_NAME)
}

/// Returns the data directory holding the primary database.
///
/// `MATCHBOOK_DATA_DIR` wins when set and non-empty.
pub fn get_data_dir() -> PathBuf {
    match env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => os::base_dirs().data.join(os::APP_DIR_NAME),
    }
}

/// Returns the cache directory holding the fallback cache file.
pub fn get_cache_dir() -> PathBuf {
    os::base_dirs().cache.join(os::APP_DIR_NAME)
}
