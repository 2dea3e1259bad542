// macOS base directories under ~/Library.

use std::env;
use std::path::PathBuf;

use super::BaseDirs;

pub const APP_DIR_NAME: &str = "Matchbook";

pub fn base_dirs() -> BaseDirs {
    let library = PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
        .join("Library");
    let support = library.join("Application Support");
    BaseDirs {
        config: support.clone(),
        data: support,
        cache: library.join("Caches"),
    }
}
