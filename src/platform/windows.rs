// Windows base directories under %APPDATA% and %LOCALAPPDATA%.

use std::env;
use std::path::PathBuf;

use super::BaseDirs;

pub const APP_DIR_NAME: &str = "Matchbook";

pub fn base_dirs() -> BaseDirs {
    let roaming = PathBuf::from(
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming")),
    );
    let local = PathBuf::from(
        env::var("LOCALAPPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local")),
    );
    BaseDirs {
        config: roaming.clone(),
        data: roaming,
        cache: local,
    }
}
