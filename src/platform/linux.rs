// Linux base directories, following the XDG base directory spec.

use std::env;
use std::path::PathBuf;

use super::BaseDirs;

pub const APP_DIR_NAME: &str = "matchbook";

fn xdg_or_home(var: &str, home_relative: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            home_relative
                .iter()
                .fold(PathBuf::from(home), |path, part| path.join(part))
        }
    }
}

pub fn base_dirs() -> BaseDirs {
    BaseDirs {
        config: xdg_or_home("XDG_CONFIG_HOME", &[".config"]),
        data: xdg_or_home("XDG_DATA_HOME", &[".local", "share"]),
        cache: xdg_or_home("XDG_CACHE_HOME", &[".cache"]),
    }
}
