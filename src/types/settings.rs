use serde::{Deserialize, Serialize};

/// Top-level application settings, persisted as `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    pub stats: StatsSettings,
    pub storage: StorageSettings,
    pub general: GeneralSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            stats: StatsSettings::default(),
            storage: StorageSettings::default(),
            general: GeneralSettings::default(),
        }
    }
}

/// Remote statistics API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsSettings {
    pub api_key: String,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: "https://api.t1qq.com/api/tool/wzrr/morebattle".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Locations and limits for the two bookmark stores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    /// SQLite file for the primary store. `None` means `<data dir>/matchbook.db`.
    pub primary_db_path: Option<String>,
    /// JSON file for the fallback cache. `None` means `<cache dir>/saved_players.json`.
    pub fallback_cache_path: Option<String>,
    pub primary_busy_timeout_ms: u64,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            primary_db_path: None,
            fallback_cache_path: None,
            primary_busy_timeout_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    pub default_category: String,
    pub hero_list_path: Option<String>,
    pub log_filter: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            default_category: "1".to_string(),
            hero_list_path: None,
            log_filter: "info".to_string(),
        }
    }
}
