//! App Core for Matchbook.
//!
//! Central struct wiring settings, the bookmark stores and the statistics
//! services together.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::managers::bookmark_manager::BookmarkManager;
use crate::platform;
use crate::services::hero_catalog::HeroCatalog;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::stats_client::StatsClient;
use crate::stores::{JsonFileCache, PrimaryBackend};
use crate::types::settings::{AppSettings, StorageSettings};

/// Bookmark manager as wired by the application.
pub type Bookmarks = BookmarkManager<PrimaryBackend, JsonFileCache>;

/// Primary database file: configured path, else `<data dir>/matchbook.db`.
pub fn primary_db_path(storage: &StorageSettings) -> PathBuf {
    match &storage.primary_db_path {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => platform::get_data_dir().join("matchbook.db"),
    }
}

/// Fallback cache file: configured path, else `<cache dir>/saved_players.json`.
pub fn fallback_cache_path(storage: &StorageSettings) -> PathBuf {
    match &storage.fallback_cache_path {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => platform::get_cache_dir().join("saved_players.json"),
    }
}

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub bookmarks: Arc<Bookmarks>,
    pub stats_client: StatsClient,
    pub heroes: Arc<HeroCatalog>,
    pub runtime: tokio::runtime::Runtime,
}

impl App {
    /// Loads settings from `config_path` (or the platform default) and builds the app.
    ///
    /// A malformed settings file is logged and replaced by defaults in memory.
    pub fn open(config_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(config_path);
        if let Err(e) = settings_engine.load() {
            warn!(path = settings_engine.get_config_path(), error = %e, "using default settings");
        }
        Self::new(settings_engine)
    }

    /// Builds the app from an already loaded settings engine.
    pub fn new(settings_engine: SettingsEngine) -> Result<Self, Box<dyn std::error::Error>> {
        let settings: AppSettings = settings_engine.get_settings().clone();

        let primary_path = primary_db_path(&settings.storage);
        let primary = PrimaryBackend::open_or_offline(
            &primary_path,
            Duration::from_millis(settings.storage.primary_busy_timeout_ms),
        );
        let fallback = JsonFileCache::new(fallback_cache_path(&settings.storage));
        info!(
            primary = %primary_path.display(),
            primary_online = primary.is_online(),
            fallback = %fallback.path().display(),
            "bookmark stores ready"
        );
        let bookmarks = Arc::new(BookmarkManager::new(primary, fallback));

        let stats_client = StatsClient::new(&settings.stats)
            .map_err(|e| format!("StatsClient init failed: {}", e))?;

        let heroes = match &settings.general.hero_list_path {
            Some(path) => HeroCatalog::load(path).unwrap_or_else(|e| {
                warn!(error = %e, "using built-in hero names");
                HeroCatalog::builtin()
            }),
            None => HeroCatalog::builtin(),
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| format!("runtime init failed: {}", e))?;

        Ok(Self {
            settings_engine,
            bookmarks,
            stats_client,
            heroes: Arc::new(heroes),
            runtime,
        })
    }

    pub fn settings(&self) -> &AppSettings {
        self.settings_engine.get_settings()
    }
}
