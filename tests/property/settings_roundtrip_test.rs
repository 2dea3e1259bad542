//! Property-based tests for AppSettings serialization round-trip.
//!
//! AppSettings must survive JSON serialization and deserialization without
//! data loss for arbitrary valid inputs.

use matchbook::types::settings::{AppSettings, GeneralSettings, StatsSettings, StorageSettings};
use proptest::prelude::*;

fn arb_stats() -> impl Strategy<Value = StatsSettings> {
    ("[a-zA-Z0-9]{0,32}", "https?://[a-z]{1,12}\\.[a-z]{2,4}/[a-z/]{0,20}", 1u64..600).prop_map(
        |(api_key, api_base_url, request_timeout_secs)| StatsSettings {
            api_key,
            api_base_url,
            request_timeout_secs,
        },
    )
}

fn arb_storage() -> impl Strategy<Value = StorageSettings> {
    (
        proptest::option::of("/[a-z]{1,10}/[a-z]{1,10}\\.db"),
        proptest::option::of("/[a-z]{1,10}/[a-z_]{1,10}\\.json"),
        0u64..60_000,
    )
        .prop_map(|(primary_db_path, fallback_cache_path, primary_busy_timeout_ms)| {
            StorageSettings {
                primary_db_path,
                fallback_cache_path,
                primary_busy_timeout_ms,
            }
        })
}

fn arb_general() -> impl Strategy<Value = GeneralSettings> {
    (
        "[1-5]",
        proptest::option::of("/[a-z]{1,10}/heroes\\.json"),
        prop_oneof![
            Just("info".to_string()),
            Just("debug".to_string()),
            Just("matchbook=trace,warn".to_string()),
        ],
    )
        .prop_map(|(default_category, hero_list_path, log_filter)| GeneralSettings {
            default_category,
            hero_list_path,
            log_filter,
        })
}

fn arb_settings() -> impl Strategy<Value = AppSettings> {
    (arb_stats(), arb_storage(), arb_general())
        .prop_map(|(stats, storage, general)| AppSettings { stats, storage, general })
}

proptest! {
    #[test]
    fn settings_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, settings);
    }

    #[test]
    fn settings_pretty_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, settings);
    }
}
