//! Tests for the RPC method handler.

use std::sync::Mutex;

use matchbook::app::App;
use matchbook::rpc_handler::handle_method;
use serde_json::json;
use tempfile::TempDir;

/// Builds an app whose stores and settings live in a temp dir.
fn setup() -> (TempDir, Mutex<App>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let settings_path = dir.path().join("settings.json");
    let settings = json!({
        "stats": {"api_key": "", "api_base_url": "http://127.0.0.1:9/none", "request_timeout_secs": 1},
        "storage": {
            "primary_db_path": dir.path().join("data").join("matchbook.db").to_string_lossy(),
            "fallback_cache_path": dir.path().join("cache").join("saved_players.json").to_string_lossy(),
            "primary_busy_timeout_ms": 500
        },
        "general": {"default_category": "1", "hero_list_path": null, "log_filter": "info"}
    });
    std::fs::write(&settings_path, settings.to_string()).unwrap();

    let app = App::open(Some(settings_path.to_string_lossy().to_string())).expect("app init");
    (dir, Mutex::new(app))
}

#[test]
fn test_ping() {
    let (_dir, app) = setup();
    assert_eq!(handle_method(&app, "ping", &json!({})).unwrap(), json!({"pong": true}));
}

#[test]
fn test_unknown_method() {
    let (_dir, app) = setup();
    let err = handle_method(&app, "player.rename", &json!({})).unwrap_err();
    assert_eq!(err, "unknown method: player.rename");
}

#[test]
fn test_save_list_remove_flow() {
    let (dir, app) = setup();

    let saved = handle_method(&app, "player.save", &json!({"id": "P1", "nickname": "Alice"})).unwrap();
    assert_eq!(saved, json!({"ok": true}));
    handle_method(&app, "player.save", &json!({"id": "P2", "nickname": "Bob"})).unwrap();

    let list = handle_method(&app, "player.list", &json!({})).unwrap();
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], "P1");
    assert_eq!(list[0]["nickname"], "Alice");
    assert!(list[0]["saveTime"].as_i64().unwrap() > 0);
    assert!(list[0].get("lastUsed").is_some());

    let removed = handle_method(&app, "player.remove", &json!({"id": "P1"})).unwrap();
    assert_eq!(removed, json!({"ok": true}));
    let removed = handle_method(&app, "player.remove", &json!({"id": "P1"})).unwrap();
    assert_eq!(removed, json!({"ok": false}));

    let list = handle_method(&app, "player.list", &json!({})).unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert!(dir.path().join("cache").join("saved_players.json").exists());
}

#[test]
fn test_save_validation_error() {
    let (_dir, app) = setup();
    let err = handle_method(&app, "player.save", &json!({"id": " ", "nickname": "x"})).unwrap_err();
    assert!(err.starts_with("Invalid bookmark"));
}

#[test]
fn test_missing_params() {
    let (_dir, app) = setup();
    assert_eq!(
        handle_method(&app, "player.save", &json!({"nickname": "x"})).unwrap_err(),
        "missing id"
    );
    assert_eq!(
        handle_method(&app, "player.save", &json!({"id": "P1"})).unwrap_err(),
        "missing nickname"
    );
    assert_eq!(
        handle_method(&app, "player.remove", &json!({})).unwrap_err(),
        "missing id"
    );
    assert_eq!(
        handle_method(&app, "battle.query", &json!({"player_id": "  "})).unwrap_err(),
        "missing player_id"
    );
}

#[test]
fn test_categories() {
    let (_dir, app) = setup();
    let cats = handle_method(&app, "battle.categories", &json!({})).unwrap();
    let cats = cats.as_array().unwrap();
    assert_eq!(cats.len(), 5);
    assert_eq!(cats[0], json!({"value": "1", "label": "全部比赛"}));
}

#[test]
fn test_query_without_api_key() {
    let (_dir, app) = setup();
    let err = handle_method(&app, "battle.query", &json!({"player_id": "123"})).unwrap_err();
    assert_eq!(err, "No statistics API key configured");
}

#[test]
fn test_hero_info_for_catalog_hero() {
    let (dir, app) = setup();
    let heroes = dir.path().join("herolist.json");
    std::fs::write(&heroes, r#"[{"ename":105,"cname":"廉颇","title":"正义爆轰","hero_type":3}]"#).unwrap();
    handle_method(&app, "settings.set", &json!({"key": "general.hero_list_path", "value": heroes.to_string_lossy()})).unwrap();

    // The hero list is read at startup, so reopen with the updated settings.
    let settings_path = dir.path().join("settings.json");
    let app = Mutex::new(App::open(Some(settings_path.to_string_lossy().to_string())).unwrap());
    let info = handle_method(&app, "hero.info", &json!({"hero_id": 105})).unwrap();
    assert_eq!(
        info,
        json!({"id": 105, "name": "廉颇", "title": "正义爆轰", "type": "刺客", "fullName": "廉颇 - 正义爆轰"})
    );
}

#[test]
fn test_hero_info_falls_back_to_builtin_names() {
    let (_dir, app) = setup();
    let info = handle_method(&app, "hero.info", &json!({"hero_id": 505})).unwrap();
    assert_eq!(info, json!({"id": 505, "name": "瑶", "type": "unknown"}));
    assert_eq!(
        handle_method(&app, "hero.info", &json!({})).unwrap_err(),
        "missing hero_id"
    );
}

#[test]
fn test_settings_get_set_reset() {
    let (dir, app) = setup();

    let settings = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(settings["stats"]["api_key"], "");
    assert_eq!(settings["storage"]["primary_busy_timeout_ms"], 500);

    let ok = handle_method(&app, "settings.set", &json!({"key": "stats.api_key", "value": "k-1"})).unwrap();
    assert_eq!(ok, json!({"ok": true}));
    let settings = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(settings["stats"]["api_key"], "k-1");

    let on_disk = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
    assert!(on_disk.contains("k-1"));

    handle_method(&app, "settings.reset", &json!({})).unwrap();
    let settings = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(settings["stats"]["api_key"], "");
    assert_eq!(settings["storage"]["primary_busy_timeout_ms"], 5000);
}

#[test]
fn test_settings_set_errors() {
    let (_dir, app) = setup();
    assert_eq!(
        handle_method(&app, "settings.set", &json!({"value": 1})).unwrap_err(),
        "missing key"
    );
    assert_eq!(
        handle_method(&app, "settings.set", &json!({"key": "stats.api_key"})).unwrap_err(),
        "missing value"
    );
    let err = handle_method(&app, "settings.set", &json!({"key": "stats.nope", "value": 1})).unwrap_err();
    assert!(err.starts_with("Invalid settings key"));
}
