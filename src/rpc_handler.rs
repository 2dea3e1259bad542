//! RPC method handler for the Matchbook JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! This is the whole surface the user interface sees: saved players go
//! through the bookmark manager, match lookups through the stats client.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::bookmark_manager::BookmarkManagerTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::battle::Category;

fn str_param<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(|v| v.as_str())
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Saved players ───
        "player.save" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let nickname = str_param(params, "nickname").ok_or("missing nickname")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let ok = a.bookmarks.save(id, nickname).map_err(|e| e.to_string())?;
            Ok(json!({"ok": ok}))
        }
        "player.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.bookmarks.list()).map_err(|e| e.to_string())
        }
        "player.remove" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"ok": a.bookmarks.remove(id)}))
        }

        // ─── Match statistics ───
        "battle.categories" => {
            let arr: Vec<Value> = Category::ALL
                .iter()
                .map(|c| json!({"value": c.code(), "label": c.label()}))
                .collect();
            Ok(json!(arr))
        }
        "battle.query" => {
            let player_id = str_param(params, "player_id")
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .ok_or("missing player_id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let settings = a.settings();
            let category = Category::from_code(
                str_param(params, "category").unwrap_or(&settings.general.default_category),
            );
            // A key stored through `settings.set` applies without a restart.
            let api_key = str_param(params, "api_key")
                .filter(|k| !k.trim().is_empty())
                .unwrap_or(&settings.stats.api_key);

            let report = a
                .runtime
                .block_on(a.stats_client.query(Some(api_key), player_id, category, &a.heroes))
                .map_err(|e| e.to_string())?;
            serde_json::to_value(report).map_err(|e| e.to_string())
        }
        "hero.info" => {
            let hero_id = params
                .get("hero_id")
                .and_then(|v| v.as_i64())
                .ok_or("missing hero_id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.heroes.details(hero_id)).map_err(|e| e.to_string())
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key").ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.reset().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        "ping" => Ok(json!({"pong": true})),

        _ => Err(format!("unknown method: {}", method)),
    }
}
