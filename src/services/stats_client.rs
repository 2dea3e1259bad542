// Matchbook Stats Client
// Queries the remote match statistics API, one request per mode, concurrently.

use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::services::battle_stats;
use crate::services::hero_catalog::HeroCatalog;
use crate::types::battle::{BattleRecord, BattleReport, BattleResponse, Category};
use crate::types::errors::StatsError;
use crate::types::settings::StatsSettings;

/// Decodes one API response body, accepting it only when `code == 200`.
pub fn parse_response(body: &[u8]) -> Result<Vec<BattleRecord>, StatsError> {
    let response: BattleResponse =
        serde_json::from_slice(body).map_err(|e| StatsError::Parse(e.to_string()))?;
    if response.code != 200 {
        return Err(StatsError::Api(format!("code {}: {}", response.code, response.msg)));
    }
    Ok(response.data.list)
}

/// HTTP client for the statistics API. Cheap to clone.
#[derive(Clone)]
pub struct StatsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StatsClient {
    pub fn new(settings: &StatsSettings) -> Result<Self, StatsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| StatsError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: settings.api_base_url.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    /// Picks the per-call key when given, else the configured one.
    fn resolve_key(&self, api_key: Option<&str>) -> Result<String, StatsError> {
        api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .or_else(|| Some(self.api_key.trim().to_string()).filter(|k| !k.is_empty()))
            .ok_or(StatsError::MissingApiKey)
    }

    /// Fetches the records of a single API mode.
    pub async fn fetch_mode(
        &self,
        api_key: &str,
        player_id: &str,
        mode: &str,
    ) -> Result<Vec<BattleRecord>, StatsError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("key", api_key), ("id", player_id), ("option", mode)])
            .send()
            .await
            .map_err(|e| StatsError::Network(e.to_string()))?;
        let body = response
            .bytes()
            .await
            .map_err(|e| StatsError::Network(e.to_string()))?;
        parse_response(&body)
    }

    /// Queries every mode of `category` concurrently and builds a report.
    ///
    /// Modes that fail are logged and skipped; the query only fails when
    /// every mode does.
    pub async fn query(
        &self,
        api_key: Option<&str>,
        player_id: &str,
        category: Category,
        heroes: &HeroCatalog,
    ) -> Result<BattleReport, StatsError> {
        let key = self.resolve_key(api_key)?;
        let modes = category.modes();
        debug!(player_id, category = category.code(), ?modes, "querying match statistics");

        let mut tasks = JoinSet::new();
        for (index, mode) in modes.iter().enumerate() {
            let client = self.clone();
            let key = key.clone();
            let player_id = player_id.to_string();
            tasks.spawn(async move { (index, client.fetch_mode(&key, &player_id, mode).await) });
        }

        let mut results = Vec::with_capacity(modes.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(result) => results.push(result),
                Err(e) => warn!(error = %e, "statistics task did not complete"),
            }
        }
        // Keep mode order so duplicate matches resolve the same way every time.
        results.sort_by_key(|(index, _)| *index);

        let mut batches = Vec::new();
        let mut first_error = None;
        for (index, result) in results {
            match result {
                Ok(records) => {
                    debug!(mode = modes[index], count = records.len(), "mode fetched");
                    batches.push(records);
                }
                Err(e) => {
                    warn!(mode = modes[index], error = %e, "mode query failed");
                    first_error.get_or_insert(e);
                }
            }
        }

        if batches.is_empty() {
            if let Some(e) = first_error {
                return Err(e);
            }
        }

        let merged = battle_stats::merge_batches(category, batches);
        info!(player_id, total = merged.len(), "match statistics ready");
        Ok(battle_stats::build_report(category, &merged, heroes))
    }
}
