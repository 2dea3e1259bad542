//! Pure match statistics: merging per-mode results, summaries and score bands.
//!
//! Nothing here performs I/O; `stats_client` feeds it raw API batches.

use std::collections::HashSet;

use crate::services::hero_catalog::HeroCatalog;
use crate::types::battle::{
    BattleRecord, BattleReport, BattleSummary, Category, GameRow, ScoreBand,
};

const RANKED_BATTLE_TYPES: [i32; 4] = [12, 13, 15, 16];

/// Ranked games, recognised by map name or by battle type (duo, trio, five, solo).
pub fn is_ranked(record: &BattleRecord) -> bool {
    record.map_name.contains("排位") || RANKED_BATTLE_TYPES.contains(&record.battle_type)
}

pub fn is_peak(record: &BattleRecord) -> bool {
    record.map_name.contains("巅峰")
}

/// Merges the batches returned for each mode of `category`.
///
/// The same match reported by several modes is kept once. Casual queries
/// also return ranked and peak games, which are filtered out. The result is
/// newest first.
pub fn merge_batches(category: Category, batches: Vec<Vec<BattleRecord>>) -> Vec<BattleRecord> {
    let mut seen = HashSet::new();
    let mut merged: Vec<BattleRecord> = batches
        .into_iter()
        .flatten()
        .filter(|record| seen.insert(record.dedup_key()))
        .filter(|record| category != Category::Casual || !(is_ranked(record) || is_peak(record)))
        .collect();

    merged.sort_by(|a, b| b.event_time.cmp(&a.event_time));
    merged
}

pub fn summarize(records: &[BattleRecord]) -> BattleSummary {
    let total = records.len();
    if total == 0 {
        return BattleSummary {
            total_games: 0,
            win_rate: "0%".to_string(),
            avg_kda: "0/0/0".to_string(),
            total_wins: 0,
            total_loss: 0,
        };
    }

    let wins = records.iter().filter(|r| r.is_win()).count();
    let (kills, deaths, assists) = records.iter().fold((0u64, 0u64, 0u64), |(k, d, a), r| {
        (k + r.kills as u64, d + r.deaths as u64, a + r.assists as u64)
    });
    let n = total as f64;

    BattleSummary {
        total_games: total,
        win_rate: format!("{:.1}%", wins as f64 / n * 100.0),
        avg_kda: format!(
            "{:.1}/{:.1}/{:.1}",
            kills as f64 / n,
            deaths as f64 / n,
            assists as f64 / n
        ),
        total_wins: wins,
        total_loss: total - wins,
    }
}

/// Bands a grade string; anything unparsable counts as poor.
pub fn score_band(grade: &str) -> ScoreBand {
    let score: f64 = grade.trim().parse().unwrap_or(0.0);
    if score >= 10.0 {
        ScoreBand::Excellent
    } else if score >= 8.0 {
        ScoreBand::Good
    } else if score >= 6.0 {
        ScoreBand::Fair
    } else {
        ScoreBand::Poor
    }
}

pub fn game_rows(records: &[BattleRecord], heroes: &HeroCatalog) -> Vec<GameRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let band = score_band(&r.grade);
            let (result, result_class) = if r.is_win() {
                ("胜利", "win")
            } else {
                ("失败", "lose")
            };
            GameRow {
                index: i + 1,
                time: r.game_time.clone(),
                hero_id: r.hero_id,
                hero_name: heroes.name_of(r.hero_id),
                hero_icon: r.hero_icon.clone(),
                kda: format!("{}/{}/{}", r.kills, r.deaths, r.assists),
                kills: r.kills,
                deaths: r.deaths,
                assists: r.assists,
                score: r.grade.clone(),
                score_band: band,
                score_color: band.color().to_string(),
                won: r.is_win(),
                result: result.to_string(),
                result_class: result_class.to_string(),
                mode: r.map_name.clone(),
            }
        })
        .collect()
}

/// Builds the full report for an already merged list.
pub fn build_report(category: Category, records: &[BattleRecord], heroes: &HeroCatalog) -> BattleReport {
    let message = if records.is_empty() {
        Some(format!("该玩家在{}模式下暂无战绩记录", category.label()))
    } else {
        None
    };

    BattleReport {
        category: category.code().to_string(),
        total: records.len(),
        summary: summarize(records),
        recent_games: game_rows(records, heroes),
        modes_count: category.modes().len(),
        message,
    }
}
