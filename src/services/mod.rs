// Matchbook services
// Services provide the stateless and external pieces: settings, match statistics, hero names.

pub mod battle_stats;
pub mod hero_catalog;
pub mod settings_engine;
pub mod stats_client;
