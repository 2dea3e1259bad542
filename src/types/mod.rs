// Matchbook shared type definitions
// Each submodule defines types used across the application.

pub mod battle;
pub mod errors;
pub mod player;
pub mod settings;
