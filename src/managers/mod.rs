// Matchbook state managers
// Managers own stateful operations across stores.

pub mod bookmark_manager;
