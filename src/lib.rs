//! Matchbook — match statistics lookup with a resilient list of saved players.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod stores;
pub mod types;
