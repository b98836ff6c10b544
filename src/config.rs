// src/config.rs

use dotenvy::dotenv;
use std::env;

/// Simulated network latency of the mock translation call, in milliseconds.
pub const TRANSLATION_LATENCY_MS: u64 = 600;

/// Number of steps in the onboarding wizard.
pub const WIZARD_TOTAL_STEPS: u8 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        // The store is a local sqlite file; create it on first run.
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://citizen-guide.db?mode=rwc".to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            rust_log,
        }
    }
}
