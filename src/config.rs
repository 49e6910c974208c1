//! Configuration module for Pulseboard.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Demo configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Artificial fetch latency in milliseconds (default: 800)
    pub delay_ms: u64,
    /// Synthetic fetch failure rate in [0, 1] (default: 0)
    pub error_rate: f64,
    /// Seed for the mock dataset (default: 42)
    pub seed: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            delay_ms: 800,
            error_rate: 0.0,
            seed: 42,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PULSEBOARD_DELAY_MS`: artificial fetch latency (default: 800)
    /// - `PULSEBOARD_ERROR_RATE`: synthetic failure rate 0-1 (default: 0)
    /// - `PULSEBOARD_SEED`: mock dataset seed (default: 42)
    pub fn load() -> Self {
        let mut cfg = Self::default();

        if let Ok(delay_str) = env::var("PULSEBOARD_DELAY_MS") {
            if let Ok(delay) = delay_str.parse() {
                cfg.delay_ms = delay;
            }
        }

        if let Ok(rate_str) = env::var("PULSEBOARD_ERROR_RATE") {
            if let Ok(rate) = rate_str.parse::<f64>() {
                cfg.error_rate = rate.clamp(0.0, 1.0);
            }
        }

        if let Ok(seed_str) = env::var("PULSEBOARD_SEED") {
            if let Ok(seed) = seed_str.parse() {
                cfg.seed = seed;
            }
        }

        cfg
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
