//! Pulseboard - Uptime Dashboard Core
//!
//! In-memory aggregation of uptime-monitoring data: a fleet of monitors,
//! their historical check records, and the derived statistics a dashboard
//! displays, plus an async fetch harness with loading and error states for
//! a presentation layer to bind against.

pub mod config;
pub mod dataset;
pub mod fetch;
pub mod format;
pub mod mock;
pub mod model;
pub mod stats;

pub use config::DashboardConfig;
pub use dataset::{DataSource, Dataset};
pub use fetch::{AsyncData, FetchError, FetchOptions, LoadingState};
