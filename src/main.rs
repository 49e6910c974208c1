//! Pulseboard - Uptime Dashboard Demo
//!
//! Builds a seeded mock dataset, fetches the aggregated dashboard through
//! the async harness, and prints the result as JSON.

use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulseboard::format::{format_percentage, format_response_time};
use pulseboard::model::{
    DailyUptimeSummary, DashboardKpis, MonitorTypeBreakdown, StatusBreakdown, UptimeStats,
};
use pulseboard::{mock, stats, AsyncData, DashboardConfig, FetchOptions, LoadingState};

/// Everything the dashboard renders, in one fetch.
#[derive(Debug, Clone, Serialize)]
struct DashboardView {
    kpis: DashboardKpis,
    monitors: Vec<UptimeStats>,
    daily: Vec<DailyUptimeSummary>,
    by_type: Vec<MonitorTypeBreakdown>,
    by_status: Vec<StatusBreakdown>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("pulseboard=info".parse()?))
        .init();

    // Load configuration
    let cfg = DashboardConfig::load();
    tracing::info!(
        "Starting Pulseboard (seed={}, delay={}ms, error_rate={})",
        cfg.seed,
        cfg.delay_ms,
        cfg.error_rate
    );

    // Build the session snapshot
    let now = Utc::now();
    let dataset = Arc::new(mock::sample_dataset(cfg.seed, now));
    tracing::info!(
        "Dataset ready: {} monitors, {} records",
        dataset.monitors.len(),
        dataset.records.len()
    );

    // Wrap the aggregation in the fetch harness
    let producer_data = dataset.clone();
    let fetch = AsyncData::new(
        move || {
            let data = producer_data.clone();
            async move {
                Ok(DashboardView {
                    kpis: stats::dashboard_kpis(&data.monitors, &data.records),
                    monitors: stats::uptime_stats_all(&data.monitors, &data.records),
                    daily: stats::daily_summaries(&data.records, now),
                    by_type: stats::type_breakdown(&data.monitors),
                    by_status: stats::status_breakdown(&data.monitors),
                })
            }
        },
        FetchOptions {
            immediate: false,
            delay: cfg.delay(),
            error_rate: cfg.error_rate,
        },
    );

    fetch.execute().await;

    // One manual retry, the way a UI retry button would
    if fetch.state() == LoadingState::Error {
        tracing::warn!(
            "Fetch failed: {}; retrying",
            fetch.error().unwrap_or_default()
        );
        fetch.refetch().await;
    }

    match fetch.state() {
        LoadingState::Success => {
            let view = fetch.data().ok_or("fetch succeeded without data")?;
            tracing::info!(
                "Dashboard ready: {}/{} monitors up, overall uptime {}, avg response {}",
                view.kpis.monitors_up,
                view.kpis.total_monitors,
                format_percentage(view.kpis.overall_uptime, 2),
                format_response_time(view.kpis.average_response_time as f64)
            );
            for entry in &view.by_status {
                tracing::info!(
                    "  {}: {} monitors ({})",
                    entry.status.label(),
                    entry.count,
                    format_percentage(entry.percentage, 1)
                );
            }
            println!("{}", serde_json::to_string_pretty(&view)?);
            Ok(())
        }
        _ => {
            let message = fetch.error().unwrap_or_default();
            tracing::error!("Fetch failed after retry: {}", message);
            Err(message.into())
        }
    }
}
