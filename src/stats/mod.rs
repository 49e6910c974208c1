//! Aggregation engine for dashboard statistics.
//!
//! Pure functions from monitor/record snapshots to derived statistics.
//! Nothing here touches a clock, a random source, or shared state; given
//! the same input the same numbers come out, so callers own reproducibility
//! by fixing the snapshot and the reference time they pass in.

mod breakdown;
mod rollup;
mod uptime;

pub use breakdown::*;
pub use rollup::*;
pub use uptime::*;

use crate::model::{DashboardKpis, Monitor, MonitorStatus, UptimeRecord};

/// Compute the top-level KPI summary for the dashboard header.
///
/// `overall_uptime` and `average_response_time` are unweighted means over
/// the per-monitor values: each monitor counts once regardless of how many
/// checks it has. Up/down counts and `active_incidents` reflect the current
/// status snapshot, independent of historical uptime.
pub fn dashboard_kpis(monitors: &[Monitor], records: &[UptimeRecord]) -> DashboardKpis {
    let stats = uptime_stats_all(monitors, records);

    let monitors_up = monitors
        .iter()
        .filter(|m| m.status == MonitorStatus::Up)
        .count();
    let monitors_down = monitors
        .iter()
        .filter(|m| m.status == MonitorStatus::Down)
        .count();

    let (overall_uptime, average_response_time) = if stats.is_empty() {
        (0.0, 0)
    } else {
        let n = stats.len() as f64;
        let uptime_sum: f64 = stats.iter().map(|s| s.uptime_percentage).sum();
        let response_sum: f64 = stats.iter().map(|s| s.average_response_time as f64).sum();
        (uptime_sum / n, (response_sum / n).round() as i64)
    };

    DashboardKpis {
        total_monitors: monitors.len(),
        monitors_up,
        monitors_down,
        overall_uptime,
        average_response_time,
        active_incidents: monitors_down,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CheckOutcome, ConnectionTarget, MonitorType};
    use chrono::{Duration, Utc};

    fn monitor(id: &str, status: MonitorStatus) -> Monitor {
        let now = Utc::now();
        Monitor {
            id: id.to_string(),
            name: id.to_string(),
            monitor_type: MonitorType::Http,
            status,
            target: ConnectionTarget::url("https://example.com"),
            check_interval: 60,
            timeout: 30,
            created_at: now,
            last_checked_at: now,
            tags: vec![],
        }
    }

    fn record(monitor_id: &str, up: bool, hours_ago: i64, response_ms: f64) -> UptimeRecord {
        UptimeRecord {
            monitor_id: monitor_id.to_string(),
            timestamp: Utc::now() - Duration::hours(hours_ago),
            status: if up { CheckOutcome::Up } else { CheckOutcome::Down },
            response_time: if up { response_ms } else { 0.0 },
            status_code: Some(if up { 200 } else { 500 }),
            error_message: (!up).then(|| "Connection timeout".to_string()),
        }
    }

    #[test]
    fn test_kpis_use_unweighted_mean() {
        // a has 10 checks at 100% uptime, b has 100 checks at 50%. The
        // record-weighted mean would be (10 + 50) / 110 ≈ 54.5%; the KPI
        // must report the simple mean of 100 and 50 instead.
        let monitors = vec![monitor("a", MonitorStatus::Up), monitor("b", MonitorStatus::Down)];
        let mut records = Vec::new();
        for i in 0..10 {
            records.push(record("a", true, i, 100.0));
        }
        for i in 0..100 {
            records.push(record("b", i % 2 == 0, i, 300.0));
        }

        let kpis = dashboard_kpis(&monitors, &records);
        // Simple mean of 100 and 50, not (10 + 50) / 110.
        assert!((kpis.overall_uptime - 75.0).abs() < 1e-9);
        assert_eq!(kpis.average_response_time, 200);
    }

    #[test]
    fn test_kpis_status_snapshot_counts() {
        let monitors = vec![
            monitor("a", MonitorStatus::Up),
            monitor("b", MonitorStatus::Down),
            monitor("c", MonitorStatus::Paused),
            monitor("d", MonitorStatus::Pending),
        ];
        let kpis = dashboard_kpis(&monitors, &[]);

        assert_eq!(kpis.total_monitors, 4);
        assert_eq!(kpis.monitors_up, 1);
        assert_eq!(kpis.monitors_down, 1);
        // Active incidents track current status, not check history.
        assert_eq!(kpis.active_incidents, 1);
    }

    #[test]
    fn test_kpis_empty_fleet() {
        let kpis = dashboard_kpis(&[], &[]);
        assert_eq!(kpis.total_monitors, 0);
        assert_eq!(kpis.overall_uptime, 0.0);
        assert_eq!(kpis.average_response_time, 0);
    }
}
