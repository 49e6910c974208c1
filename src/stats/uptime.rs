//! Per-monitor uptime statistics.

use chrono::{DateTime, Utc};

use crate::model::{CheckOutcome, Monitor, UptimeRecord, UptimeStats};

/// Compute uptime statistics for one monitor from the full record set.
///
/// Records are matched by monitor id. Every zero denominator yields 0:
/// a monitor with no records has 0% uptime, and a monitor with no
/// successful checks has an average response time of 0.
pub fn uptime_stats(monitor_id: &str, records: &[UptimeRecord]) -> UptimeStats {
    let mut successful_checks = 0usize;
    let mut failed_checks = 0usize;
    let mut response_sum = 0.0f64;
    let mut last_downtime: Option<DateTime<Utc>> = None;

    for record in records.iter().filter(|r| r.monitor_id == monitor_id) {
        match record.status {
            CheckOutcome::Up => {
                successful_checks += 1;
                response_sum += record.response_time;
            }
            CheckOutcome::Down => {
                failed_checks += 1;
                if last_downtime.map_or(true, |t| record.timestamp > t) {
                    last_downtime = Some(record.timestamp);
                }
            }
        }
    }

    let total_checks = successful_checks + failed_checks;

    UptimeStats {
        monitor_id: monitor_id.to_string(),
        uptime_percentage: if total_checks > 0 {
            successful_checks as f64 / total_checks as f64 * 100.0
        } else {
            0.0
        },
        average_response_time: if successful_checks > 0 {
            (response_sum / successful_checks as f64).round() as i64
        } else {
            0
        },
        total_checks,
        successful_checks,
        failed_checks,
        last_downtime,
    }
}

/// Per-monitor statistics for the whole fleet, in fleet order.
pub fn uptime_stats_all(monitors: &[Monitor], records: &[UptimeRecord]) -> Vec<UptimeStats> {
    monitors
        .iter()
        .map(|m| uptime_stats(&m.id, records))
        .collect()
}
