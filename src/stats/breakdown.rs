//! Categorical breakdowns of the monitor fleet.

use crate::model::{
    Monitor, MonitorStatus, MonitorType, MonitorTypeBreakdown, StatusBreakdown,
};

/// Count monitors per type with an up/down split within each type.
///
/// Types with no monitors are omitted; the result is a filtered list, not
/// a fixed-size table.
pub fn type_breakdown(monitors: &[Monitor]) -> Vec<MonitorTypeBreakdown> {
    MonitorType::ALL
        .iter()
        .map(|&monitor_type| {
            let of_type: Vec<_> = monitors
                .iter()
                .filter(|m| m.monitor_type == monitor_type)
                .collect();

            MonitorTypeBreakdown {
                monitor_type,
                count: of_type.len(),
                up_count: of_type
                    .iter()
                    .filter(|m| m.status == MonitorStatus::Up)
                    .count(),
                down_count: of_type
                    .iter()
                    .filter(|m| m.status == MonitorStatus::Down)
                    .count(),
            }
        })
        .filter(|b| b.count > 0)
        .collect()
}

/// Count monitors per status with each status's share of the fleet.
///
/// Zero-count statuses are omitted. The percentage denominator is the full
/// fleet size; an empty fleet yields an empty list, never NaN.
pub fn status_breakdown(monitors: &[Monitor]) -> Vec<StatusBreakdown> {
    let total = monitors.len();

    MonitorStatus::ALL
        .iter()
        .map(|&status| {
            let count = monitors.iter().filter(|m| m.status == status).count();
            StatusBreakdown {
                status,
                count,
                percentage: if total > 0 {
                    count as f64 / total as f64 * 100.0
                } else {
                    0.0
                },
            }
        })
        .filter(|b| b.count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConnectionTarget;
    use chrono::Utc;

    fn monitor(id: &str, monitor_type: MonitorType, status: MonitorStatus) -> Monitor {
        let now = Utc::now();
        Monitor {
            id: id.to_string(),
            name: id.to_string(),
            monitor_type,
            status,
            target: ConnectionTarget::url("https://example.com"),
            check_interval: 60,
            timeout: 30,
            created_at: now,
            last_checked_at: now,
            tags: vec![],
        }
    }

    fn fleet() -> Vec<Monitor> {
        vec![
            monitor("a", MonitorType::Http, MonitorStatus::Up),
            monitor("b", MonitorType::Http, MonitorStatus::Down),
            monitor("c", MonitorType::Tcp, MonitorStatus::Up),
            monitor("d", MonitorType::Ping, MonitorStatus::Paused),
        ]
    }

    #[test]
    fn test_type_breakdown_splits_and_omits() {
        let breakdown = type_breakdown(&fleet());

        // dns and ssl have no monitors and must not appear.
        assert_eq!(breakdown.len(), 3);
        assert!(breakdown.iter().all(|b| b.count > 0));

        let http = breakdown
            .iter()
            .find(|b| b.monitor_type == MonitorType::Http)
            .unwrap();
        assert_eq!(http.count, 2);
        assert_eq!(http.up_count, 1);
        assert_eq!(http.down_count, 1);

        // Paused monitors count toward the type but neither split.
        let ping = breakdown
            .iter()
            .find(|b| b.monitor_type == MonitorType::Ping)
            .unwrap();
        assert_eq!(ping.count, 1);
        assert_eq!(ping.up_count, 0);
        assert_eq!(ping.down_count, 0);
    }

    #[test]
    fn test_breakdown_counts_cover_fleet() {
        let monitors = fleet();
        let by_type: usize = type_breakdown(&monitors).iter().map(|b| b.count).sum();
        let by_status: usize = status_breakdown(&monitors).iter().map(|b| b.count).sum();

        assert_eq!(by_type, monitors.len());
        assert_eq!(by_status, monitors.len());
    }

    #[test]
    fn test_status_percentages() {
        let breakdown = status_breakdown(&fleet());

        // pending has no monitors and must not appear.
        assert_eq!(breakdown.len(), 3);

        let up = breakdown
            .iter()
            .find(|b| b.status == MonitorStatus::Up)
            .unwrap();
        assert_eq!(up.count, 2);
        assert!((up.percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_fleet_yields_empty_breakdowns() {
        assert!(type_breakdown(&[]).is_empty());
        assert!(status_breakdown(&[]).is_empty());
    }
}
