//! Core model types for monitors, check records, and derived statistics.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The kind of check a monitor performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorType {
    Http,
    Tcp,
    Ping,
    Dns,
    Ssl,
}

impl MonitorType {
    /// All known monitor types, in display order.
    pub const ALL: [MonitorType; 5] = [
        MonitorType::Http,
        MonitorType::Tcp,
        MonitorType::Ping,
        MonitorType::Dns,
        MonitorType::Ssl,
    ];
}

/// Current status of a monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorStatus {
    Up,
    Down,
    Pending,
    Paused,
}

impl MonitorStatus {
    /// All known statuses, in display order.
    pub const ALL: [MonitorStatus; 4] = [
        MonitorStatus::Up,
        MonitorStatus::Down,
        MonitorStatus::Pending,
        MonitorStatus::Paused,
    ];

    /// Human-readable status label.
    pub fn label(&self) -> &'static str {
        match self {
            MonitorStatus::Up => "Operational",
            MonitorStatus::Down => "Down",
            MonitorStatus::Pending => "Pending",
            MonitorStatus::Paused => "Paused",
        }
    }
}

/// What a monitor connects to.
///
/// Endpoint-style checks (http, ssl) carry a URL; connection-style checks
/// (tcp, ping, dns) carry a host and, for tcp, a port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConnectionTarget {
    Url { url: String },
    Host { host: String, port: Option<u16> },
}

impl ConnectionTarget {
    pub fn url(url: &str) -> Self {
        ConnectionTarget::Url { url: url.to_string() }
    }

    pub fn host(host: &str, port: Option<u16>) -> Self {
        ConnectionTarget::Host {
            host: host.to_string(),
            port,
        }
    }
}

/// A monitored target configuration.
///
/// Monitors are immutable for the duration of a dashboard session; status
/// changes arrive as new check records, not in-place mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monitor {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub monitor_type: MonitorType,
    pub status: MonitorStatus,
    #[serde(flatten)]
    pub target: ConnectionTarget,
    /// Check interval in seconds.
    pub check_interval: u32,
    /// Timeout in seconds.
    pub timeout: u32,
    pub created_at: DateTime<Utc>,
    pub last_checked_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

/// Outcome of a single check. Records are binary; "pending" and "paused"
/// exist only at the monitor level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckOutcome {
    Up,
    Down,
}

/// One observed check result for one monitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UptimeRecord {
    pub monitor_id: String,
    pub timestamp: DateTime<Utc>,
    pub status: CheckOutcome,
    /// Response time in milliseconds; 0 by convention when the check is down.
    pub response_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl UptimeRecord {
    pub fn is_up(&self) -> bool {
        self.status == CheckOutcome::Up
    }
}

/// Derived uptime statistics for a single monitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UptimeStats {
    pub monitor_id: String,
    pub uptime_percentage: f64,
    /// Mean response time over successful checks, rounded to the nearest ms.
    pub average_response_time: i64,
    pub total_checks: usize,
    pub successful_checks: usize,
    pub failed_checks: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_downtime: Option<DateTime<Utc>>,
}

/// Uptime metrics for one UTC calendar day, across all monitors combined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyUptimeSummary {
    pub date: NaiveDate,
    pub uptime_percentage: f64,
    pub average_response_time: i64,
    pub total_checks: usize,
    /// Number of down records that day, not distinct outage episodes.
    pub incidents: usize,
}

/// Monitor count and up/down split for one monitor type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorTypeBreakdown {
    #[serde(rename = "type")]
    pub monitor_type: MonitorType,
    pub count: usize,
    pub up_count: usize,
    pub down_count: usize,
}

/// Monitor count and share of the fleet for one status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub status: MonitorStatus,
    pub count: usize,
    pub percentage: f64,
}

/// Top-level dashboard summary.
///
/// `overall_uptime` and `average_response_time` are unweighted means over
/// per-monitor values, not record-weighted means across all checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardKpis {
    pub total_monitors: usize,
    pub monitors_up: usize,
    pub monitors_down: usize,
    pub overall_uptime: f64,
    pub average_response_time: i64,
    pub active_incidents: usize,
}
