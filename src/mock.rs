//! Seeded mock data for demo and test fixtures.
//!
//! Stands in for a real monitoring backend. Generation is the only place
//! randomness lives; the aggregation functions downstream are deterministic
//! over whatever snapshot they are handed, so fixing the seed fixes every
//! number on the dashboard.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dataset::Dataset;
use crate::model::{
    CheckOutcome, ConnectionTarget, Monitor, MonitorStatus, MonitorType, UptimeRecord,
};

/// Days of history generated per monitor.
pub const HISTORY_DAYS: i64 = 30;

/// Checks per day (one per hour slot).
pub const CHECKS_PER_DAY: i64 = 24;

/// Build the demo fleet: twelve monitors across all five check types,
/// one currently down and one paused.
pub fn sample_monitors(now: DateTime<Utc>) -> Vec<Monitor> {
    let monitor = |id: &str,
                   name: &str,
                   monitor_type: MonitorType,
                   status: MonitorStatus,
                   target: ConnectionTarget,
                   check_interval: u32,
                   timeout: u32,
                   age_days: i64,
                   checked_hours_ago: i64,
                   tags: &[&str]| Monitor {
        id: id.to_string(),
        name: name.to_string(),
        monitor_type,
        status,
        target,
        check_interval,
        timeout,
        created_at: now - Duration::days(age_days),
        last_checked_at: now - Duration::hours(checked_hours_ago),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    };

    vec![
        monitor(
            "mon-001",
            "Production API",
            MonitorType::Http,
            MonitorStatus::Up,
            ConnectionTarget::url("https://api.example.com/health"),
            60,
            30,
            90,
            0,
            &["production", "api", "critical"],
        ),
        monitor(
            "mon-002",
            "Main Website",
            MonitorType::Http,
            MonitorStatus::Up,
            ConnectionTarget::url("https://www.example.com"),
            60,
            30,
            120,
            0,
            &["production", "frontend"],
        ),
        monitor(
            "mon-003",
            "Database Server",
            MonitorType::Tcp,
            MonitorStatus::Up,
            ConnectionTarget::host("db.internal.example.com", Some(5432)),
            30,
            10,
            60,
            0,
            &["production", "database", "critical"],
        ),
        monitor(
            "mon-004",
            "Redis Cache",
            MonitorType::Tcp,
            MonitorStatus::Up,
            ConnectionTarget::host("redis.internal.example.com", Some(6379)),
            30,
            10,
            45,
            0,
            &["production", "cache"],
        ),
        monitor(
            "mon-005",
            "Mail Server",
            MonitorType::Tcp,
            MonitorStatus::Down,
            ConnectionTarget::host("mail.example.com", Some(587)),
            60,
            30,
            30,
            0,
            &["production", "email"],
        ),
        monitor(
            "mon-006",
            "CDN Endpoint",
            MonitorType::Http,
            MonitorStatus::Up,
            ConnectionTarget::url("https://cdn.example.com/health"),
            120,
            30,
            75,
            0,
            &["production", "cdn"],
        ),
        monitor(
            "mon-007",
            "Payment Gateway",
            MonitorType::Http,
            MonitorStatus::Up,
            ConnectionTarget::url("https://payments.example.com/api/status"),
            30,
            15,
            100,
            0,
            &["production", "payments", "critical"],
        ),
        monitor(
            "mon-008",
            "Staging API",
            MonitorType::Http,
            MonitorStatus::Up,
            ConnectionTarget::url("https://staging-api.example.com/health"),
            300,
            30,
            20,
            0,
            &["staging", "api"],
        ),
        monitor(
            "mon-009",
            "DNS Resolver",
            MonitorType::Dns,
            MonitorStatus::Up,
            ConnectionTarget::host("example.com", None),
            300,
            30,
            50,
            0,
            &["infrastructure", "dns"],
        ),
        monitor(
            "mon-010",
            "SSL Certificate",
            MonitorType::Ssl,
            MonitorStatus::Up,
            ConnectionTarget::url("https://www.example.com"),
            3600,
            30,
            80,
            1,
            &["security", "ssl"],
        ),
        monitor(
            "mon-011",
            "Load Balancer",
            MonitorType::Ping,
            MonitorStatus::Up,
            ConnectionTarget::host("lb.example.com", None),
            60,
            10,
            40,
            0,
            &["infrastructure", "critical"],
        ),
        monitor(
            "mon-012",
            "Backup Server",
            MonitorType::Ping,
            MonitorStatus::Paused,
            ConnectionTarget::host("backup.internal.example.com", None),
            300,
            30,
            25,
            24,
            &["infrastructure", "backup"],
        ),
    ]
}

/// Generate hourly check records for one monitor over the trailing window.
///
/// Each hour slot is down with probability `failure_rate`; successful checks
/// report `base_response_ms` with ±50ms of jitter, failed checks report a
/// zero response time and a timeout error.
pub fn generate_records(
    rng: &mut impl Rng,
    monitor_id: &str,
    now: DateTime<Utc>,
    base_response_ms: f64,
    failure_rate: f64,
) -> Vec<UptimeRecord> {
    let mut records = Vec::with_capacity((HISTORY_DAYS * CHECKS_PER_DAY) as usize);

    for day in (0..HISTORY_DAYS).rev() {
        for hour in 0..CHECKS_PER_DAY {
            let hours_ago = day * CHECKS_PER_DAY + (CHECKS_PER_DAY - 1 - hour);
            let is_down = rng.gen::<f64>() < failure_rate;

            records.push(UptimeRecord {
                monitor_id: monitor_id.to_string(),
                timestamp: now - Duration::hours(hours_ago),
                status: if is_down {
                    CheckOutcome::Down
                } else {
                    CheckOutcome::Up
                },
                response_time: if is_down {
                    0.0
                } else {
                    base_response_ms + rng.gen_range(-50.0..50.0)
                },
                status_code: Some(if is_down { 500 } else { 200 }),
                error_message: is_down.then(|| "Connection timeout".to_string()),
            });
        }
    }

    records
}

/// Base response time and failure rate for each demo monitor.
const RECORD_PROFILES: [(&str, f64, f64); 12] = [
    ("mon-001", 120.0, 0.01),
    ("mon-002", 250.0, 0.02),
    ("mon-003", 15.0, 0.005),
    ("mon-004", 8.0, 0.003),
    ("mon-005", 200.0, 0.15), // Mail server has issues
    ("mon-006", 80.0, 0.01),
    ("mon-007", 180.0, 0.008),
    ("mon-008", 300.0, 0.05),
    ("mon-009", 45.0, 0.002),
    ("mon-010", 350.0, 0.001),
    ("mon-011", 5.0, 0.004),
    ("mon-012", 25.0, 0.02),
];

/// Build the full demo snapshot from a seed.
pub fn sample_dataset(seed: u64, now: DateTime<Utc>) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let monitors = sample_monitors(now);

    let mut records = Vec::new();
    for (id, base_ms, failure_rate) in RECORD_PROFILES {
        records.extend(generate_records(&mut rng, id, now, base_ms, failure_rate));
    }

    Dataset::new(monitors, records)
}
