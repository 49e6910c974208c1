//! Display formatting helpers for the dashboard.

use chrono::{DateTime, Utc};

/// Format a value as a percentage with the given number of decimals.
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

/// Format a millisecond duration as "123ms" below a second, "1.23s" above.
pub fn format_response_time(ms: f64) -> String {
    if ms < 1000.0 {
        format!("{}ms", ms.round() as i64)
    } else {
        format!("{:.2}s", ms / 1000.0)
    }
}

/// Format a timestamp as a short date, e.g. "Mar 14".
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d").to_string()
}

/// Format a timestamp with date and time, e.g. "Mar 14 09:05".
pub fn format_date_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d %H:%M").to_string()
}

/// Format how long ago `then` was relative to `now`, e.g. "5m ago".
///
/// Falls back to a short date beyond a week.
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - then;
    let seconds = elapsed.num_seconds();

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", elapsed.num_minutes())
    } else if seconds < 86400 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 7 {
        format!("{}d ago", elapsed.num_days())
    } else {
        format_date(then)
    }
}

/// Format a large count with K/M/B suffixes, e.g. "8.6K".
pub fn format_compact_number(n: u64) -> String {
    const K: u64 = 1_000;
    const M: u64 = 1_000_000;
    const B: u64 = 1_000_000_000;

    if n >= B {
        format!("{:.1}B", n as f64 / B as f64)
    } else if n >= M {
        format!("{:.1}M", n as f64 / M as f64)
    } else if n >= K {
        format!("{:.1}K", n as f64 / K as f64)
    } else {
        n.to_string()
    }
}
