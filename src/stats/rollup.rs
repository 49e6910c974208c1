//! Daily rollups over the trailing 30-day window.

use chrono::{DateTime, Days, NaiveTime, Utc};

use crate::model::{DailyUptimeSummary, UptimeRecord};

/// Number of calendar days covered by the rollup, including today.
pub const ROLLUP_DAYS: u64 = 30;

/// Roll the full record set up into per-day summaries across all monitors.
///
/// Produces exactly [`ROLLUP_DAYS`] entries, oldest first, covering the
/// UTC calendar day of `now` and the 29 days before it. Each day is the
/// half-open interval `[midnight, next midnight)`, so a record stamped
/// exactly at midnight belongs to the day it starts. Days with no records
/// report zeros rather than being skipped.
pub fn daily_summaries(records: &[UptimeRecord], now: DateTime<Utc>) -> Vec<DailyUptimeSummary> {
    let today = now.date_naive();
    let mut summaries = Vec::with_capacity(ROLLUP_DAYS as usize);

    for offset in (0..ROLLUP_DAYS).rev() {
        let date = today - Days::new(offset);
        let day_start = date.and_time(NaiveTime::MIN).and_utc();
        let day_end = day_start + Days::new(1);

        summaries.push(summarize_day(records, date, day_start, day_end));
    }

    summaries
}

fn summarize_day(
    records: &[UptimeRecord],
    date: chrono::NaiveDate,
    day_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
) -> DailyUptimeSummary {
    let mut successful_checks = 0usize;
    let mut incidents = 0usize;
    let mut response_sum = 0.0f64;

    for record in records
        .iter()
        .filter(|r| r.timestamp >= day_start && r.timestamp < day_end)
    {
        if record.is_up() {
            successful_checks += 1;
            response_sum += record.response_time;
        } else {
            incidents += 1;
        }
    }

    let total_checks = successful_checks + incidents;

    DailyUptimeSummary {
        date,
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
        incidents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CheckOutcome;
    use chrono::{Duration, TimeZone};

    fn record(up: bool, timestamp: DateTime<Utc>, response_ms: f64) -> UptimeRecord {
        UptimeRecord {
            monitor_id: "m".to_string(),
            timestamp,
            status: if up { CheckOutcome::Up } else { CheckOutcome::Down },
            response_time: if up { response_ms } else { 0.0 },
            status_code: None,
            error_message: None,
        }
    }

    #[test]
    fn test_thirty_ordered_contiguous_days() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        let summaries = daily_summaries(&[], now);

        assert_eq!(summaries.len(), 30);
        assert_eq!(summaries.last().unwrap().date, now.date_naive());
        assert_eq!(
            summaries.first().unwrap().date,
            now.date_naive() - Days::new(29)
        );
        for pair in summaries.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + Days::new(1));
        }
    }

    #[test]
    fn test_empty_days_report_zeros() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        for day in daily_summaries(&[], now) {
            assert_eq!(day.uptime_percentage, 0.0);
            assert_eq!(day.average_response_time, 0);
            assert_eq!(day.total_checks, 0);
            assert_eq!(day.incidents, 0);
        }
    }

    #[test]
    fn test_midnight_belongs_to_starting_day() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 3, 14, 0, 0, 0).unwrap();
        let records = vec![record(true, midnight, 100.0)];

        let summaries = daily_summaries(&records, now);
        let march_13 = summaries.iter().find(|s| s.date.to_string() == "2024-03-13");
        let march_14 = summaries.iter().find(|s| s.date.to_string() == "2024-03-14");

        assert_eq!(march_13.unwrap().total_checks, 0);
        assert_eq!(march_14.unwrap().total_checks, 1);
    }

    #[test]
    fn test_day_metrics_combine_all_monitors() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let noon_yesterday = now - Duration::days(1);
        let mut records = vec![
            record(true, noon_yesterday, 100.0),
            record(true, noon_yesterday + Duration::hours(1), 300.0),
            record(false, noon_yesterday + Duration::hours(2), 0.0),
        ];
        records[1].monitor_id = "other".to_string();

        let summaries = daily_summaries(&records, now);
        let day = summaries.iter().find(|s| s.date == noon_yesterday.date_naive()).unwrap();

        assert_eq!(day.total_checks, 3);
        assert_eq!(day.incidents, 1);
        assert!((day.uptime_percentage - 100.0 * 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(day.average_response_time, 200);
    }

    #[test]
    fn test_records_outside_window_ignored() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let records = vec![
            record(false, now - Duration::days(31), 0.0),
            record(false, now + Duration::days(1), 0.0),
        ];

        let summaries = daily_summaries(&records, now);
        let total: usize = summaries.iter().map(|s| s.total_checks).sum();
        assert_eq!(total, 0);
    }
}
