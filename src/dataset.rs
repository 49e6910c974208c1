//! Dashboard data snapshot.
//!
//! The aggregation functions take explicit monitor and record slices rather
//! than reading a shared global, so any source — the mock generator, a test
//! fixture, or a real backend — can feed them.

use crate::model::{Monitor, UptimeRecord};

/// Anything that can supply a monitor fleet and its check history.
pub trait DataSource {
    fn monitors(&self) -> &[Monitor];
    fn records(&self) -> &[UptimeRecord];
}

/// An in-memory snapshot of monitors and their check records, treated as
/// immutable for the duration of a dashboard session.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub monitors: Vec<Monitor>,
    pub records: Vec<UptimeRecord>,
}

impl Dataset {
    pub fn new(monitors: Vec<Monitor>, records: Vec<UptimeRecord>) -> Self {
        Self { monitors, records }
    }
}

impl DataSource for Dataset {
    fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    fn records(&self) -> &[UptimeRecord] {
        &self.records
    }
}
