use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Summary of a day-bucket table.
///
/// Mean and median are taken over observed days only. Days inside
/// `[first_day, last_day]` with no messages have no bucket and do not pull
/// the averages down.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateStatistics {
    /// Largest single-day count, 0 when nothing was ingested
    pub max_count: u32,
    pub mean_count: f64,
    pub median_count: f64,
    /// Earliest bucket key
    pub first_day: Option<NaiveDate>,
    /// Latest bucket key
    pub last_day: Option<NaiveDate>,
    /// Earliest untruncated timestamp seen
    pub first_seen: Option<NaiveDateTime>,
    /// Latest untruncated timestamp seen
    pub last_seen: Option<NaiveDateTime>,
    /// Number of distinct days with at least one message
    pub active_days: usize,
    pub total_count: u64,
}

impl AggregateStatistics {
    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.max_count == 0
    }
}
