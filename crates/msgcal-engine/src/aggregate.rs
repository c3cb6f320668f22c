use chrono::{NaiveDate, NaiveDateTime};
use msgcal_types::AggregateStatistics;
use std::collections::BTreeMap;

/// Per-day message counts for one data selection.
///
/// The table is rebuilt from scratch on every [`ingest`](Self::ingest); it is
/// never updated incrementally.
#[derive(Debug, Clone, Default)]
pub struct DayAggregator {
    buckets: BTreeMap<NaiveDate, u32>,
    statistics: AggregateStatistics,
}

impl DayAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all buckets with counts built from `timestamps`.
    pub fn ingest<I>(&mut self, timestamps: I)
    where
        I: IntoIterator<Item = NaiveDateTime>,
    {
        self.buckets.clear();

        let mut first_seen: Option<NaiveDateTime> = None;
        let mut last_seen: Option<NaiveDateTime> = None;
        let mut ingested = 0usize;

        for timestamp in timestamps {
            *self.buckets.entry(timestamp.date()).or_insert(0) += 1;

            first_seen = Some(first_seen.map_or(timestamp, |t| t.min(timestamp)));
            last_seen = Some(last_seen.map_or(timestamp, |t| t.max(timestamp)));
            ingested += 1;
        }

        self.statistics = compute_statistics(&self.buckets, first_seen, last_seen);

        tracing::debug!(
            timestamps = ingested,
            days = self.buckets.len(),
            max = self.statistics.max_count,
            "aggregated timestamps into day buckets"
        );
    }

    /// Messages on `date`; 0 for days never observed.
    pub fn count_on(&self, date: NaiveDate) -> u32 {
        self.buckets.get(&date).copied().unwrap_or(0)
    }

    pub fn statistics(&self) -> &AggregateStatistics {
        &self.statistics
    }

    /// Buckets in ascending date order.
    pub fn buckets(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.buckets.iter().map(|(date, count)| (*date, *count))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

fn compute_statistics(
    buckets: &BTreeMap<NaiveDate, u32>,
    first_seen: Option<NaiveDateTime>,
    last_seen: Option<NaiveDateTime>,
) -> AggregateStatistics {
    if buckets.is_empty() {
        return AggregateStatistics::default();
    }

    let mut values: Vec<u32> = buckets.values().copied().collect();
    values.sort_unstable();

    let total: u64 = values.iter().map(|&v| v as u64).sum();
    let len = values.len();
    let mid = len / 2;
    let median = if len % 2 == 0 {
        (values[mid - 1] as f64 + values[mid] as f64) / 2.0
    } else {
        values[mid] as f64
    };

    AggregateStatistics {
        max_count: values[len - 1],
        mean_count: total as f64 / len as f64,
        median_count: median,
        first_day: buckets.keys().next().copied(),
        last_day: buckets.keys().next_back().copied(),
        first_seen,
        last_seen,
        active_days: len,
        total_count: total,
    }
}
