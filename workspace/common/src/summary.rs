//! Summary statistics over prediction history.

use chrono::NaiveDateTime;
use std::collections::HashSet;

use crate::HistoryRecord;

/// Totals shown in the stats cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    pub count: usize,
    /// Sum of all predicted prices.
    pub total: f64,
    /// `total / count`, or `0` for an empty history.
    pub average: f64,
    /// Number of distinct source/destination pairs.
    pub distinct_routes: usize,
}

/// Single pass over `records`.
///
/// An empty history averages to `0` rather than `NaN` so the cards always
/// have something to show.
pub fn summarize(records: &[HistoryRecord]) -> Stats {
    let mut total = 0.0;
    let mut routes = HashSet::new();

    for record in records {
        total += record.price;
        routes.insert((record.source.as_str(), record.destination.as_str()));
    }

    let count = records.len();
    let average = if count == 0 { 0.0 } else { total / count as f64 };

    Stats {
        count,
        total,
        average,
        distinct_routes: routes.len(),
    }
}

/// Time of the most recent prediction.
pub fn latest_timestamp(records: &[HistoryRecord]) -> Option<NaiveDateTime> {
    records.iter().map(|r| r.timestamp).max()
}
