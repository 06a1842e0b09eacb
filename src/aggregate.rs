//! Daily Engagement Aggregation
//!
//! Collapses the normalized record set into one row per (calendar date,
//! handle) with the mean likes and shares for that group, truncated to
//! integers. The resulting table is immutable: it is built once at startup
//! and shared read-only for the lifetime of the process.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dataset::TweetRecord;

/// One row of the aggregated table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngagementRow {
    /// Calendar date, no time-of-day or timezone
    pub date: NaiveDate,
    /// Lowercased account handle
    pub handle: String,
    /// Mean like count for the day, truncated toward zero
    pub mean_likes: i64,
    /// Mean share count for the day, truncated toward zero
    pub mean_shares: i64,
}

/// The aggregated engagement table
///
/// Rows are ordered by (date, handle) ascending, so filtering by a single
/// handle always yields a chronological series. The distinct handle list is
/// computed once here and never re-derived per request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngagementTable {
    rows: Vec<EngagementRow>,
    handles: Vec<String>,
}

/// Per-group running sums used while folding records
#[derive(Debug, Default)]
struct GroupSums {
    likes: i64,
    shares: i64,
    count: i64,
}

impl EngagementTable {
    /// Build the table from normalized records
    ///
    /// An empty record set produces an empty table, not an error.
    pub fn from_records(records: Vec<TweetRecord>) -> Self {
        let mut groups: BTreeMap<(NaiveDate, String), GroupSums> = BTreeMap::new();

        for record in records {
            let sums = groups
                .entry((record.date(), record.handle))
                .or_default();
            sums.likes += record.likes;
            sums.shares += record.shares;
            sums.count += 1;
        }

        let rows: Vec<EngagementRow> = groups
            .into_iter()
            .map(|((date, handle), sums)| EngagementRow {
                date,
                handle,
                mean_likes: truncated_mean(sums.likes, sums.count),
                mean_shares: truncated_mean(sums.shares, sums.count),
            })
            .collect();

        let mut handles: Vec<String> = rows.iter().map(|r| r.handle.clone()).collect();
        handles.sort();
        handles.dedup();

        Self { rows, handles }
    }

    /// All aggregated rows, ordered by (date, handle)
    pub fn rows(&self) -> &[EngagementRow] {
        &self.rows
    }

    /// Sorted distinct handles present in the table
    pub fn handles(&self) -> &[String] {
        &self.handles
    }

    /// Whether the table contains a handle
    pub fn contains_handle(&self, handle: &str) -> bool {
        self.handles.binary_search_by(|h| h.as_str().cmp(handle)).is_ok()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Arithmetic mean truncated toward zero (cast-to-int semantics, not
/// rounding). For non-negative sums this equals `floor(sum / count)`.
fn truncated_mean(sum: i64, count: i64) -> i64 {
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).trunc() as i64
}
