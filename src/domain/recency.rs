//! Ordering of history records by completion time.

use super::history::HistoryItem;

/// How many records the dashboard's "recent history" panel shows.
pub const RECENT_LIMIT: usize = 5;

/// Returns a new vector of `records` ordered by `completedAt`, descending.
///
/// Comparison is lexicographic over the raw ISO-8601 string. This is valid
/// only because all upstream timestamps share the same fixed-width UTC
/// format; it is not a general-purpose date comparator, and it keeps the
/// ordering wire-compatible with the upstream service's own sort. Records
/// with no `completedAt` compare as the empty string and therefore sort
/// last. Ties preserve input order (stable sort).
#[must_use]
pub fn sort_by_recency(records: &[HistoryItem]) -> Vec<HistoryItem> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| completion_key(b).cmp(completion_key(a)));
    sorted
}

fn completion_key(record: &HistoryItem) -> &str {
    record.completed_at.as_deref().unwrap_or("")
}
