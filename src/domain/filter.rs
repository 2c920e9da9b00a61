//! Pure predicate-based filtering of history records.
//!
//! Re-applied by the presentation layer on every query or selector change;
//! never mutates its input and never re-orders surviving records.

use serde::{Deserialize, Serialize};

use super::history::{HistoryItem, ServiceStatus};

/// Status dimension of the history filter: everything, or exactly one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusSelector {
    /// Bypass the status check entirely.
    All,
    /// Keep only records whose status equals the given one exactly.
    Only(ServiceStatus),
}

impl StatusSelector {
    /// The five selector states the history view offers, in display order.
    pub const OPTIONS: [Self; 5] = [
        Self::All,
        Self::Only(ServiceStatus::Open),
        Self::Only(ServiceStatus::InProgress),
        Self::Only(ServiceStatus::Done),
        Self::Only(ServiceStatus::Cancelled),
    ];

    /// Whether a record with the given status passes this selector.
    ///
    /// Equality is exact: an [`ServiceStatus::Unrecognized`] record only
    /// matches a selector carrying the identical raw string, never
    /// [`ServiceStatus::Open`].
    #[must_use]
    pub fn matches(&self, status: &ServiceStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Filters `records` by free-text query and status selector.
///
/// The query is trimmed and lowercased once; an empty query matches every
/// record. A non-empty query matches when `title` or, if the denormalized
/// vehicle summary is present, its plate number, make, or model contains the
/// query as a case-insensitive substring. A record is kept only when both the
/// text and status conditions hold. Relative input order is preserved.
#[must_use]
pub fn filter_history(
    records: &[HistoryItem],
    query: &str,
    selector: &StatusSelector,
) -> Vec<HistoryItem> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .filter(|record| matches_text(record, &needle) && selector.matches(&record.status))
        .cloned()
        .collect()
}

fn matches_text(record: &HistoryItem, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if record.title.to_lowercase().contains(needle) {
        return true;
    }
    record.vehicle.as_ref().is_some_and(|vehicle| {
        contains(vehicle.plate_no.as_deref(), needle)
            || contains(vehicle.make.as_deref(), needle)
            || contains(vehicle.model.as_deref(), needle)
    })
}

fn contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}
