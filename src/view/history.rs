//! Full-history view state: search, status selector, result count.

use crate::domain::{HistoryItem, ServiceStatus, StatusSelector, filter_history, sort_by_recency};

/// Visual treatment for a status badge.
///
/// An unrecognized status gets its own [`StatusTone::Unknown`] treatment
/// rather than borrowing [`ServiceStatus::Open`]'s, so upstream data-quality
/// problems stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Recorded, not yet started.
    Info,
    /// Work underway.
    Active,
    /// Finished.
    Success,
    /// Cancelled.
    Danger,
    /// Status outside the recognized vocabulary.
    Unknown,
}

impl StatusTone {
    /// Maps a status to its visual treatment.
    #[must_use]
    pub fn for_status(status: &ServiceStatus) -> Self {
        match status {
            ServiceStatus::Open => Self::Info,
            ServiceStatus::InProgress => Self::Active,
            ServiceStatus::Done => Self::Success,
            ServiceStatus::Cancelled => Self::Danger,
            ServiceStatus::Unrecognized(_) => Self::Unknown,
        }
    }
}

/// State behind the searchable full-history screen.
///
/// Records are sorted by recency once at construction; the filter is
/// re-applied over that ordering on every query or selector change and
/// never re-sorts.
#[derive(Debug, Clone)]
pub struct HistoryModel {
    records: Vec<HistoryItem>,
    query: String,
    selector: StatusSelector,
}

impl HistoryModel {
    /// Builds the history state from freshly loaded records.
    #[must_use]
    pub fn from_records(records: &[HistoryItem]) -> Self {
        Self {
            records: sort_by_recency(records),
            query: String::new(),
            selector: StatusSelector::All,
        }
    }

    /// The full record set, newest first.
    #[must_use]
    pub fn records(&self) -> &[HistoryItem] {
        &self.records
    }

    /// The current free-text query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The current status selector.
    #[must_use]
    pub fn selector(&self) -> &StatusSelector {
        &self.selector
    }

    /// Updates the free-text query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Updates the status selector.
    pub fn set_selector(&mut self, selector: StatusSelector) {
        self.selector = selector;
    }

    /// The records currently visible under the query and selector,
    /// preserving the recency ordering.
    #[must_use]
    pub fn visible(&self) -> Vec<HistoryItem> {
        filter_history(&self.records, &self.query, &self.selector)
    }

    /// Number of records currently visible.
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.visible().len()
    }
}
