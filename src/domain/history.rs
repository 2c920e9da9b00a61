//! Service-history wire model and the status enumeration.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle status of a service-history record.
///
/// The wire representation is an open string: the four enumerated values are
/// the recognized vocabulary, and anything else is carried verbatim in
/// [`ServiceStatus::Unrecognized`] so that rendering and filtering can never
/// silently conflate an unknown value with [`ServiceStatus::Open`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceStatus {
    /// Work has been recorded but not started.
    Open,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
    /// Work was cancelled.
    Cancelled,
    /// A wire value outside the recognized vocabulary, kept verbatim.
    Unrecognized(String),
}

impl ServiceStatus {
    /// The recognized statuses, in the order the status selector offers them.
    pub const RECOGNIZED: [Self; 4] = [Self::Open, Self::InProgress, Self::Done, Self::Cancelled];

    /// Returns the wire string for this status.
    #[must_use]
    pub fn as_wire(&self) -> &str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
            Self::Cancelled => "CANCELLED",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Human-facing label: the wire string with underscores replaced by
    /// spaces (`IN_PROGRESS` renders as `IN PROGRESS`).
    #[must_use]
    pub fn display_label(&self) -> String {
        self.as_wire().replace('_', " ")
    }
}

impl From<String> for ServiceStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "OPEN" => Self::Open,
            "IN_PROGRESS" => Self::InProgress,
            "DONE" => Self::Done,
            "CANCELLED" => Self::Cancelled,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<ServiceStatus> for String {
    fn from(status: ServiceStatus) -> Self {
        match status {
            ServiceStatus::Unrecognized(raw) => raw,
            recognized => recognized.as_wire().to_string(),
        }
    }
}

impl Default for ServiceStatus {
    /// A record missing its status entirely is treated as an unrecognized
    /// empty value, not as [`ServiceStatus::Open`].
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

/// Denormalized vehicle summary the upstream service attaches to a history
/// record, so the client never joins locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummary {
    /// Registration plate number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate_no: Option<String>,
    /// Manufacturer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    /// Model name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// One service event in the customer's history ledger.
///
/// The aggregation layer tolerates invariant violations on input (unknown
/// status strings, missing fields) and preserves each record verbatim in any
/// view it emits, aside from ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    /// Upstream record identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Reference to the serviced vehicle; may be absent or unresolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,

    /// Free-text description of the work.
    #[serde(default)]
    pub title: String,

    /// Lifecycle status. Open string on the wire.
    #[serde(default)]
    #[schema(value_type = String)]
    pub status: ServiceStatus,

    /// ISO-8601 completion instant; absent means "not yet completed".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,

    /// Billed amount; absent means "unknown / not billed".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,

    /// Denormalized vehicle summary supplied by the upstream service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleSummary>,
}
