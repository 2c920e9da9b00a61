//! Domain layer: wire model and pure engines.
//!
//! This module contains the typed records the upstream service exposes
//! (profile, vehicle, history) and the two side-effect-free engines the
//! presentation layer re-applies on every interaction: the history filter
//! and the recency sorter.

pub mod customer;
pub mod filter;
pub mod history;
pub mod recency;
pub mod vehicle;

pub use customer::{CustomerProfile, ProfileDraft};
pub use filter::{StatusSelector, filter_history};
pub use history::{HistoryItem, ServiceStatus, VehicleSummary};
pub use recency::{RECENT_LIMIT, sort_by_recency};
pub use vehicle::Vehicle;
