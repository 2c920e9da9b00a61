//! Presentation-state layer: UI-technology-agnostic view models.
//!
//! These models hold the in-memory state a dashboard or history screen
//! renders from. They own no I/O: the service layer produces their input,
//! and the pure domain engines are re-applied on every interaction.

pub mod dashboard;
pub mod history;

pub use dashboard::DashboardModel;
pub use history::{HistoryModel, StatusTone};
