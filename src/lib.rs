//! # autocare-portal
//!
//! Customer dashboard data layer and API gateway for the AutoCare
//! vehicle-service platform.
//!
//! The library half is the client-side aggregation and presentation-state
//! layer: it concurrently retrieves the customer's profile, vehicles, and
//! service history through the gateway, reconciles an absent profile into a
//! benign empty state, offers a provisioning path for first-time users, and
//! applies a deterministic sort/filter engine over history records. The
//! binary half is the gateway itself: an Axum server that forwards
//! customer-scoped requests to the upstream service of record.
//!
//! ## Architecture
//!
//! ```text
//! Dashboard / History UI (any technology)
//!     │
//!     ├── View models (view/)
//!     ├── DashboardAggregator, ProfileProvisioner (service/)
//!     ├── CustomerApiClient (client/)
//!     │
//!     ▼
//! Gateway (api/, proxy/) ── path rewrite + header passthrough ──▶ Upstream service
//! ```

pub mod api;
pub mod app_state;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod proxy;
pub mod service;
pub mod view;
