//! Service layer: read aggregation and profile provisioning.
//!
//! [`DashboardAggregator`] consolidates the three independent dashboard
//! reads into one result; [`ProfileProvisioner`] creates a profile when the
//! aggregate reports none and re-reads canonical state.

pub mod aggregator;
pub mod provisioner;

pub use aggregator::{DashboardAggregator, DashboardData};
pub use provisioner::ProfileProvisioner;
