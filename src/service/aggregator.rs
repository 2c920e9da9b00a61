//! Concurrent aggregation of the three dashboard reads.

use std::sync::Arc;

use futures_util::future;
use tokio_util::sync::CancellationToken;

use crate::client::CustomerApiClient;
use crate::domain::{CustomerProfile, HistoryItem, Vehicle};
use crate::error::ApiError;

/// Consolidated result of one dashboard load.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    /// The customer's profile, or `None` for a first-time user.
    pub profile: Option<CustomerProfile>,
    /// The customer's vehicles; empty when the upstream has none.
    pub vehicles: Vec<Vehicle>,
    /// The customer's full service history; empty when the upstream has none.
    pub history: Vec<HistoryItem>,
}

/// Orchestrates the three independent dashboard reads.
///
/// Each load produces its own independent result set: there is no
/// cross-request cache and no shared mutable state.
#[derive(Debug, Clone)]
pub struct DashboardAggregator {
    api: Arc<CustomerApiClient>,
}

impl DashboardAggregator {
    /// Creates a new aggregator over the given client.
    #[must_use]
    pub fn new(api: Arc<CustomerApiClient>) -> Self {
        Self { api }
    }

    /// Loads profile, vehicles, and history concurrently and reconciles the
    /// outcome into one [`DashboardData`].
    ///
    /// The three reads are dispatched without waiting for each other and
    /// joined at a single suspension point. A not-found profile is a valid
    /// empty state (`profile = None`), never a failure; vehicles and history
    /// still populate from their own reads. The first failing read fails the
    /// whole aggregate.
    ///
    /// The cancellation token is honored at the suspension point and checked
    /// again before results are handed back, so a consumer torn down
    /// mid-load never observes a late completion.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] among the three reads, or
    /// [`ApiError::Cancelled`] when `cancel` fires first.
    pub async fn load(&self, cancel: &CancellationToken) -> Result<DashboardData, ApiError> {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        let reads = future::try_join3(
            self.api.fetch_profile(),
            self.api.list_vehicles(),
            self.api.list_history(),
        );

        let (profile, vehicles, history) = tokio::select! {
            () = cancel.cancelled() => return Err(ApiError::Cancelled),
            joined = reads => joined?,
        };

        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        tracing::debug!(
            has_profile = profile.is_some(),
            vehicles = vehicles.len(),
            history = history.len(),
            "dashboard load complete"
        );

        Ok(DashboardData {
            profile,
            vehicles,
            history,
        })
    }
}
