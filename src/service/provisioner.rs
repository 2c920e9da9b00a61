//! Profile creation for first-time users.

use std::sync::Arc;

use crate::client::CustomerApiClient;
use crate::domain::{CustomerProfile, ProfileDraft};
use crate::error::ApiError;

/// Creates the customer's profile when the dashboard load found none.
#[derive(Debug, Clone)]
pub struct ProfileProvisioner {
    api: Arc<CustomerApiClient>,
}

impl ProfileProvisioner {
    /// Creates a new provisioner over the given client.
    #[must_use]
    pub fn new(api: Arc<CustomerApiClient>) -> Self {
        Self { api }
    }

    /// Upserts the caller's own profile, then performs a fresh read of the
    /// same resource and returns that canonical, server-enriched record.
    /// The write's echoed body is never trusted.
    ///
    /// The operation is not idempotency-keyed: two concurrent invocations
    /// for the same user race at the upstream service, which is relied on to
    /// enforce at-most-one-profile-per-user.
    ///
    /// # Errors
    ///
    /// Returns a single [`ApiError`] when either the write or the follow-up
    /// read fails; no retry is attempted. [`ApiError::ProfileUnavailable`]
    /// means the write was acknowledged but the re-read found no record.
    pub async fn create(&self, draft: &ProfileDraft) -> Result<CustomerProfile, ApiError> {
        self.api.upsert_profile(draft).await?;
        match self.api.fetch_profile().await? {
            Some(profile) => {
                tracing::info!(user_id = ?profile.user_id, "profile provisioned");
                Ok(profile)
            }
            None => Err(ApiError::ProfileUnavailable),
        }
    }
}
