//! Dashboard view state: profile, vehicles, recent history.

use crate::domain::{CustomerProfile, HistoryItem, RECENT_LIMIT, Vehicle, sort_by_recency};
use crate::service::DashboardData;

/// State behind the dashboard screen.
///
/// Built once per load from [`DashboardData`]; the provisioning flag and the
/// created profile fold back in through the mutators as the user acts.
#[derive(Debug, Clone)]
pub struct DashboardModel {
    profile: Option<CustomerProfile>,
    vehicles: Vec<Vehicle>,
    recent: Vec<HistoryItem>,
    provisioning: bool,
}

impl DashboardModel {
    /// Builds the dashboard state from one consolidated load result.
    ///
    /// Recent history is the top [`RECENT_LIMIT`] records by recency.
    #[must_use]
    pub fn from_data(data: DashboardData) -> Self {
        let recent = sort_by_recency(&data.history)
            .into_iter()
            .take(RECENT_LIMIT)
            .collect();
        Self {
            profile: data.profile,
            vehicles: data.vehicles,
            recent,
            provisioning: false,
        }
    }

    /// The customer's profile, if one exists.
    #[must_use]
    pub fn profile(&self) -> Option<&CustomerProfile> {
        self.profile.as_ref()
    }

    /// The customer's vehicles.
    #[must_use]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// The most recent history records, newest first.
    #[must_use]
    pub fn recent(&self) -> &[HistoryItem] {
        &self.recent
    }

    /// Whether the screen should offer the profile-creation action.
    #[must_use]
    pub fn needs_profile(&self) -> bool {
        self.profile.is_none()
    }

    /// Whether a provisioning call is in flight.
    #[must_use]
    pub fn is_provisioning(&self) -> bool {
        self.provisioning
    }

    /// Marks a provisioning call as started. Returns `false` (and changes
    /// nothing) when one is already in flight or a profile already exists,
    /// so the action cannot be double-submitted.
    pub fn begin_provisioning(&mut self) -> bool {
        if self.provisioning || self.profile.is_some() {
            return false;
        }
        self.provisioning = true;
        true
    }

    /// Clears the in-flight flag after a failed provisioning call.
    pub fn provisioning_failed(&mut self) {
        self.provisioning = false;
    }

    /// Folds the canonical created profile back into the dashboard state.
    pub fn apply_created_profile(&mut self, profile: CustomerProfile) {
        self.profile = Some(profile);
        self.provisioning = false;
    }
}
