//! Customer profile wire model.
//!
//! The profile is owned by the upstream customer service. This layer only
//! reads it (and triggers creation through the upsert endpoint); it is never
//! mutated locally.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The authenticated customer's own identity and contact record.
///
/// Every field may be absent on the wire; consumers must handle the missing
/// case explicitly rather than assuming empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    /// Upstream record identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Identity reference of the authenticated user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contact email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Request body for the profile upsert (`PUT /customers/me`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    /// Display name to store.
    pub name: String,
    /// Contact email address to store.
    pub email: String,
    /// Contact phone number to store.
    pub phone: String,
}

impl ProfileDraft {
    /// Seed values submitted by the dashboard's "create my profile" action.
    ///
    /// The upstream service enriches the record (assigns identity fields),
    /// so these are only a starting point the customer edits afterwards.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: "New User".to_string(),
            email: "you@example.com".to_string(),
            phone: "071-0000000".to_string(),
        }
    }
}
