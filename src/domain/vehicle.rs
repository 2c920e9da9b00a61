//! Vehicle wire model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A vehicle owned by a customer. Read-only from this layer; fetched fresh
/// on each dashboard load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Upstream record identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Identity reference of the owning customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_user_id: Option<String>,

    /// Manufacturer (e.g. `"Toyota"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    /// Model name (e.g. `"Aqua"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Registration plate number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate_no: Option<String>,

    /// Year of manufacture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_upstream_shape() {
        let json = r#"{"id":"v-1","customerUserId":"u-1","make":"Toyota","model":"Aqua","plateNo":"CAB-1234","year":2018}"#;
        let Ok(vehicle) = serde_json::from_str::<Vehicle>(json) else {
            panic!("vehicle should deserialize");
        };
        assert_eq!(vehicle.plate_no.as_deref(), Some("CAB-1234"));
        assert_eq!(vehicle.year, Some(2018));
    }

    #[test]
    fn year_may_be_absent() {
        let Ok(vehicle) = serde_json::from_str::<Vehicle>(r#"{"id":"v-2"}"#) else {
            panic!("vehicle should deserialize");
        };
        assert!(vehicle.year.is_none());
    }
}
