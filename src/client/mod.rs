//! Client layer: typed access to the upstream service through the gateway.
//!
//! [`CustomerApiClient`] owns transport details only: request construction,
//! bearer-token attachment, status and transport error mapping, and JSON
//! decoding into the domain wire model. Aggregation policy lives in the
//! service layer.

pub mod customer_api;

pub use customer_api::CustomerApiClient;
