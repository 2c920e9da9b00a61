//! Gateway proxy: forwards customer-scoped requests to the upstream
//! service.
//!
//! The proxy rewrites the customer-facing path to the upstream's API prefix,
//! passes the caller's `Authorization` header through byte-for-byte, defaults
//! the outgoing `Content-Type` to JSON, and relays upstream status codes and
//! bodies verbatim. No retries, no caching, no body transformation.

pub mod forward;

pub use forward::{UpstreamForwarder, routes};
