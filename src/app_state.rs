//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::proxy::UpstreamForwarder;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Forwarder carrying the upstream target and outbound HTTP client.
    pub forwarder: Arc<UpstreamForwarder>,
}
