//! Gateway-owned API layer: system endpoints and router composition.
//!
//! Everything else the gateway serves is the proxied upstream surface,
//! mounted under the configured customer-facing prefix.

pub mod system;

use axum::Router;

use crate::app_state::AppState;
use crate::proxy;

/// Builds the complete gateway router: system endpoints at the root plus
/// the forwarding routes nested under `customer_route_prefix`.
///
/// # Panics
///
/// Panics at startup when `customer_route_prefix` is not a valid,
/// non-empty route prefix (propagated from `Router::nest`).
pub fn build_router(customer_route_prefix: &str) -> Router<AppState> {
    Router::new()
        .merge(system::routes())
        .nest(customer_route_prefix, proxy::routes())
}
