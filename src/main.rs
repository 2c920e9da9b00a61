//! autocare-portal gateway entry point.
//!
//! Starts the Axum HTTP server that forwards customer-scoped requests to
//! the upstream service.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use autocare_portal::api;
use autocare_portal::app_state::AppState;
use autocare_portal::config::GatewayConfig;
use autocare_portal::proxy::UpstreamForwarder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env().context("invalid LISTEN_ADDR")?;
    tracing::info!(
        addr = %config.listen_addr,
        upstream = %config.upstream_url,
        "starting autocare-portal gateway"
    );

    // Outbound client: no redirect following, so upstream redirects are
    // relayed to the caller rather than resolved here.
    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.upstream_timeout_secs))
        .build()
        .context("building outbound http client")?;

    let forwarder = Arc::new(UpstreamForwarder::new(
        http,
        config.upstream_url.clone(),
        config.upstream_api_prefix.clone(),
        config.body_limit_bytes,
    ));

    let app_state = AppState { forwarder };

    // Build router
    let app = api::build_router(&config.customer_route_prefix)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.upstream_timeout_secs.saturating_add(5),
        )))
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .context("binding listen address")?;
    tracing::info!(addr = %config.listen_addr, "gateway listening");

    axum::serve(listener, app).await.context("serving")?;

    Ok(())
}
