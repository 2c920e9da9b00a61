//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8080`).
    pub listen_addr: SocketAddr,

    /// Base URL of the upstream customer service.
    pub upstream_url: String,

    /// Prefix prepended to the forwarded path (the upstream's API prefix).
    pub upstream_api_prefix: String,

    /// Customer-facing prefix the proxy is mounted under.
    pub customer_route_prefix: String,

    /// Timeout in seconds for one outbound upstream request.
    pub upstream_timeout_secs: u64,

    /// Maximum number of inbound request body bytes the gateway buffers.
    pub body_limit_bytes: usize,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()?;

        let upstream_url =
            std::env::var("UPSTREAM_URL").unwrap_or_else(|_| "http://localhost:8082".to_string());

        let upstream_api_prefix =
            std::env::var("UPSTREAM_API_PREFIX").unwrap_or_else(|_| "/api".to_string());

        let customer_route_prefix =
            std::env::var("CUSTOMER_ROUTE_PREFIX").unwrap_or_else(|_| "/api/customer".to_string());

        let upstream_timeout_secs = parse_env("UPSTREAM_TIMEOUT_SECS", 30);
        let body_limit_bytes = parse_env("PROXY_BODY_LIMIT_BYTES", 1_048_576);

        Ok(Self {
            listen_addr,
            upstream_url,
            upstream_api_prefix,
            customer_route_prefix,
            upstream_timeout_secs,
            body_limit_bytes,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
