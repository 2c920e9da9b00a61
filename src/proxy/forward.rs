//! Request forwarding: path rewrite, header passthrough, verbatim relay.

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE, HOST, HeaderMap, HeaderValue};
use axum::response::Response;
use axum::routing::any;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::error::ProxyError;

/// Headers that describe the connection rather than the message; never
/// forwarded in either direction (RFC 9110 §7.6.1).
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Forwards requests under the customer-facing prefix to the upstream
/// service, rewriting the path to prepend the upstream API prefix and
/// preserving the remainder of path and query unchanged.
#[derive(Debug, Clone)]
pub struct UpstreamForwarder {
    http: reqwest::Client,
    upstream_url: String,
    api_prefix: String,
    body_limit: usize,
}

impl UpstreamForwarder {
    /// Creates a forwarder targeting `upstream_url` with the given rewrite
    /// prefix and inbound body size limit.
    ///
    /// The supplied client should have redirects disabled so upstream
    /// redirect responses are relayed rather than followed.
    #[must_use]
    pub fn new(
        http: reqwest::Client,
        upstream_url: impl Into<String>,
        api_prefix: impl Into<String>,
        body_limit: usize,
    ) -> Self {
        Self {
            http,
            upstream_url: upstream_url.into().trim_end_matches('/').to_string(),
            api_prefix: api_prefix.into(),
            body_limit,
        }
    }

    /// Maximum number of request body bytes the gateway will buffer.
    #[must_use]
    pub fn body_limit(&self) -> usize {
        self.body_limit
    }

    /// The upstream URL for a customer-relative path and query.
    #[must_use]
    pub fn rewrite_target(&self, path_and_query: &str) -> String {
        format!("{}{}{path_and_query}", self.upstream_url, self.api_prefix)
    }

    /// Forwards one buffered request and relays the upstream response
    /// verbatim (status, headers minus hop-by-hop, body).
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::UpstreamUnreachable`] when the upstream cannot
    /// be reached or its body cannot be read, and [`ProxyError::Internal`]
    /// when the relayed response cannot be assembled.
    pub async fn forward(
        &self,
        method: axum::http::Method,
        path_and_query: &str,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<Response, ProxyError> {
        let correlation_id = Uuid::new_v4();
        let target = self.rewrite_target(path_and_query);
        tracing::debug!(%correlation_id, method = %method, %target, "forwarding request");

        let upstream_response = self
            .http
            .request(method, &target)
            .headers(outbound_headers(headers))
            .body(body)
            .send()
            .await
            .map_err(|err| ProxyError::UpstreamUnreachable(err.to_string()))?;

        let status = upstream_response.status();
        let response_headers = upstream_response.headers().clone();
        let response_body = upstream_response
            .bytes()
            .await
            .map_err(|err| ProxyError::UpstreamUnreachable(err.to_string()))?;

        tracing::debug!(%correlation_id, status = %status, "relaying upstream response");

        let mut builder = Response::builder().status(status);
        for (name, value) in &response_headers {
            if is_hop_by_hop(name.as_str()) || name == CONTENT_LENGTH {
                continue;
            }
            builder = builder.header(name.clone(), value.clone());
        }
        builder
            .body(Body::from(response_body))
            .map_err(|err| ProxyError::Internal(err.to_string()))
    }
}

/// Builds the outbound header map: caller headers minus hop-by-hop headers,
/// `Host`, and `Content-Length`; `Authorization` passes through byte-for-byte
/// when present; `Content-Type` defaults to JSON when the caller sent none.
fn outbound_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut outbound = HeaderMap::new();
    for (name, value) in inbound {
        if is_hop_by_hop(name.as_str()) || name == HOST || name == CONTENT_LENGTH {
            continue;
        }
        outbound.append(name.clone(), value.clone());
    }
    if !outbound.contains_key(CONTENT_TYPE) {
        outbound.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    outbound
}

fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|hop| name.eq_ignore_ascii_case(hop))
}

/// Handler for every method and sub-path under the customer-facing prefix.
///
/// # Errors
///
/// Returns [`ProxyError::InvalidRequest`] when the inbound body exceeds the
/// configured limit, otherwise whatever [`UpstreamForwarder::forward`]
/// reports.
pub async fn forward_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    // Nesting has already stripped the customer-facing prefix; what is left
    // is the path and query to forward.
    let path_and_query = parts
        .uri
        .path_and_query()
        .map_or("/", |pq| pq.as_str())
        .to_string();

    let bytes = axum::body::to_bytes(body, state.forwarder.body_limit())
        .await
        .map_err(|err| ProxyError::InvalidRequest(err.to_string()))?;

    state
        .forwarder
        .forward(parts.method, &path_and_query, &parts.headers, bytes)
        .await
}

/// Proxy routes: every method on the prefix root and on any sub-path.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", any(forward_handler))
        .route("/{*path}", any(forward_handler))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    fn forwarder(upstream: &str) -> UpstreamForwarder {
        UpstreamForwarder::new(reqwest::Client::new(), upstream, "/api", 1024)
    }

    #[test]
    fn rewrite_prepends_the_api_prefix() {
        let fwd = forwarder("http://localhost:8082");
        assert_eq!(
            fwd.rewrite_target("/vehicles"),
            "http://localhost:8082/api/vehicles"
        );
    }

    #[test]
    fn rewrite_preserves_query_and_trims_trailing_slash() {
        let fwd = forwarder("http://localhost:8082/");
        assert_eq!(
            fwd.rewrite_target("/history?status=DONE&q=oil"),
            "http://localhost:8082/api/history?status=DONE&q=oil"
        );
    }

    #[test]
    fn authorization_passes_through_byte_for_byte() {
        let mut inbound = HeaderMap::new();
        let Ok(token) = HeaderValue::from_str("Bearer abc.def.ghi") else {
            panic!("header value should parse");
        };
        inbound.insert(AUTHORIZATION, token.clone());
        let outbound = outbound_headers(&inbound);
        assert_eq!(outbound.get(AUTHORIZATION), Some(&token));
    }

    #[test]
    fn missing_authorization_is_not_invented() {
        let outbound = outbound_headers(&HeaderMap::new());
        assert!(outbound.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn content_type_defaults_to_json() {
        let outbound = outbound_headers(&HeaderMap::new());
        assert_eq!(
            outbound.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn caller_content_type_wins_over_the_default() {
        let mut inbound = HeaderMap::new();
        inbound.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        let outbound = outbound_headers(&inbound);
        assert_eq!(
            outbound.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("text/plain")
        );
    }

    #[test]
    fn hop_by_hop_and_host_headers_are_dropped() {
        use axum::http::header::CONNECTION;

        let mut inbound = HeaderMap::new();
        inbound.insert(HOST, HeaderValue::from_static("gateway.local"));
        inbound.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        let outbound = outbound_headers(&inbound);
        assert!(outbound.get(HOST).is_none());
        assert!(outbound.get(CONNECTION).is_none());
    }
}
