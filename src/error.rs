//! Error types for the client layer and the gateway, with HTTP status
//! mapping for the latter.
//!
//! [`ApiError`] is the failure type of every upstream read/write performed
//! by the client and service layers. [`ProxyError`] is the gateway's own
//! failure type; each variant maps to an HTTP status code and a structured
//! JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Structured JSON error response body.
///
/// All gateway error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 5001,
///     "message": "upstream unreachable: connection refused",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`ProxyError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Failure of an upstream read or write issued by the client layer.
///
/// An absent profile is not represented here: the profile read reclassifies
/// HTTP 404 as `Ok(None)` before an error can arise. Likewise a list response
/// that is not a JSON array is normalized to an empty vector, not reported.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, protocol).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("upstream returned {status}: {message}")]
    Status {
        /// HTTP status code the upstream answered with.
        status: StatusCode,
        /// Response body text, as far as it could be read.
        message: String,
    },

    /// A response body that must decode (profile reads) failed to decode.
    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The load was cancelled before its results could be surfaced.
    #[error("load cancelled")]
    Cancelled,

    /// The profile re-read after a successful upsert found no record.
    #[error("profile not available after creation")]
    ProfileUnavailable,
}

/// Gateway-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category         | HTTP Status               |
/// |-----------|------------------|---------------------------|
/// | 1000–1999 | Inbound request  | 400 Bad Request           |
/// | 3000–3999 | Server           | 500 Internal Server Error |
/// | 5000–5999 | Upstream relay   | 502 Bad Gateway           |
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The inbound request could not be buffered or rewritten.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The upstream target could not be reached or did not answer.
    #[error("upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    /// Internal gateway error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ProxyError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::Internal(_) => 3000,
            Self::UpstreamUnreachable(_) => 5001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamUnreachable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
