//! Reqwest-backed client for the customer-scoped upstream endpoints.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{CustomerProfile, HistoryItem, ProfileDraft, Vehicle};
use crate::error::ApiError;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the four customer-scoped operations exposed through the
/// gateway: profile read, profile upsert, vehicle list, history list.
///
/// Authorization-token acquisition is out of scope; a token supplied via
/// [`CustomerApiClient::bearer_token`] is attached to every request as
/// `Authorization: Bearer <token>` and otherwise no authorization header is
/// sent.
#[derive(Debug, Clone)]
pub struct CustomerApiClient {
    http: Client,
    base_url: String,
    bearer: Option<String>,
}

impl CustomerApiClient {
    /// Builds a client for the given base URL (the gateway's customer-facing
    /// prefix, e.g. `http://localhost:8080/api/customer`) with the default
    /// request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying reqwest client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Builds a client with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying reqwest client cannot be
    /// constructed.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            bearer: None,
        })
    }

    /// Attaches a bearer token sent with every subsequent request.
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Reads the authenticated customer's own profile.
    ///
    /// HTTP 404 is the expected shape for a first-time user and is
    /// reclassified as `Ok(None)`; it never surfaces as a failure.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, any non-success status
    /// other than 404, or an undecodable profile body.
    pub async fn fetch_profile(&self) -> Result<Option<CustomerProfile>, ApiError> {
        let response = self.request(Method::GET, "/customers/me").send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = ensure_success(response).await?;
        let value: Value = response.json().await?;
        let profile = serde_json::from_value(value).map_err(ApiError::Decode)?;
        Ok(Some(profile))
    }

    /// Upserts the authenticated customer's own profile.
    ///
    /// The upstream echoes the stored record, but that body is deliberately
    /// discarded: canonical state comes from a follow-up
    /// [`CustomerApiClient::fetch_profile`].
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-success status.
    pub async fn upsert_profile(&self, draft: &ProfileDraft) -> Result<(), ApiError> {
        let response = self
            .request(Method::PUT, "/customers/me")
            .json(draft)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    /// Lists the customer's vehicles.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-success status, or
    /// an array body whose elements cannot be decoded. A body that is valid
    /// JSON but not an array normalizes to an empty vector.
    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, ApiError> {
        self.fetch_list("/vehicles").await
    }

    /// Lists the customer's service history.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-success status, or
    /// an array body whose elements cannot be decoded. A body that is valid
    /// JSON but not an array normalizes to an empty vector.
    pub async fn list_history(&self) -> Result<Vec<HistoryItem>, ApiError> {
        self.fetch_list("/history").await
    }

    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let response = self.request(Method::GET, path).send().await?;
        let response = ensure_success(response).await?;
        let value: Value = response.json().await?;
        match value {
            Value::Array(_) => serde_json::from_value(value).map_err(ApiError::Decode),
            // Defensive normalization: a non-array body is an empty list,
            // not an error.
            _ => Ok(Vec::new()),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{path}", self.base_url));
        if let Some(token) = &self.bearer {
            builder = builder.bearer_auth(token);
        }
        builder
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, message })
}
