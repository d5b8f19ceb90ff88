//! HTTP client for the marketplace backend API
//!
//! One authenticated boundary for every screen: list/get under
//! `{base}/admin/<resource>`, mutations with a mandatory bearer token, and
//! login against the public endpoint. All response bodies pass through the
//! envelope normalizer so the backend's shape inconsistencies stop here.

use crate::envelope;
use crate::session::UserRole;
use market_core::{Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;

/// API client for the marketplace backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

/// Query parameters accepted by list endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// Page number (1-based)
    pub page: Option<u32>,

    /// Number of items per page
    pub limit: Option<u32>,
}

/// Credentials posted to the login endpoint (form-urlencoded)
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Payload returned by a successful login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub token: String,
    /// Role descriptor for the signed-in user
    pub user: UserRole,
}

impl ApiClient {
    /// Create a new API client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the underlying HTTP client cannot
    /// be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Configuration {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: None,
        })
    }

    /// Attach a bearer token for authenticated requests
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The bearer token currently attached, if any
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn require_token(&self) -> Result<&str> {
        self.token.as_deref().ok_or(Error::Unauthenticated)
    }

    fn admin_url(&self, resource: &str) -> String {
        format!("{}/admin/{resource}", self.base_url)
    }

    fn entity_url(&self, resource: &str, id: &str) -> String {
        format!(
            "{}/admin/{resource}/{}",
            self.base_url,
            urlencoding::encode(id)
        )
    }

    /// Fetch an entity collection.
    ///
    /// The token is attached when present but is not required for reads.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server reports a
    /// failure, or the body does not match any known envelope shape.
    pub async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &ListQuery,
    ) -> Result<Vec<T>> {
        let mut url = self.admin_url(resource);

        let mut query_params = Vec::new();
        if let Some(page) = query.page {
            query_params.push(format!("page={page}"));
        }
        if let Some(limit) = query.limit {
            query_params.push(format!("limit={limit}"));
        }
        if !query_params.is_empty() {
            url.push('?');
            url.push_str(&query_params.join("&"));
        }

        debug!(resource, %url, "fetching collection");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let body = Self::execute(request, resource).await?;
        envelope::into_data(body)
    }

    /// Fetch a single entity by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a
    /// malformed envelope.
    pub async fn get<T: DeserializeOwned>(&self, resource: &str, id: &str) -> Result<T> {
        let mut request = self.client.get(self.entity_url(resource, id));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let body = Self::execute(request, resource).await?;
        envelope::into_data(body)
    }

    /// Create an entity. Requires a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unauthenticated`] without a token, otherwise the
    /// usual transport/API/envelope errors.
    pub async fn create<T: DeserializeOwned>(
        &self,
        resource: &str,
        payload: &impl Serialize,
    ) -> Result<T> {
        let token = self.require_token()?;

        debug!(resource, "creating entity");

        let request = self
            .client
            .post(self.admin_url(resource))
            .bearer_auth(token)
            .json(payload);

        let body = Self::execute(request, resource).await?;
        envelope::into_data(body)
    }

    /// Update an entity with a partial body (the computed field diff).
    ///
    /// Callers short-circuit empty diffs before getting here; an empty
    /// change set is rejected as a programming error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unauthenticated`] without a token, otherwise the
    /// usual transport/API/envelope errors.
    pub async fn update<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: &str,
        changes: &Map<String, Value>,
    ) -> Result<T> {
        let token = self.require_token()?;

        if changes.is_empty() {
            return Err(Error::Other(
                "refusing to PUT an empty change set".to_string(),
            ));
        }

        debug!(resource, id, fields = changes.len(), "updating entity");

        let request = self
            .client
            .put(self.entity_url(resource, id))
            .bearer_auth(token)
            .json(changes);

        let body = Self::execute(request, resource).await?;
        envelope::into_data(body)
    }

    /// Delete an entity by identifier. Requires a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unauthenticated`] without a token, otherwise the
    /// usual transport/API errors.
    pub async fn delete(&self, resource: &str, id: &str) -> Result<()> {
        let token = self.require_token()?;

        debug!(resource, id, "deleting entity");

        let response = self
            .client
            .delete(self.entity_url(resource, id))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| Error::Http(format!("delete {resource}: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(Self::api_error(status.as_u16(), response.text().await.ok()))
    }

    /// Sign in against the public login endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the response
    /// cannot be parsed.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse> {
        let url = format!("{}/public/login", self.base_url);

        let request = self.client.post(&url).form(credentials);
        let body = Self::execute(request, "login").await?;
        envelope::into_data(body)
    }

    async fn execute(request: reqwest::RequestBuilder, context: &str) -> Result<Value> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(format!("{context}: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("{context}: failed to read body: {e}")))?;

        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), Some(text)));
        }

        serde_json::from_str(&text)
            .map_err(|e| Error::Envelope(format!("{context}: body is not JSON: {e}")))
    }

    /// Build an API error, preferring the server's own message when the
    /// failure body carries one.
    fn api_error(status: u16, body: Option<String>) -> Error {
        let message = body
            .as_deref()
            .and_then(|text| serde_json::from_str::<Value>(text).ok())
            .as_ref()
            .and_then(|value| value.get("message"))
            .and_then(Value::as_str)
            .map_or_else(|| format!("API returned error: {status}"), ToString::to_string);

        Error::Api { status, message }
    }
}
