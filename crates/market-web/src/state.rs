//! Application state management

use market_client::ApiClient;
use market_core::{Config, Result};
use std::time::Duration;

/// Application state holding configuration and the backend client
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// API client for backend communication; cloned and given the
    /// request's bearer token per call
    pub api_client: ApiClient,
}

impl AppState {
    /// Create new application state
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let api_client = ApiClient::new(
            config.backend.base_url.clone(),
            Duration::from_secs(config.backend.request_timeout),
        )?;

        Ok(Self { config, api_client })
    }
}
