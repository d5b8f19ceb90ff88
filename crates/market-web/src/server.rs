//! Web server assembly

use crate::{routes::build_routes, state::AppState};
use axum::Router;
use market_core::{Config, Result};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the complete web application with all routes and state
///
/// # Errors
///
/// Returns an error if the backend client cannot be constructed.
pub fn build_app(config: Config) -> Result<Router> {
    let state = Arc::new(AppState::new(config)?);

    Ok(build_routes(state).layer(TraceLayer::new_for_http()))
}
