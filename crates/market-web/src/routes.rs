//! Route definitions for the dashboard server

use crate::{auth, handlers, state::AppState};
use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;
use std::sync::Arc;

/// Build the complete dashboard router
pub fn build_routes(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route(
            "/:resource",
            get(handlers::entities::list).post(handlers::entities::create),
        )
        .route(
            "/:resource/:id",
            put(handlers::entities::update).delete(handlers::entities::remove),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            auth::require_session,
        ));

    Router::new()
        // Session management
        .route("/session/login", post(handlers::session::login))
        .route("/session/logout", post(handlers::session::logout))
        .route("/session/me", get(handlers::session::me))
        // Authenticated entity endpoints
        .nest("/api", api)
        // Health check
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
