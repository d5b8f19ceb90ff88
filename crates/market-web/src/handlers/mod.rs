//! Request handlers for the dashboard server

pub mod entities;
pub mod session;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}
