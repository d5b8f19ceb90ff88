//! Marketplace Admin Web Interface
//!
//! An axum server hosting the admin dashboard's JSON endpoints: proxied
//! entity lists with server-applied search/status filtering, mutation
//! passthrough, and session-cookie login against the backend API.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod auth;
pub mod error;
pub mod handlers;
pub mod resources;
pub mod routes;
pub mod server;
pub mod state;

// Re-export the main entry points
pub use server::build_app;
pub use state::AppState;
