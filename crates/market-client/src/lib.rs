//! REST API client and generic list management for the marketplace admin
//!
//! This crate owns everything that talks to the backend: the
//! envelope-normalizing [`ApiClient`], the pure client-side filter engine,
//! the allow-listed field diff used by updates, the session and notifier
//! collaborator traits, and the [`ListManager`] that composes them into the
//! one pattern every admin screen instantiates.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod client;
pub mod diff;
pub mod envelope;
pub mod filter;
pub mod manager;
pub mod session;

// Re-export the main entry points
pub use client::{ApiClient, ListQuery, LoginCredentials, LoginResponse};
pub use diff::diff_allowed;
pub use envelope::Envelope;
pub use filter::{FilterState, filter, matches};
pub use manager::{ListManager, ResourceConfig};
pub use session::{
    ADMIN_TOKEN_COOKIE, ADMIN_USER_COOKIE, MemorySession, Notifier, NotifyKind, SessionOptions,
    SessionStore, TracingNotifier, UserRole, read_role, read_token,
};
