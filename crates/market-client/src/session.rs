//! Session store and notifier collaborator seams
//!
//! The dashboard never owns authentication: a bearer token and a
//! lightweight role descriptor live in an external session store (cookies
//! in the web layer). Both collaborators are consumed through traits so
//! tests and the web adapter can supply their own implementations.

use market_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// The one and only cookie name for the bearer token.
///
/// The backend's original clients read two conflicting keys; this
/// constant is deliberately the single source of truth.
pub const ADMIN_TOKEN_COOKIE: &str = "admin_token";

/// Cookie name for the JSON-encoded user-role descriptor
pub const ADMIN_USER_COOKIE: &str = "admin_user";

/// Options applied when persisting a session value
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Lifetime in days; `None` means a session cookie
    pub expires_days: Option<u32>,
    /// Mark the value as Secure
    pub secure: bool,
    /// `SameSite` attribute value
    pub same_site: Option<String>,
}

/// External session storage, keyed by name
pub trait SessionStore: Send + Sync {
    /// Read a stored value
    fn get(&self, name: &str) -> Option<String>;

    /// Persist a value with the given options
    fn set(&self, name: &str, value: &str, options: &SessionOptions);

    /// Remove a value
    fn remove(&self, name: &str);
}

/// Lightweight user-role descriptor stored alongside the token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRole {
    /// Display name
    pub name: String,
    /// Role discriminator (e.g. "admin", "staff")
    pub role: String,
}

/// Read the bearer token from a session store.
///
/// # Errors
///
/// Returns [`Error::Unauthenticated`] when no token is stored.
pub fn read_token(store: &dyn SessionStore) -> Result<String> {
    store
        .get(ADMIN_TOKEN_COOKIE)
        .filter(|token| !token.is_empty())
        .ok_or(Error::Unauthenticated)
}

/// Read the role descriptor from a session store.
///
/// Missing or malformed role JSON is treated as unauthenticated, never as
/// an error the caller has to handle separately.
#[must_use]
pub fn read_role(store: &dyn SessionStore) -> Option<UserRole> {
    let raw = store.get(ADMIN_USER_COOKIE)?;
    serde_json::from_str(&raw).ok()
}

/// In-memory session store for tests and per-request adapters
#[derive(Debug, Default)]
pub struct MemorySession {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySession {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, name: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(name).cloned())
    }

    fn set(&self, name: &str, value: &str, _options: &SessionOptions) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(name.to_string(), value.to_string());
        }
    }

    fn remove(&self, name: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(name);
        }
    }
}

/// Kind of toast surfaced to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    /// Operation succeeded
    Success,
    /// Operation failed
    Error,
    /// Neutral information
    Info,
}

/// Fire-and-forget notification surface
pub trait Notifier: Send + Sync {
    /// Surface a message; no return value is consumed
    fn notify(&self, kind: NotifyKind, message: &str);
}

/// Default notifier that routes toasts into the log stream
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NotifyKind, message: &str) {
        match kind {
            NotifyKind::Success | NotifyKind::Info => tracing::info!("{message}"),
            NotifyKind::Error => tracing::warn!("{message}"),
        }
    }
}
