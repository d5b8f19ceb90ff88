//! Session-cookie authentication for dashboard API routes
//!
//! The middleware reads the bearer token from the configured session
//! cookie and places it in request extensions; handlers clone the shared
//! API client with that token per request. Health and session routes are
//! mounted outside this layer.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use axum::middleware::Next;
use axum::response::Response;
use market_client::{
    ADMIN_TOKEN_COOKIE, ADMIN_USER_COOKIE, SessionOptions, SessionStore, read_token,
};
use market_core::config::SessionConfig;
use std::sync::Arc;
use tracing::debug;

/// Bearer token extracted from the session cookie
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

/// Read-only [`SessionStore`] view over one request's cookies.
///
/// The canonical store keys are translated to the configured cookie
/// names. Writes travel as `Set-Cookie` response headers, never through
/// the store, so `set` and `remove` are no-ops.
#[derive(Debug)]
pub struct CookieSession<'a> {
    headers: &'a HeaderMap,
    session: &'a SessionConfig,
}

impl<'a> CookieSession<'a> {
    /// Wrap one request's headers
    #[must_use]
    pub const fn new(headers: &'a HeaderMap, session: &'a SessionConfig) -> Self {
        Self { headers, session }
    }
}

impl SessionStore for CookieSession<'_> {
    fn get(&self, name: &str) -> Option<String> {
        let cookie = match name {
            ADMIN_TOKEN_COOKIE => self.session.token_cookie.as_str(),
            ADMIN_USER_COOKIE => self.session.user_cookie.as_str(),
            other => other,
        };
        cookie_value(self.headers, cookie)
    }

    fn set(&self, _name: &str, _value: &str, _options: &SessionOptions) {}

    fn remove(&self, _name: &str) {}
}

/// Middleware requiring a session cookie on every request it wraps
///
/// # Errors
///
/// Responds 401 when the cookie is absent or empty.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = read_token(&CookieSession::new(
        request.headers(),
        &state.config.session,
    ))?;

    debug!("session cookie accepted");
    request.extensions_mut().insert(SessionToken(token));

    Ok(next.run(request).await)
}

/// Read one cookie value from the request headers.
///
/// Values are percent-decoded; a value that fails to decode is returned
/// raw rather than dropped.
#[must_use]
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let header = headers.get(COOKIE)?.to_str().ok()?;

    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name {
            return None;
        }
        Some(
            urlencoding::decode(value)
                .map_or_else(|_| value.to_string(), |decoded| decoded.into_owned()),
        )
    })
}

/// Build a Set-Cookie header value for a session value.
///
/// `max_age_days` of `None` produces a session cookie; `Some(0)` clears
/// the cookie immediately (used by logout).
#[must_use]
pub fn build_cookie(name: &str, value: &str, max_age_days: Option<u32>, secure: bool) -> String {
    let mut cookie = format!(
        "{name}={}; Path=/; HttpOnly; SameSite=Lax",
        urlencoding::encode(value)
    );

    if let Some(days) = max_age_days {
        let seconds = u64::from(days) * 86_400;
        cookie.push_str(&format!("; Max-Age={seconds}"));
    }
    if secure {
        cookie.push_str("; Secure");
    }

    cookie
}
