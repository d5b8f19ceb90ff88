//! Login and logout: the only place session cookies are written
//!
//! Credentials go to the backend's public login endpoint; on success the
//! bearer token and a JSON role descriptor are written as cookies. The
//! "remember me" flag extends the cookie lifetime per configuration.

use crate::auth::{CookieSession, build_cookie};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Json};
use axum::Form;
use market_client::{LoginCredentials, read_role, read_token};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// Login form fields (form-urlencoded)
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    /// Account email
    #[validate(email)]
    pub email: String,

    /// Account password
    #[validate(length(min = 1))]
    pub password: String,

    /// Extend the session cookie lifetime
    #[serde(default)]
    pub remember: bool,
}

/// Sign in and set the session cookies
///
/// # Errors
///
/// Responds 400 for invalid form fields and maps backend login failures
/// (typically 401) through unchanged.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, ApiError> {
    form.validate()?;

    let response = state
        .api_client
        .login(&LoginCredentials {
            email: form.email,
            password: form.password,
        })
        .await?;

    let session = &state.config.session;
    let days = if form.remember {
        session.remember_me_days
    } else {
        session.expiry_days
    };

    let user_json = serde_json::to_string(&response.user)
        .map_err(|e| ApiError::from(market_core::Error::from(e)))?;

    let headers = AppendHeaders([
        (
            SET_COOKIE,
            build_cookie(&session.token_cookie, &response.token, Some(days), session.secure),
        ),
        (
            SET_COOKIE,
            build_cookie(&session.user_cookie, &user_json, Some(days), session.secure),
        ),
    ]);

    info!(user = %response.user.name, "admin signed in");

    Ok((
        headers,
        Json(json!({"success": true, "data": {"user": response.user}})),
    ))
}

/// Who is signed in, plus the display settings the UI reads at boot
///
/// # Errors
///
/// Responds 401 when the token cookie is absent or the role cookie is
/// missing or malformed.
pub async fn me(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    let store = CookieSession::new(&headers, &state.config.session);
    read_token(&store)?;
    let user = read_role(&store).ok_or_else(|| ApiError::unauthorized("Not signed in"))?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "user": user,
            "currency_symbol": state.config.display.currency_symbol,
        }
    })))
}

/// Sign out by clearing both session cookies
pub async fn logout(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = &state.config.session;

    let headers = AppendHeaders([
        (
            SET_COOKIE,
            build_cookie(&session.token_cookie, "", Some(0), session.secure),
        ),
        (
            SET_COOKIE,
            build_cookie(&session.user_cookie, "", Some(0), session.secure),
        ),
    ]);

    (headers, Json(json!({"success": true, "data": null})))
}
