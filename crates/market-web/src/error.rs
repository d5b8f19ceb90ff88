//! JSON error mapping for dashboard responses

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Error returned by dashboard handlers, rendered as
/// `{"error": …, "message": …}` with a mapped HTTP status.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status for the response
    pub status: StatusCode,
    /// Short machine-readable error class
    pub error: &'static str,
    /// Human-readable message
    pub message: String,
}

impl ApiError {
    /// Bad request with a message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "bad_request",
            message: message.into(),
        }
    }

    /// Unknown resource or entity
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: "not_found",
            message: message.into(),
        }
    }

    /// Missing or invalid session
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error: "unauthorized",
            message: message.into(),
        }
    }
}

impl From<market_core::Error> for ApiError {
    fn from(err: market_core::Error) -> Self {
        use market_core::Error;

        let message = err.user_message();
        match err {
            Error::Unauthenticated => Self {
                status: StatusCode::UNAUTHORIZED,
                error: "unauthorized",
                message,
            },
            // The backend can declare failure inside a 2xx body; a
            // status below 400 must never surface as HTTP success here.
            Error::Api { status, .. } => Self {
                status: StatusCode::from_u16(status)
                    .ok()
                    .filter(|code| code.is_client_error() || code.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY),
                error: "backend_error",
                message,
            },
            Error::Http(_) | Error::Envelope(_) => Self {
                status: StatusCode::BAD_GATEWAY,
                error: "backend_unavailable",
                message,
            },
            Error::Validation { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                error: "validation",
                message,
            },
            Error::NotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                error: "not_found",
                message,
            },
            _ => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: "internal",
                message,
            },
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::bad_request(format!("invalid parameters: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.error,
            "message": self.message,
        }));
        (self.status, body).into_response()
    }
}
