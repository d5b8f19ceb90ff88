//! Error types for the marketplace admin dashboard

use std::{error::Error as StdError, fmt};

/// Main error type for the marketplace admin
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(std::io::Error),

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation error
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Transport-level HTTP failure (connection, DNS, timeout)
    Http(String),

    /// Error reported by the backend API (non-2xx status or a
    /// `success: false` envelope)
    Api {
        /// HTTP status code, if one was received
        status: u16,
        /// Human-readable message, preferring the server's own
        message: String,
    },

    /// Response body did not match any known envelope shape
    Envelope(String),

    /// No bearer token is available for an authenticated operation
    Unauthenticated,

    /// Not found error
    NotFound {
        /// Resource that was not found
        resource: String,
    },

    /// Serialization error
    Serialization(serde_json::Error),

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The single human-readable message shown to the operator.
    ///
    /// Server-supplied messages win; everything else falls back to the
    /// variant's display form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Unauthenticated => "Not signed in".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Validation { field, message } => {
                write!(f, "Validation error: {field} - {message}")
            }
            Self::Http(msg) => write!(f, "Request failed: {msg}"),
            Self::Api { status, message } => {
                write!(f, "API error ({status}): {message}")
            }
            Self::Envelope(msg) => write!(f, "Unexpected response shape: {msg}"),
            Self::Unauthenticated => write!(f, "No session token available"),
            Self::NotFound { resource } => write!(f, "Resource not found: {resource}"),
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

// From implementations for automatic conversions
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}
