//! Response envelope normalization
//!
//! The backend is not consistent about its response shape: most endpoints
//! wrap payloads as `{success, data, message?}`, some as a bare `{data}`,
//! and a few return the raw JSON array. Everything is folded into one
//! canonical [`Envelope`] here so no other code has to care.

use market_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Canonical response envelope
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    /// Whether the server reported success
    pub success: bool,
    /// Decoded payload
    pub data: T,
    /// Server-supplied message, if any
    pub message: Option<String>,
}

/// Normalize a response body into the canonical envelope shape.
///
/// Accepted shapes, in order of preference:
/// - `{"success": bool, "data": …, "message"?: string}`
/// - `{"data": …}` (success implied)
/// - a raw JSON array (success implied)
///
/// # Errors
///
/// Returns [`Error::Envelope`] when the body matches none of the accepted
/// shapes or the payload does not decode as `T`.
pub fn normalize<T: DeserializeOwned>(body: Value) -> Result<Envelope<T>> {
    let (success, data, message) = match body {
        Value::Array(_) => (true, body, None),
        Value::Object(mut fields) => {
            let Some(data) = fields.remove("data") else {
                return Err(Error::Envelope(
                    "object body without a data field".to_string(),
                ));
            };
            let success = fields
                .get("success")
                .and_then(Value::as_bool)
                .unwrap_or(true);
            let message = fields
                .get("message")
                .and_then(Value::as_str)
                .map(ToString::to_string);
            (success, data, message)
        }
        other => {
            return Err(Error::Envelope(format!(
                "expected object or array, got {}",
                value_kind(&other)
            )));
        }
    };

    let data: T = serde_json::from_value(data)
        .map_err(|e| Error::Envelope(format!("payload did not decode: {e}")))?;

    Ok(Envelope {
        success,
        data,
        message,
    })
}

/// Normalize, then treat a server-reported failure as an error.
///
/// A 2xx body carrying `success: false` becomes [`Error::Api`] with the
/// server's message (or a generic fallback), matching how every call site
/// wants to consume it.
///
/// # Errors
///
/// Everything [`normalize`] returns, plus [`Error::Api`] on
/// `success: false`.
pub fn into_data<T: DeserializeOwned>(body: Value) -> Result<T> {
    // Pull the message out before decoding: a failure body often carries
    // no usable data payload.
    if let Value::Object(fields) = &body {
        if fields.get("success").and_then(Value::as_bool) == Some(false) {
            let message = fields
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Operation failed")
                .to_string();
            return Err(Error::Api {
                status: 200,
                message,
            });
        }
    }

    let envelope = normalize::<T>(body)?;
    Ok(envelope.data)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
