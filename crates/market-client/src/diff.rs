//! Shallow field diff for update payloads
//!
//! Updates never send the whole entity: only fields on an explicit
//! allow-list that actually changed are PUT to the backend. An empty diff
//! means the caller should skip the request entirely.

use market_core::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Compute the allow-listed field diff between an original entity and its
/// edited copy.
///
/// Both values are compared through their serialized representations, so
/// the allow-list names serde field names. A field present in `edited` but
/// absent from `original` (or vice versa) counts as changed; the edited
/// side's value (or `null`) is what gets sent.
///
/// # Errors
///
/// Returns a serialization error if either value does not serialize to a
/// JSON object.
pub fn diff_allowed<T: Serialize>(
    original: &T,
    edited: &T,
    allowed: &[&str],
) -> Result<Map<String, Value>> {
    let original = to_object(original)?;
    let edited = to_object(edited)?;

    let mut changes = Map::new();
    for field in allowed {
        let before = original.get(*field).unwrap_or(&Value::Null);
        let after = edited.get(*field).unwrap_or(&Value::Null);
        if before != after {
            changes.insert((*field).to_string(), after.clone());
        }
    }

    Ok(changes)
}

fn to_object<T: Serialize>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(market_core::Error::Other(
            "diff requires entities that serialize to objects".to_string(),
        )),
    }
}
