//! Lenient JSON helpers
//!
//! Response bodies come from users and third-party endpoints, so parsing is
//! expected to fail often. Failures are values, not panics.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Why a response body could not be used as JSON
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    /// Empty or whitespace-only text
    #[error("empty response text")]
    Empty,

    /// Text is not valid JSON
    #[error("malformed JSON: {0}")]
    Malformed(String),
}

/// Parse `text` as JSON without ever panicking
pub fn parse_json_safe(text: &str) -> Result<Value, JsonError> {
    if text.trim().is_empty() {
        return Err(JsonError::Empty);
    }

    // Nesting is unbounded; serde_stacker grows the stack on demand.
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value =
        Value::deserialize(serde_stacker::Deserializer::new(&mut de)).map_err(malformed)?;
    de.end().map_err(malformed)?;
    Ok(value)
}

fn malformed(e: serde_json::Error) -> JsonError {
    JsonError::Malformed(e.to_string())
}

/// Whether the top-level object has `key`. Non-objects have no fields.
#[must_use]
pub fn has_field(data: &Value, key: &str) -> bool {
    data.as_object().is_some_and(|map| map.contains_key(key))
}

/// Whether `key` is present at the top level or inside a `usage` object
#[must_use]
pub fn has_field_or_usage(data: &Value, key: &str) -> bool {
    has_field(data, key)
        || data
            .get("usage")
            .and_then(Value::as_object)
            .is_some_and(|usage| usage.contains_key(key))
}
