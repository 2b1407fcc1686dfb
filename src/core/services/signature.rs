//! Signature extraction and selection
//!
//! The signature is an opaque string; only its length is scored. It either
//! comes from the user directly or is dug out of the response JSON.

use serde::Serialize;
use serde_json::Value;

use super::json::parse_json_safe;

/// Keys (compared case-insensitively) that may hold a signature
pub const SIGNATURE_KEYS: [&str; 5] =
    ["signature", "sig", "x-claude-signature", "x_signature", "xsignature"];

/// Deepest nesting level the search descends into
pub const MAX_SEARCH_DEPTH: usize = 6;

/// Source label for signatures found in the response JSON
pub const RESPONSE_SOURCE: &str = "response JSON";

/// Source label for signatures entered by the user
pub const MANUAL_SOURCE: &str = "manual";

/// A signature value and where it came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignatureMatch {
    /// The signature string, empty when none was found
    pub value: String,
    /// Source label, empty when none was found
    pub source: String,
}

impl SignatureMatch {
    /// Whether no signature was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Source rendered as a detail prefix (`"manual: "`), or empty
    #[must_use]
    pub fn source_prefix(&self) -> String {
        if self.source.is_empty() { String::new() } else { format!("{}: ", self.source) }
    }
}

/// Find the first signature-like string field in a raw response body.
///
/// Unparseable or empty input yields an empty match, as does a body with no
/// candidate field within [`MAX_SEARCH_DEPTH`] levels.
#[must_use]
pub fn extract_signature_from_response(raw: &str) -> SignatureMatch {
    let Ok(parsed) = parse_json_safe(raw) else {
        return SignatureMatch::default();
    };

    match find_signature_value(&parsed, 0) {
        Some(value) => {
            log::debug!("found signature in response JSON ({} chars)", value.chars().count());
            SignatureMatch {
                value: value.to_string(),
                source: RESPONSE_SOURCE.to_string(),
            }
        },
        None => SignatureMatch::default(),
    }
}

/// Choose the signature for a run: a non-blank manual value wins, otherwise
/// the one extracted from the response.
#[must_use]
pub fn select_signature(manual: &str, response_json: &str) -> SignatureMatch {
    let manual = manual.trim();
    if manual.is_empty() {
        extract_signature_from_response(response_json)
    } else {
        SignatureMatch {
            value: manual.to_string(),
            source: MANUAL_SOURCE.to_string(),
        }
    }
}

fn is_signature_key(key: &str) -> bool {
    let key = key.to_lowercase();
    SIGNATURE_KEYS.contains(&key.as_str())
}

/// Depth-first pre-order: array elements in order, object entries in
/// document order, each key tested before its value is descended into.
fn find_signature_value(value: &Value, depth: usize) -> Option<&str> {
    if depth > MAX_SEARCH_DEPTH {
        return None;
    }

    match value {
        Value::Array(items) => items.iter().find_map(|item| find_signature_value(item, depth + 1)),
        Value::Object(map) => {
            for (key, val) in map {
                if is_signature_key(key)
                    && let Value::String(s) = val
                    && !s.trim().is_empty()
                {
                    return Some(s.as_str());
                }
                if let Some(found) = find_signature_value(val, depth + 1) {
                    return Some(found);
                }
            }
            None
        },
        _ => None,
    }
}
