//! Shell export importer
//!
//! Reads pasted `export NAME="value"` lines (as shown by API resellers and
//! shell profiles) and maps the known variables onto API settings.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{ApiType, ParsedEnvFields};

/// Path every Anthropic Messages endpoint ends with
pub const ANTHROPIC_MESSAGES_PATH: &str = "/v1/messages";

/// `export NAME=value`, with double-quoted, single-quoted or bare values
const EXPORT_PATTERN: &str = r#"^\s*export\s+(\w+)\s*=\s*(?:"([^"]*)"|'([^']*)'|(\S+))"#;

static EXPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EXPORT_PATTERN).expect("export pattern is a valid regex"));

#[derive(Clone, Copy)]
enum Field {
    Endpoint,
    Key,
}

fn lookup(name: &str) -> Option<(Field, ApiType)> {
    match name {
        "ANTHROPIC_BASE_URL" => Some((Field::Endpoint, ApiType::Anthropic)),
        "ANTHROPIC_AUTH_TOKEN" | "ANTHROPIC_API_KEY" => Some((Field::Key, ApiType::Anthropic)),
        "OPENAI_BASE_URL" => Some((Field::Endpoint, ApiType::OpenAi)),
        "OPENAI_API_KEY" => Some((Field::Key, ApiType::OpenAi)),
        _ => None,
    }
}

/// Parse export lines into API fields.
///
/// Later assignments overwrite earlier ones and the API type follows the
/// last recognized variable. Returns `None` when nothing was recognized.
#[must_use]
pub fn parse_env_exports(text: &str) -> Option<ParsedEnvFields> {
    let mut result = ParsedEnvFields::default();
    let mut found = false;

    for line in text.lines() {
        let Some(caps) = EXPORT_RE.captures(line) else {
            continue;
        };

        let name = &caps[1];
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map_or("", |m| m.as_str());

        let Some((field, api_type)) = lookup(name) else {
            log::debug!("ignoring unrecognized export {name}");
            continue;
        };
        if value.is_empty() {
            continue;
        }

        match field {
            Field::Endpoint => result.api_endpoint = Some(value.to_string()),
            Field::Key => result.api_key = Some(value.to_string()),
        }
        result.api_type = Some(api_type);
        found = true;
    }

    if result.api_type == Some(ApiType::Anthropic)
        && let Some(endpoint) = result.api_endpoint.take()
    {
        result.api_endpoint = Some(normalize_anthropic_endpoint(&endpoint));
    }

    found.then_some(result)
}

/// Strip trailing slashes and append `/v1/messages` unless already there.
///
/// Blank input stays blank.
#[must_use]
pub fn normalize_anthropic_endpoint(endpoint: &str) -> String {
    let url = endpoint.trim().trim_end_matches('/');
    if url.is_empty() || url.ends_with(ANTHROPIC_MESSAGES_PATH) {
        url.to_string()
    } else {
        format!("{url}{ANTHROPIC_MESSAGES_PATH}")
    }
}
