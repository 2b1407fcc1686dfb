//! API test types
//!
//! Describes the provider an API test talks to and the settings it needs.

use serde::{Deserialize, Serialize};

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";

/// Prompt sent when the configured prompt is empty
pub const DEFAULT_PROMPT: &str = "Please confirm whether you are the Claude Code CLI, \
                                  and briefly describe the tools you can use.";

const ANTHROPIC_MODELS: &[&str] = &[
    "claude-sonnet-4-5-20250929",
    "claude-sonnet-4-5-20250929-thinking",
    "claude-haiku-4-5",
    "claude-haiku-4-5-20251001",
    "claude-haiku-4-5-20251001-thinking",
    "claude-opus-4-5-20251101",
    "claude-opus-4-5-20251101-thinking",
    "claude-opus-4-6",
    "claude-opus-4-6-20260206",
    "claude-opus-4-6-thinking",
];

const OPENAI_MODELS: &[&str] = &["gpt-5.2-codex", "gpt-5.3-codex"];

/// API flavour of the endpoint under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiType {
    /// Anthropic Messages API
    #[default]
    Anthropic,
    /// OpenAI-compatible chat completions
    OpenAi,
}

impl ApiType {
    /// Model names offered as suggestions for this API type
    #[must_use]
    pub const fn suggested_models(self) -> &'static [&'static str] {
        match self {
            Self::Anthropic => ANTHROPIC_MODELS,
            Self::OpenAi => OPENAI_MODELS,
        }
    }
}

impl std::fmt::Display for ApiType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anthropic => write!(f, "anthropic"),
            Self::OpenAi => write!(f, "openai"),
        }
    }
}

impl std::str::FromStr for ApiType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anthropic" => Ok(Self::Anthropic),
            "openai" => Ok(Self::OpenAi),
            _ => Err(format!("Invalid API type: {s}. Use: anthropic, openai")),
        }
    }
}

/// Everything an API test needs to issue its request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Request shape and header scheme
    pub api_type: ApiType,
    /// Full endpoint URL
    pub endpoint: String,
    /// API key or bearer token
    pub key: String,
    /// Model name
    pub model: String,
    /// Prompt sent as the single user message
    pub prompt: String,
}

impl ApiConfig {
    /// The prompt to send, falling back to [`DEFAULT_PROMPT`]
    #[must_use]
    pub fn effective_prompt(&self) -> &str {
        if self.prompt.trim().is_empty() { DEFAULT_PROMPT } else { &self.prompt }
    }
}

/// Fields recognized in pasted shell `export` lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedEnvFields {
    /// Endpoint URL
    pub api_endpoint: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// API type implied by the last recognized variable
    pub api_type: Option<ApiType>,
}
