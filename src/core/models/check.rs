//! Check model
//!
//! A check is one heuristic test over a captured response: "does this
//! response look like it came from the real CLI?" Every check reads only
//! from [`CheckInput`] and contributes a fixed weight when it passes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Signature length threshold used when nothing else is configured
pub const DEFAULT_SIGNATURE_MIN: usize = 100;

/// Identifier of a check in the fixed check table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckId {
    /// Signature length against the configured threshold
    Signature,
    /// Answer text claims a CLI identity
    AnswerIdentity,
    /// Response carries thinking output
    ThinkingOutput,
    /// Thinking text claims a CLI identity
    ThinkingIdentity,
    /// Response JSON has the expected envelope fields
    ResponseStructure,
    /// No prompt-injection phrasing in answer or thinking
    SystemPrompt,
    /// Answer describes tool, file or shell capabilities
    ToolSupport,
    /// Identity is confirmed by several distinct keywords
    MultiTurn,
    /// Response JSON carries output config fields
    Config,
}

impl CheckId {
    /// Every identifier, in evaluation order
    pub const ALL: [Self; 9] = [
        Self::Signature,
        Self::AnswerIdentity,
        Self::ThinkingOutput,
        Self::ThinkingIdentity,
        Self::ResponseStructure,
        Self::SystemPrompt,
        Self::ToolSupport,
        Self::MultiTurn,
        Self::Config,
    ];

    /// The wire identifier (e.g. `"answerIdentity"`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Signature => "signature",
            Self::AnswerIdentity => "answerIdentity",
            Self::ThinkingOutput => "thinkingOutput",
            Self::ThinkingIdentity => "thinkingIdentity",
            Self::ResponseStructure => "responseStructure",
            Self::SystemPrompt => "systemPrompt",
            Self::ToolSupport => "toolSupport",
            Self::MultiTurn => "multiTurn",
            Self::Config => "config",
        }
    }

    /// Whether this check only makes sense for identity-style prompts
    #[must_use]
    pub const fn is_identity(self) -> bool {
        matches!(self, Self::AnswerIdentity | Self::ThinkingIdentity | Self::MultiTurn)
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown check: {s}"))
    }
}

/// Normalized input for one verification run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInput {
    /// Signature value (manual or extracted from the response)
    pub signature: String,
    /// Label prefix naming where the signature came from, may be empty
    pub signature_source: String,
    /// Minimum trimmed signature length for the signature check
    pub signature_min: usize,
    /// Raw response body, possibly empty or not JSON at all
    pub response_json: String,
    /// Answer text of the response
    pub answer_text: String,
    /// Thinking text of the response
    pub thinking_text: String,
    /// Drop the identity-oriented checks from the active set
    pub skip_identity_checks: bool,
}

impl Default for CheckInput {
    fn default() -> Self {
        Self {
            signature: String::new(),
            signature_source: String::new(),
            signature_min: DEFAULT_SIGNATURE_MIN,
            response_json: String::new(),
            answer_text: String::new(),
            thinking_text: String::new(),
            skip_identity_checks: false,
        }
    }
}

/// Pass/fail outcome of a single evaluation function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the check passed
    pub pass: bool,
    /// Human-readable explanation
    pub detail: String,
}

impl Outcome {
    /// A passing outcome
    pub fn pass(detail: impl Into<String>) -> Self {
        Self {
            pass: true,
            detail: detail.into(),
        }
    }

    /// A failing outcome
    pub fn fail(detail: impl Into<String>) -> Self {
        Self {
            pass: false,
            detail: detail.into(),
        }
    }

    /// Pick the detail that matches `pass`
    #[must_use]
    pub fn from_bool(pass: bool, pass_detail: &str, fail_detail: &str) -> Self {
        if pass { Self::pass(pass_detail) } else { Self::fail(fail_detail) }
    }
}

/// An entry of the static check table
#[derive(Debug, Clone, Copy)]
pub struct CheckDefinition {
    /// Unique identifier
    pub id: CheckId,
    /// Display label
    pub label: &'static str,
    /// Points contributed when the check passes
    pub weight: u32,
    /// Pure evaluation function
    pub evaluate: fn(&CheckInput) -> Outcome,
}

impl CheckDefinition {
    /// Run the evaluation function and wrap it into a result
    #[must_use]
    pub fn run(&self, input: &CheckInput) -> CheckResult {
        let outcome = (self.evaluate)(input);
        CheckResult {
            id: self.id,
            label: self.label.to_string(),
            weight: self.weight,
            pass: outcome.pass,
            detail: outcome.detail,
        }
    }
}

/// Result of one evaluated check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Check identifier
    pub id: CheckId,
    /// Display label
    pub label: String,
    /// Weight of the check
    pub weight: u32,
    /// Whether it passed
    pub pass: bool,
    /// Explanation of the outcome
    pub detail: String,
}

/// Raw user-supplied fields, before the signature is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Manually entered signature; wins over the one found in the response
    pub signature: String,
    /// Minimum signature length
    pub signature_min: usize,
    /// Raw response body
    pub response_json: String,
    /// Answer text
    pub answer_text: String,
    /// Thinking text
    pub thinking_text: String,
    /// Drop the identity-oriented checks
    pub skip_identity_checks: bool,
}

impl Default for Submission {
    fn default() -> Self {
        Self {
            signature: String::new(),
            signature_min: DEFAULT_SIGNATURE_MIN,
            response_json: String::new(),
            answer_text: String::new(),
            thinking_text: String::new(),
            skip_identity_checks: false,
        }
    }
}
