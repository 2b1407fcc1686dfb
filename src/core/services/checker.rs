//! Check service - runs the heuristic check table
//!
//! This service contains the pure scoring logic: a fixed, ordered table of
//! independent checks, mode filtering, weighted aggregation and verdict
//! mapping. No I/O.

use serde::Serialize;

use crate::core::models::{
    CheckDefinition, CheckId, CheckInput, CheckResult, Outcome, Submission, Verdict,
    VerificationMode,
};

use super::json::{has_field, has_field_or_usage, parse_json_safe};
use super::signature::select_signature;

/// Keywords in the answer that claim a CLI identity
pub const ANSWER_IDENTITY_KEYWORDS: &[&str] =
    &["claude code", "cli", "命令行", "command", "terminal"];

/// Keywords in the thinking text that claim a CLI identity
pub const THINKING_IDENTITY_KEYWORDS: &[&str] = &["claude code", "cli", "命令行", "command", "tool"];

/// Phrases that suggest a tampered or injected system prompt
pub const RISKY_PROMPT_KEYWORDS: &[&str] = &["system prompt", "ignore previous", "override", "越权"];

/// Keywords describing tool, file and shell capabilities
pub const TOOL_KEYWORDS: &[&str] = &[
    "file", "command", "bash", "shell", "read", "write", "execute", "编辑", "读取", "写入", "执行",
];

/// Identity keywords counted across answer and thinking
pub const MULTI_TURN_KEYWORDS: &[&str] = &["claude code", "cli", "command line", "工具"];

/// Distinct identity keyword hits needed by the multi-turn check
pub const MULTI_TURN_MIN_HITS: usize = 2;

const JSON_UNPARSEABLE: &str = "response JSON could not be parsed";

/// The check table, in evaluation order
pub static CHECKS: [CheckDefinition; 9] = [
    CheckDefinition {
        id: CheckId::Signature,
        label: "Signature length",
        weight: 12,
        evaluate: check_signature,
    },
    CheckDefinition {
        id: CheckId::AnswerIdentity,
        label: "Identity answer",
        weight: 12,
        evaluate: check_answer_identity,
    },
    CheckDefinition {
        id: CheckId::ThinkingOutput,
        label: "Thinking output",
        weight: 14,
        evaluate: check_thinking_output,
    },
    CheckDefinition {
        id: CheckId::ThinkingIdentity,
        label: "Thinking identity",
        weight: 8,
        evaluate: check_thinking_identity,
    },
    CheckDefinition {
        id: CheckId::ResponseStructure,
        label: "Response structure",
        weight: 14,
        evaluate: check_response_structure,
    },
    CheckDefinition {
        id: CheckId::SystemPrompt,
        label: "System prompt",
        weight: 10,
        evaluate: check_system_prompt,
    },
    CheckDefinition {
        id: CheckId::ToolSupport,
        label: "Tool support",
        weight: 12,
        evaluate: check_tool_support,
    },
    CheckDefinition {
        id: CheckId::MultiTurn,
        label: "Multi-turn identity",
        weight: 10,
        evaluate: check_multi_turn,
    },
    CheckDefinition {
        id: CheckId::Config,
        label: "Output config",
        weight: 10,
        evaluate: check_config,
    },
];

/// Scored results of one verification run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// One result per active check, in table order
    pub results: Vec<CheckResult>,
    /// Weighted percentage, 0-100
    pub score: u32,
    /// Classification of the score
    pub verdict: Verdict,
}

impl Evaluation {
    /// The state before anything has been verified
    #[must_use]
    pub const fn pending() -> Self {
        Self {
            results: Vec::new(),
            score: 0,
            verdict: Verdict::Pending,
        }
    }

    /// Sum of weights of passed checks
    #[must_use]
    pub fn passed_weight(&self) -> u32 {
        self.results.iter().filter(|r| r.pass).map(|r| r.weight).sum()
    }

    /// Sum of weights of all evaluated checks
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.results.iter().map(|r| r.weight).sum()
    }
}

/// Look up a check definition by id
#[must_use]
pub fn definition(id: CheckId) -> Option<&'static CheckDefinition> {
    CHECKS.iter().find(|c| c.id == id)
}

/// Checks selected by mode and the skip-identity flag, in table order
#[must_use]
pub fn active_checks(mode: VerificationMode, skip_identity: bool) -> Vec<&'static CheckDefinition> {
    CHECKS
        .iter()
        .filter(|c| mode.includes(c.id))
        .filter(|c| !(skip_identity && c.id.is_identity()))
        .collect()
}

/// Run every active check against `input` and score the results
#[must_use]
pub fn evaluate_checks(input: &CheckInput, mode: VerificationMode) -> Evaluation {
    let active = active_checks(mode, input.skip_identity_checks);
    log::debug!(
        "evaluating {} check(s) in {mode} mode (skip identity: {})",
        active.len(),
        input.skip_identity_checks
    );

    let results: Vec<CheckResult> = active.iter().map(|c| c.run(input)).collect();
    let score = weighted_score(&results);
    let verdict = get_verdict(score);

    Evaluation {
        results,
        score,
        verdict,
    }
}

/// Map a score onto a verdict
#[must_use]
pub const fn get_verdict(score: u32) -> Verdict {
    Verdict::from_score(score)
}

/// Resolve the signature of a raw submission and evaluate it
#[must_use]
pub fn verify_submission(submission: &Submission, mode: VerificationMode) -> Evaluation {
    let signature = select_signature(&submission.signature, &submission.response_json);
    let input = CheckInput {
        signature_source: signature.source_prefix(),
        signature: signature.value,
        signature_min: submission.signature_min,
        response_json: submission.response_json.clone(),
        answer_text: submission.answer_text.clone(),
        thinking_text: submission.thinking_text.clone(),
        skip_identity_checks: submission.skip_identity_checks,
    };
    evaluate_checks(&input, mode)
}

/// Percentage of passed weight over evaluated weight, rounded half up.
/// Zero when nothing was evaluated.
#[must_use]
pub fn weighted_score(results: &[CheckResult]) -> u32 {
    let total: u32 = results.iter().map(|r| r.weight).sum();
    if total == 0 {
        return 0;
    }
    let gained: u32 = results.iter().filter(|r| r.pass).map(|r| r.weight).sum();
    (gained * 200 + total) / (total * 2)
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn count_hits(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(*k)).count()
}

fn check_signature(input: &CheckInput) -> Outcome {
    let length = input.signature.trim().chars().count();
    let min = input.signature_min;
    let detail = format!("{}length {length}, threshold {min}", input.signature_source);
    Outcome {
        pass: length >= min,
        detail,
    }
}

fn check_answer_identity(input: &CheckInput) -> Outcome {
    let text = input.answer_text.to_lowercase();
    Outcome::from_bool(
        contains_any(&text, ANSWER_IDENTITY_KEYWORDS),
        "contains identity keywords",
        "no identity keywords found",
    )
}

fn check_thinking_output(input: &CheckInput) -> Outcome {
    let text = input.thinking_text.trim();
    if text.is_empty() {
        return Outcome::fail("no thinking content in response");
    }
    Outcome::pass(format!("thinking output detected ({} chars)", text.chars().count()))
}

fn check_thinking_identity(input: &CheckInput) -> Outcome {
    if input.thinking_text.trim().is_empty() {
        return Outcome::fail("no thinking text provided");
    }
    let text = input.thinking_text.to_lowercase();
    Outcome::from_bool(
        contains_any(&text, THINKING_IDENTITY_KEYWORDS),
        "mentions Claude Code / CLI",
        "no identity keywords found",
    )
}

fn check_response_structure(input: &CheckInput) -> Outcome {
    let Ok(data) = parse_json_safe(&input.response_json) else {
        return Outcome::fail(JSON_UNPARSEABLE);
    };

    let has_id = has_field(&data, "id");
    let has_cache_creation = has_field_or_usage(&data, "cache_creation");
    let has_service_tier = has_field_or_usage(&data, "service_tier");

    let missing: Vec<&str> = [
        ("id", has_id),
        ("cache_creation", has_cache_creation),
        ("service_tier", has_service_tier),
    ]
    .into_iter()
    .filter(|(_, present)| !present)
    .map(|(name, _)| name)
    .collect();

    let detail = if missing.is_empty() {
        "all key fields present".to_string()
    } else {
        format!("missing fields: {}", missing.join(", "))
    };

    Outcome {
        pass: has_id && has_cache_creation,
        detail,
    }
}

/// Inverted polarity: finding a risky phrase is the negative signal.
fn check_system_prompt(input: &CheckInput) -> Outcome {
    let text = format!("{} {}", input.answer_text, input.thinking_text).to_lowercase();
    let hit = contains_any(&text, RISKY_PROMPT_KEYWORDS);
    Outcome::from_bool(!hit, "no unusual prompt phrasing", "possible prompt injection")
}

fn check_tool_support(input: &CheckInput) -> Outcome {
    let text = input.answer_text.to_lowercase();
    Outcome::from_bool(
        contains_any(&text, TOOL_KEYWORDS),
        "describes tool capabilities",
        "no tool capability keywords",
    )
}

fn check_multi_turn(input: &CheckInput) -> Outcome {
    let text = format!("{}\n{}", input.answer_text, input.thinking_text).to_lowercase();
    let hits = count_hits(&text, MULTI_TURN_KEYWORDS);
    Outcome::from_bool(
        hits >= MULTI_TURN_MIN_HITS,
        "identity confirmed in several places",
        "too few identity confirmations",
    )
}

fn check_config(input: &CheckInput) -> Outcome {
    let Ok(data) = parse_json_safe(&input.response_json) else {
        return Outcome::fail(JSON_UNPARSEABLE);
    };
    let pass =
        has_field_or_usage(&data, "cache_creation") || has_field_or_usage(&data, "service_tier");
    Outcome::from_bool(pass, "config fields present", "no config fields found")
}
