//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{ApiType, CheckId, CheckResult, Verdict, VerificationMode};
use crate::core::services::{ApiTestError, ApiTestSuccess, Evaluation, SignatureMatch};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn mark(pass: bool) -> String {
    if pass { "✓".green().to_string() } else { "✗".red().to_string() }
}

fn colored_verdict(verdict: Verdict) -> String {
    let text = verdict.to_string();
    match verdict {
        Verdict::Genuine => text.green().bold().to_string(),
        Verdict::Suspected => text.yellow().bold().to_string(),
        Verdict::LikelyFake => text.red().bold().to_string(),
        Verdict::Pending => text.dimmed().to_string(),
    }
}

/// Result of a verification run
#[derive(Debug, Serialize)]
pub struct VerifyReport {
    /// Mode the checks ran in
    pub mode: VerificationMode,
    /// Weighted score, 0-100
    pub score: u32,
    /// Verdict for the score
    pub verdict: Verdict,
    /// Verdict headline
    pub headline: String,
    /// Verdict explanation
    pub summary: String,
    /// Weight of passed checks
    pub passed_weight: u32,
    /// Weight of all evaluated checks
    pub total_weight: u32,
    /// Per-check results
    pub results: Vec<CheckResult>,
    /// When the run happened (RFC3339)
    pub evaluated_at: String,
}

impl VerifyReport {
    /// Build a report from an evaluation
    #[must_use]
    pub fn new(evaluation: &Evaluation, mode: VerificationMode) -> Self {
        Self {
            mode,
            score: evaluation.score,
            verdict: evaluation.verdict,
            headline: evaluation.verdict.headline().to_string(),
            summary: evaluation.verdict.summary().to_string(),
            passed_weight: evaluation.passed_weight(),
            total_weight: evaluation.total_weight(),
            results: evaluation.results.clone(),
            evaluated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.results.is_empty() {
            println!("No checks are active for this mode.");
        } else {
            println!("Running {} check(s) in {} mode...\n", self.results.len(), self.mode);
            for r in &self.results {
                println!("  {} {:<20} [{:>2}]  {}", mark(r.pass), r.label, r.weight, r.detail);
            }
            println!();
        }

        println!(
            "Score:   {}/100 ({}/{} points)",
            self.score, self.passed_weight, self.total_weight
        );
        println!("Verdict: {}", colored_verdict(self.verdict));
        println!("\n{}", self.headline.bold());
        println!("{}", self.summary);
    }
}

/// An entry of the check table listing
#[derive(Debug, Serialize)]
pub struct CheckInfo {
    /// Check identifier
    pub id: CheckId,
    /// Display label
    pub label: String,
    /// Weight
    pub weight: u32,
}

/// Result of a checks list operation
#[derive(Debug, Serialize)]
pub struct CheckListResult {
    /// Mode the listing was computed for
    pub mode: VerificationMode,
    /// Whether identity checks were skipped
    pub skip_identity_checks: bool,
    /// Active checks, in evaluation order
    pub checks: Vec<CheckInfo>,
    /// Sum of weights of the active checks
    pub total_weight: u32,
}

impl CheckListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Checks ({} mode):\n", self.mode);
        for c in &self.checks {
            println!("  {:<18} {:<20} {:>3}", c.id.to_string(), c.label, c.weight);
        }
        println!("\n  Total weight: {}", self.total_weight);
    }
}

/// Result of a signature extraction
#[derive(Debug, Serialize)]
pub struct SignatureResult {
    /// Whether a signature was found
    pub found: bool,
    /// The signature value
    pub value: String,
    /// Where it was found
    pub source: String,
    /// Trimmed length in characters
    pub length: usize,
}

impl From<SignatureMatch> for SignatureResult {
    fn from(m: SignatureMatch) -> Self {
        Self {
            found: !m.is_empty(),
            length: m.value.trim().chars().count(),
            value: m.value,
            source: m.source,
        }
    }
}

impl SignatureResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.found {
                    println!("Signature ({}, {} chars):", self.source, self.length);
                    println!("{}", self.value);
                } else {
                    println!("No signature found.");
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of an environment import
#[derive(Debug, Serialize)]
pub struct EnvImportResult {
    /// API type, if one was recognized
    pub api_type: Option<ApiType>,
    /// Endpoint, if one was recognized
    pub endpoint: Option<String>,
    /// Masked API key, if one was recognized
    pub key: Option<String>,
    /// Whether the fields were written to the config
    pub saved: bool,
}

impl EnvImportResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Imported API settings:");
                if let Some(api_type) = self.api_type {
                    println!("  Type:     {api_type}");
                }
                if let Some(endpoint) = &self.endpoint {
                    println!("  Endpoint: {endpoint}");
                }
                if let Some(key) = &self.key {
                    println!("  Key:      {key}");
                }
                if self.saved {
                    println!("\nSaved to config.");
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Mask all but the first and last four characters of a secret
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

/// Result of an API test
#[derive(Debug, Serialize)]
pub struct ApiTestReport {
    /// Whether the test produced a usable response
    pub success: bool,
    /// Failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// HTTP status of a failed request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Response body (pretty JSON on success, raw text on a parse failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_json: Option<String>,
    /// Extracted answer text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_text: Option<String>,
    /// Extracted thinking text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_text: Option<String>,
}

impl ApiTestReport {
    /// Report for a successful test
    #[must_use]
    pub fn success(result: &ApiTestSuccess) -> Self {
        Self {
            success: true,
            error: None,
            status_code: None,
            response_json: Some(result.response_json.clone()),
            answer_text: Some(result.answer_text.clone()),
            thinking_text: Some(result.thinking_text.clone()),
        }
    }

    /// Report for a failed test
    #[must_use]
    pub fn failure(err: &ApiTestError) -> Self {
        Self {
            success: false,
            error: Some(err.to_string()),
            status_code: err.status_code(),
            response_json: err.raw_response().map(String::from),
            answer_text: None,
            thinking_text: None,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if !self.success {
            println!(
                "{} {}",
                "API test failed:".red().bold(),
                self.error.as_deref().unwrap_or("unknown error")
            );
            if let Some(raw) = &self.response_json {
                println!("\nResponse body:\n{raw}");
            }
            return;
        }

        println!("{}", "API test succeeded.".green().bold());
        if let Some(answer) = self.answer_text.as_deref().filter(|s| !s.is_empty()) {
            println!("\nAnswer:\n{answer}");
        }
        if let Some(thinking) = self.thinking_text.as_deref().filter(|s| !s.is_empty()) {
            println!("\nThinking:\n{thinking}");
        }
        println!();
    }
}

/// Result of a models listing
#[derive(Debug, Serialize)]
pub struct ModelListResult {
    /// API type the suggestions are for
    pub api_type: ApiType,
    /// Suggested model names
    pub models: Vec<String>,
}

impl ModelListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Suggested {} models:", self.api_type);
                for m in &self.models {
                    println!("  {m}");
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}
