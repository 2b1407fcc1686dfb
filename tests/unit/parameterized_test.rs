//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use ccverify::adapters::env::normalize_anthropic_endpoint;
use ccverify::core::models::{ApiType, CheckId, CheckInput, Verdict, VerificationMode};
use ccverify::core::services::{evaluate_checks, get_verdict};
use test_case::test_case;

// =============================================================================
// Verdict Tests
// =============================================================================

#[test_case(100, Verdict::Genuine ; "perfect score")]
#[test_case(85, Verdict::Genuine ; "genuine boundary")]
#[test_case(84, Verdict::Suspected ; "just below genuine")]
#[test_case(67, Verdict::Suspected ; "mid suspected")]
#[test_case(60, Verdict::Suspected ; "suspected boundary")]
#[test_case(59, Verdict::LikelyFake ; "just below suspected")]
#[test_case(0, Verdict::LikelyFake ; "zero")]
fn test_verdict_for_score(score: u32, expected: Verdict) {
    assert_eq!(get_verdict(score), expected);
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test_case("quick", Some(VerificationMode::Quick) ; "quick")]
#[test_case("FULL", Some(VerificationMode::Full) ; "uppercase full")]
#[test_case("deep", None ; "unknown mode")]
fn test_mode_parsing(input: &str, expected: Option<VerificationMode>) {
    assert_eq!(input.parse::<VerificationMode>().ok(), expected);
}

#[test_case("anthropic", Some(ApiType::Anthropic) ; "anthropic")]
#[test_case("openai", Some(ApiType::OpenAi) ; "openai")]
#[test_case("azure", None ; "unknown api type")]
fn test_api_type_parsing(input: &str, expected: Option<ApiType>) {
    assert_eq!(input.parse::<ApiType>().ok(), expected);
}

#[test_case("multiTurn", Some(CheckId::MultiTurn) ; "camel case")]
#[test_case("multiturn", Some(CheckId::MultiTurn) ; "lowercase")]
#[test_case("multi_turn", None ; "snake case is not an id")]
fn test_check_id_parsing(input: &str, expected: Option<CheckId>) {
    assert_eq!(input.parse::<CheckId>().ok(), expected);
}

// =============================================================================
// Endpoint Normalization Tests
// =============================================================================

#[test_case("https://r.example.com", "https://r.example.com/v1/messages" ; "bare host")]
#[test_case("https://r.example.com/", "https://r.example.com/v1/messages" ; "trailing slash")]
#[test_case("https://r.example.com/api", "https://r.example.com/api/v1/messages" ; "with prefix")]
#[test_case("https://r.example.com/v1/messages", "https://r.example.com/v1/messages" ; "already complete")]
#[test_case("", "" ; "blank")]
fn test_normalize_anthropic_endpoint(input: &str, expected: &str) {
    assert_eq!(normalize_anthropic_endpoint(input), expected);
}

// =============================================================================
// Keyword Tests
// =============================================================================

fn answer_passes(answer: &str, id: CheckId) -> bool {
    let input = CheckInput {
        answer_text: answer.to_string(),
        ..CheckInput::default()
    };
    let evaluation = evaluate_checks(&input, VerificationMode::Full);
    evaluation.results.iter().find(|r| r.id == id).is_some_and(|r| r.pass)
}

#[test_case("I am Claude Code", true ; "product name")]
#[test_case("I run in your TERMINAL", true ; "terminal uppercase")]
#[test_case("我是命令行工具", true ; "chinese cli")]
#[test_case("I am a helpful assistant", false ; "generic assistant")]
fn test_answer_identity_keywords(answer: &str, expected: bool) {
    assert_eq!(answer_passes(answer, CheckId::AnswerIdentity), expected);
}

#[test_case("I can execute scripts", true ; "execute")]
#[test_case("我可以编辑代码", true ; "chinese edit")]
#[test_case("I only chat", false ; "no tools")]
fn test_tool_support_keywords(answer: &str, expected: bool) {
    assert_eq!(answer_passes(answer, CheckId::ToolSupport), expected);
}
