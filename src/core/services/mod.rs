//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`checker`] - Run the check table and score the results
//! - [`signature`] - Extract and select the signature
//! - [`json`] - Lenient JSON parsing helpers
//! - [`api_test`] - Build API test requests and read provider envelopes

pub mod checker;
pub mod json;
pub mod signature;

pub use api_test::{
    ApiRequest, ApiTestError, ApiTestSuccess, build_api_request, extract_answer_text,
    extract_thinking_text, interpret_reply, run_api_test,
};
pub use checker::{
    CHECKS, Evaluation, active_checks, definition, evaluate_checks, get_verdict, verify_submission,
    weighted_score,
};
pub use json::{JsonError, parse_json_safe};
pub use signature::{SignatureMatch, extract_signature_from_response, select_signature};
