//! Domain models for ccverify
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CheckInput`] - Normalized signals for one verification run
//! - [`CheckResult`] - Outcome of one heuristic check
//! - [`Verdict`] - Three-tier classification of a score
//! - [`VerificationMode`] - Which checks are active
//! - [`ApiConfig`] - Settings for an API test

mod api;
mod check;
mod mode;
mod verdict;

pub use api::{ApiConfig, ApiType, DEFAULT_MODEL, DEFAULT_PROMPT, ParsedEnvFields};
pub use check::{
    CheckDefinition, CheckId, CheckInput, CheckResult, DEFAULT_SIGNATURE_MIN, Outcome, Submission,
};
pub use mode::VerificationMode;
pub use verdict::{GENUINE_THRESHOLD, SUSPECTED_THRESHOLD, Verdict};
