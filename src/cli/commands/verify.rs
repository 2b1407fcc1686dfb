//! Verify command - score a captured response

use anyhow::bail;

use ccverify::config::Config;
use ccverify::core::models::{Submission, Verdict, VerificationMode};
use ccverify::core::services::verify_submission;
use ccverify::output::{OutputMode, VerifyReport};

use super::input::{read_source, text_or_file};
use crate::cli::app::VerifyArgs;

/// Verify a response assembled from flags, files and config defaults
pub fn verify(args: &VerifyArgs, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let verification_mode = resolve_mode(args.mode.as_deref(), config)?;

    let response_json = match args.response.as_deref() {
        Some(path) => read_source(Some(path))?,
        None => String::new(),
    };

    let submission = Submission {
        signature: args.signature.clone().unwrap_or_default(),
        signature_min: args.signature_min.unwrap_or(config.verify.signature_min),
        response_json,
        answer_text: text_or_file(args.answer.as_deref(), args.answer_file.as_deref())?,
        thinking_text: text_or_file(args.thinking.as_deref(), args.thinking_file.as_deref())?,
        skip_identity_checks: args.skip_identity || config.verify.skip_identity_checks,
    };

    run(&submission, verification_mode, args.ci, mode)
}

/// Evaluate a submission, render the report, and fail in CI on a bad verdict
pub fn run(
    submission: &Submission,
    verification_mode: VerificationMode,
    ci: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let evaluation = verify_submission(submission, verification_mode);
    log::debug!("score {} -> {}", evaluation.score, evaluation.verdict);

    VerifyReport::new(&evaluation, verification_mode).render(mode);

    if ci && evaluation.verdict == Verdict::LikelyFake {
        bail!("Verdict is likely_fake (score {})", evaluation.score);
    }
    Ok(())
}

/// Mode from the flag, falling back to the configured default
pub fn resolve_mode(flag: Option<&str>, config: &Config) -> anyhow::Result<VerificationMode> {
    match flag {
        Some(m) => m.parse().map_err(anyhow::Error::msg),
        None => Ok(config.verify.mode),
    }
}
