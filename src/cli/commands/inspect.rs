//! Read-only commands: signature extraction, check and model listings

use ccverify::config::Config;
use ccverify::core::models::ApiType;
use ccverify::core::services::{active_checks, extract_signature_from_response};
use ccverify::output::{CheckInfo, CheckListResult, ModelListResult, OutputMode, SignatureResult};

use super::input::read_source;
use super::verify::resolve_mode;

/// Print the signature found in a response body
pub fn extract_signature(file: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let raw = read_source(file)?;
    SignatureResult::from(extract_signature_from_response(&raw)).render(mode);
    Ok(())
}

/// Print the active check table
pub fn checks(
    mode_flag: Option<&str>,
    skip_identity: bool,
    config: &Config,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let verification_mode = resolve_mode(mode_flag, config)?;
    let skip_identity = skip_identity || config.verify.skip_identity_checks;

    let checks: Vec<CheckInfo> = active_checks(verification_mode, skip_identity)
        .into_iter()
        .map(|c| CheckInfo {
            id: c.id,
            label: c.label.to_string(),
            weight: c.weight,
        })
        .collect();
    let total_weight = checks.iter().map(|c| c.weight).sum();

    CheckListResult {
        mode: verification_mode,
        skip_identity_checks: skip_identity,
        checks,
        total_weight,
    }
    .render(mode);
    Ok(())
}

/// Print suggested model names
pub fn models(api_type: Option<&str>, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let api_type: ApiType = match api_type {
        Some(t) => t.parse().map_err(anyhow::Error::msg)?,
        None => config.api.api_type,
    };

    ModelListResult {
        api_type,
        models: api_type.suggested_models().iter().map(ToString::to_string).collect(),
    }
    .render(mode);
    Ok(())
}
