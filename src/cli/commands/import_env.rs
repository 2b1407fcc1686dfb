//! Import-env command - read API settings from shell export lines

use std::path::Path;

use anyhow::bail;

use ccverify::adapters::env::parse_env_exports;
use ccverify::config::Config;
use ccverify::output::{EnvImportResult, OutputMode, mask_secret};

use super::input::read_source;

/// Parse export lines and optionally persist them
pub fn import_env(
    file: Option<&str>,
    save: bool,
    config_path: &Path,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let text = read_source(file)?;

    let Some(fields) = parse_env_exports(&text) else {
        bail!(
            "No recognized variables. Expected ANTHROPIC_BASE_URL, ANTHROPIC_AUTH_TOKEN, \
             ANTHROPIC_API_KEY, OPENAI_BASE_URL or OPENAI_API_KEY"
        );
    };

    if save {
        // A malformed file is an error here, never replaced by defaults.
        let mut config = Config::try_load_from(config_path)?;
        config.apply_env_fields(&fields);
        config.save_to(config_path)?;
        log::info!("saved API settings to {}", config_path.display());
    }

    let result = EnvImportResult {
        api_type: fields.api_type,
        endpoint: fields.api_endpoint,
        key: fields.api_key.as_deref().map(mask_secret),
        saved: save,
    };
    result.render(mode);

    Ok(())
}
