//! Persistent configuration
//!
//! Holds verification defaults and API test settings.
//! Config is stored at `~/.ccverify/config.toml` unless overridden.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::{
    ApiConfig, ApiType, DEFAULT_MODEL, DEFAULT_PROMPT, DEFAULT_SIGNATURE_MIN, ParsedEnvFields,
    VerificationMode,
};
use crate::paths;

/// ccverify configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Verification defaults
    #[serde(default)]
    pub verify: VerifyConfig,
    /// API test settings
    #[serde(default)]
    pub api: ApiSettings,
}

/// Verification defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Minimum signature length
    pub signature_min: usize,
    /// Mode used when none is given
    pub mode: VerificationMode,
    /// Skip identity checks by default
    pub skip_identity_checks: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            signature_min: DEFAULT_SIGNATURE_MIN,
            mode: VerificationMode::Full,
            skip_identity_checks: false,
        }
    }
}

/// API test settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Request shape and header scheme
    pub api_type: ApiType,
    /// Endpoint URL
    #[serde(skip_serializing_if = "String::is_empty")]
    pub endpoint: String,
    /// API key
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    /// Model name
    pub model: String,
    /// Test prompt
    pub prompt: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_type: ApiType::Anthropic,
            endpoint: String::new(),
            key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        paths::global_config().ok_or_else(|| {
            anyhow::anyhow!(
                "could not determine the home directory; pass --config or set {}",
                paths::CONFIG_ENV
            )
        })
    }

    /// Load config from `path`. Missing or malformed files yield defaults.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        Self::try_load_from(path).unwrap_or_else(|e| {
            log::warn!("ignoring config {}: {e:#}", path.display());
            Self::default()
        })
    }

    /// Load config from `path`. A missing file yields defaults; an
    /// unreadable or malformed one is an error.
    pub fn try_load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("could not read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("malformed config {}", path.display()))
    }

    /// Save config to `path`, creating parent directories.
    ///
    /// The file holds the API key, so on Unix it is readable by the owner only.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Merge imported environment fields into the API settings
    pub fn apply_env_fields(&mut self, fields: &ParsedEnvFields) {
        if let Some(api_type) = fields.api_type {
            self.api.api_type = api_type;
        }
        if let Some(endpoint) = &fields.api_endpoint {
            self.api.endpoint.clone_from(endpoint);
        }
        if let Some(key) = &fields.api_key {
            self.api.key.clone_from(key);
        }
    }

    /// API settings as a request config
    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            api_type: self.api.api_type,
            endpoint: self.api.endpoint.clone(),
            key: self.api.key.clone(),
            model: self.api.model.clone(),
            prompt: self.api.prompt.clone(),
        }
    }
}
