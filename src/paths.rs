//! Centralized path definitions for ccverify
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.ccverify/
//! └── config.toml               # Verification defaults, API settings
//! ```
//!
//! The config location can be overridden with `--config` or the
//! `CCVERIFY_CONFIG` environment variable.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "CCVERIFY_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = ".ccverify";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global ccverify directory.
///
/// Returns `~/.ccverify/`, or `None` when there is no home directory.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(GLOBAL_DIR))
}

/// Get the config file path.
///
/// Returns `$CCVERIFY_CONFIG` when set and non-empty, otherwise
/// `~/.ccverify/config.toml`. `None` when neither is available.
#[must_use]
pub fn global_config() -> Option<PathBuf> {
    resolve_config(std::env::var_os(CONFIG_ENV), dirs::home_dir())
}

fn resolve_config(env_override: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    match env_override {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => home.map(|h| h.join(GLOBAL_DIR).join(GLOBAL_CONFIG_FILE)),
    }
}
