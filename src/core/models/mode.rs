//! Verification modes
//!
//! Selects which subset of the check table is run.

use serde::{Deserialize, Serialize};

use super::CheckId;

/// Verification mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationMode {
    /// Every check except thinking identity
    Quick,
    /// All checks
    #[default]
    Full,
}

impl VerificationMode {
    /// Whether the mode includes a given check
    #[must_use]
    pub const fn includes(self, id: CheckId) -> bool {
        match self {
            Self::Quick => !matches!(id, CheckId::ThinkingIdentity),
            Self::Full => true,
        }
    }
}

impl std::fmt::Display for VerificationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quick => write!(f, "quick"),
            Self::Full => write!(f, "full"),
        }
    }
}

impl std::str::FromStr for VerificationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quick" => Ok(Self::Quick),
            "full" => Ok(Self::Full),
            _ => Err(format!("Invalid mode: {s}. Use: quick, full")),
        }
    }
}
