//! Verdict tiers
//!
//! Maps an aggregate score onto a three-tier classification.

use serde::{Deserialize, Serialize};

/// Lowest score classified as genuine
pub const GENUINE_THRESHOLD: u32 = 85;

/// Lowest score classified as suspected
pub const SUSPECTED_THRESHOLD: u32 = 60;

/// Final classification of a verification run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Score of 85 or more
    Genuine,
    /// Score from 60 up to 84
    Suspected,
    /// Score below 60
    LikelyFake,
    /// Nothing has been verified yet
    #[default]
    Pending,
}

impl Verdict {
    /// Classify a score. Never returns [`Verdict::Pending`].
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= GENUINE_THRESHOLD {
            Self::Genuine
        } else if score >= SUSPECTED_THRESHOLD {
            Self::Suspected
        } else {
            Self::LikelyFake
        }
    }

    /// Whether the verdict counts as a pass overall
    #[must_use]
    pub const fn passes(self) -> bool {
        matches!(self, Self::Genuine | Self::Suspected)
    }

    /// Short headline for the verdict
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Genuine => "Genuine Claude Code",
            Self::Suspected => "Suspected Claude Code",
            Self::LikelyFake => "Likely not Claude Code",
            Self::Pending => "Awaiting verification",
        }
    }

    /// One-line explanation of the verdict
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Genuine => "All checks passed or nearly passed.",
            Self::Suspected => "Some checks fell short; review the source.",
            Self::LikelyFake => "Too few checks passed; high risk.",
            Self::Pending => "Provide the response details and run a verification.",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Genuine => write!(f, "genuine"),
            Self::Suspected => write!(f, "suspected"),
            Self::LikelyFake => write!(f, "likely_fake"),
            Self::Pending => write!(f, "pending"),
        }
    }
}
