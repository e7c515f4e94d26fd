//! Maturity classification.

use serde::{Deserialize, Serialize};

/// Overall scores strictly above this are `High`.
pub const HIGH_THRESHOLD: f64 = 7.5;
/// Overall scores strictly above this (and not `High`) are `Medium`.
pub const MEDIUM_THRESHOLD: f64 = 4.5;

/// Three-tier maturity classification, ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaturityLevel {
    Low,
    Medium,
    High,
}

impl MaturityLevel {
    /// Classify an overall score. Boundaries fall into the lower tier.
    #[must_use]
    pub fn from_score(overall: f64) -> Self {
        if overall > HIGH_THRESHOLD {
            Self::High
        } else if overall > MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// One-line diagnostic synthesis shown next to the score.
    #[must_use]
    pub const fn synthesis(&self) -> &'static str {
        match self {
            Self::High => "Brand Pioneer. You are utilizing unit-level data as a strategic growth lever, ensuring uncompromised authenticity.",
            Self::Medium => "Transitionary State. Foundational steps have been taken, but data silos still introduce systemic risk.",
            Self::Low => "Defensive Posture. Immediate implementation of the Luban Lock digital layer is required to protect brand equity.",
        }
    }
}

impl std::fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
