// Risk tiers derived from the additive phishing score.

use serde::Serialize;

/// Scores at or above this are HIGH.
pub const HIGH_THRESHOLD: u32 = 8;
/// Scores at or above this (and below HIGH) are MEDIUM.
pub const MEDIUM_THRESHOLD: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Determine the tier from a phishing score.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= HIGH_THRESHOLD => RiskTier::High,
            s if s >= MEDIUM_THRESHOLD => RiskTier::Medium,
            _ => RiskTier::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
        }
    }

    /// The one-line verdict shown under the score.
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW RISK ✅ - This email appears safe.",
            RiskTier::Medium => "MEDIUM RISK ⚠ - Be cautious.",
            RiskTier::High => "HIGH RISK ⚠️ - Do NOT trust this email!",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
