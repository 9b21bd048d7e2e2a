// The scanner: normalize once, walk the rule table, sum the weights.
//
// This is a pure function of its input. Nothing is cached or retained
// between calls, so it is safe to call from anywhere.

use tracing::{debug, info};

use super::rules::rules;
use super::tier::RiskTier;

/// Why a scan was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("Please paste or load an email before scanning.")]
    EmptyInput,
}

/// The outcome of scanning one email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub score: u32,
    /// Reasons for every rule that fired, in rule-table order.
    pub reasons: Vec<String>,
    pub tier: RiskTier,
}

impl ScanResult {
    /// True when no rule fired.
    pub fn is_clean(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// Score email text against the fixed rule table.
///
/// Matching is case-insensitive. Every rule is evaluated and nothing is
/// deduplicated: text with both "http://" and "https://" links scores both.
pub fn scan(text: &str) -> Result<ScanResult, ScanError> {
    if text.trim().is_empty() {
        return Err(ScanError::EmptyInput);
    }

    let normalized = text.to_lowercase();
    let mut score = 0;
    let mut reasons = Vec::new();

    for rule in rules() {
        if rule.matches(&normalized) {
            debug!(trigger = %rule.trigger, weight = rule.weight, "rule fired");
            score += rule.weight;
            reasons.push(rule.reason());
        }
    }

    let tier = RiskTier::from_score(score);
    info!(score, %tier, triggered = reasons.len(), "scan complete");

    Ok(ScanResult {
        score,
        reasons,
        tier,
    })
}
