// Phishing risk scoring: the rule table, the tiers, and the scanner that
// ties them together.

pub mod rules;
pub mod scanner;
pub mod tier;

pub use rules::{rules, Rule, Trigger};
pub use scanner::{scan, ScanError, ScanResult};
pub use tier::RiskTier;
