// JSON report: the scan result plus a timestamp, for piping into other tools.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::scoring::{RiskTier, ScanResult};

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub score: u32,
    pub tier: RiskTier,
    pub reasons: Vec<String>,
    pub scanned_at: DateTime<Utc>,
}

impl ScanReport {
    pub fn new(result: &ScanResult, scanned_at: DateTime<Utc>) -> Self {
        Self {
            score: result.score,
            tier: result.tier,
            reasons: result.reasons.clone(),
            scanned_at,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize scan report")
    }
}
