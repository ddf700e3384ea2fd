use serde::{Deserialize, Serialize};

use crate::breach::BreachRecord;

use super::weights::{RiskThresholds, RiskWeights};

/// Ceiling for risk scores.
pub const MAX_RISK_SCORE: u8 = 100;

/// Qualitative tier derived from a risk score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    /// No breach exposure found.
    Secure,
    /// Some exposure, at or below the critical boundary.
    Moderate,
    /// Exposure above the critical boundary.
    Critical,
}

impl Severity {
    /// Classify a score against the configured tier boundaries.
    pub fn classify(score: u8, thresholds: &RiskThresholds) -> Self {
        if score == 0 {
            Severity::Secure
        } else if score <= thresholds.critical_over {
            Severity::Moderate
        } else {
            Severity::Critical
        }
    }
}

/// Aggregate a breach list into a risk score in `[0, MAX_RISK_SCORE]`.
///
/// Every data-class tag of every record contributes its configured weight
/// and the total is clamped. Pure over its inputs: record order cannot
/// affect the result, and identical lists always produce identical scores.
pub fn score(breaches: &[BreachRecord], weights: &RiskWeights) -> u8 {
    let total: u32 = breaches
        .iter()
        .flat_map(|breach| breach.data_classes.iter())
        .map(|tag| u32::from(weights.weight_of(tag)))
        .sum();

    total.min(u32::from(MAX_RISK_SCORE)) as u8
}
