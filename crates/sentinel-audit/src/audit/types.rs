use serde::{Deserialize, Serialize};

use crate::{
    breach::{BreachRecord, NormalizationDefaults},
    exposure::PasswordExposure,
    risk::{RiskThresholds, RiskWeights, Severity},
};

/// A single audit request.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuditRequest {
    /// Email address to look up. Passed through to the directory as-is; the
    /// upstream service is the source of truth for validity.
    pub email: String,
    /// Optional password to run through the exposure check. An empty string
    /// is treated as absent.
    pub password: Option<String>,
}

/// Options for configuring an audit.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditOptions {
    /// Risk weight table. Defaults to the v1 table.
    pub weights: RiskWeights,
    /// Severity tier boundaries.
    pub thresholds: RiskThresholds,
    /// Fallback values for directory entry normalization.
    pub normalization: NormalizationDefaults,
    /// The only email the simulation dataset may be substituted for. The
    /// fallback never activates for any other address.
    pub demo_email: String,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            weights: RiskWeights::default(),
            thresholds: RiskThresholds::default(),
            normalization: NormalizationDefaults::default(),
            demo_email: "demo@test.com".to_string(),
        }
    }
}

/// Immutable outcome of one audit request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// The audited email address.
    pub email: String,
    /// Canonical breach records, in the order the source returned them.
    pub breaches: Vec<BreachRecord>,
    /// Aggregated risk score in `[0, 100]`, derived purely from `breaches`
    /// and the configured weights.
    pub risk_score: u8,
    /// Tier classification of `risk_score`.
    pub severity: Severity,
    /// True when `breaches` is the simulation dataset rather than live data.
    /// Simulated and live records are never mixed.
    pub simulated: bool,
    /// Exposure check outcome; `None` when no password was supplied.
    pub password_exposure: Option<PasswordExposure>,
}
