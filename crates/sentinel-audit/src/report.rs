//! Stable export representation of an audit for report-rendering
//! collaborators.
//!
//! These are duplicated from the internal audit models to keep the reporting
//! API stable when the result shape changes. Layout and formatting are the
//! renderer's concern.

use serde::{Deserialize, Serialize};

use crate::{AuditResult, PasswordExposure, Severity};

/// Verification state of the supplied password, as a renderer should present
/// it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "value")]
pub enum PasswordStatus {
    /// No password was supplied with the request.
    NotChecked,
    /// Confirmed not present in the exposure corpus.
    Clean,
    /// Confirmed exposed this many times.
    Exposed(u32),
    /// The check failed and exposure is unknown. Rendering this as "safe"
    /// is a correctness bug.
    Unverified,
}

/// Summary consumed by report renderers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Audited identifier.
    pub target: String,
    /// Risk score in `[0, 100]`.
    pub risk_score: u8,
    /// Tier classification of the score.
    pub severity: Severity,
    /// Whether the breach list is the simulation dataset.
    pub simulated: bool,
    /// Password verification state.
    pub password_status: PasswordStatus,
    /// Breach source names, in result order.
    pub breach_names: Vec<String>,
}

impl From<&AuditResult> for ReportSummary {
    fn from(result: &AuditResult) -> Self {
        let password_status = match &result.password_exposure {
            None => PasswordStatus::NotChecked,
            Some(PasswordExposure::Found(0)) => PasswordStatus::Clean,
            Some(PasswordExposure::Found(count)) => PasswordStatus::Exposed(*count),
            Some(PasswordExposure::Unverified(_)) => PasswordStatus::Unverified,
        };

        Self {
            target: result.email.clone(),
            risk_score: result.risk_score,
            severity: result.severity,
            simulated: result.simulated,
            password_status,
            breach_names: result.breaches.iter().map(|b| b.name.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_breaches;

    fn result_with(password_exposure: Option<PasswordExposure>) -> AuditResult {
        AuditResult {
            email: "demo@test.com".to_string(),
            breaches: sample_breaches(),
            risk_score: 100,
            severity: Severity::Critical,
            simulated: true,
            password_exposure,
        }
    }

    #[test]
    fn test_summary_carries_target_score_and_names() {
        let summary = ReportSummary::from(&result_with(None));

        assert_eq!(summary.target, "demo@test.com");
        assert_eq!(summary.risk_score, 100);
        assert_eq!(summary.severity, Severity::Critical);
        assert!(summary.simulated);
        assert_eq!(
            summary.breach_names,
            vec!["LinkedIn", "Adobe", "Zomato", "Canva"]
        );
    }

    #[test]
    fn test_password_status_mapping() {
        assert_eq!(
            ReportSummary::from(&result_with(None)).password_status,
            PasswordStatus::NotChecked
        );
        assert_eq!(
            ReportSummary::from(&result_with(Some(PasswordExposure::Found(0)))).password_status,
            PasswordStatus::Clean
        );
        assert_eq!(
            ReportSummary::from(&result_with(Some(PasswordExposure::Found(50000))))
                .password_status,
            PasswordStatus::Exposed(50000)
        );
    }

    #[test]
    fn test_unverified_is_never_presented_as_clean() {
        let summary = ReportSummary::from(&result_with(Some(PasswordExposure::Unverified(
            "timed out".to_string(),
        ))));

        assert_eq!(summary.password_status, PasswordStatus::Unverified);
        assert_ne!(summary.password_status, PasswordStatus::Clean);
    }
}
