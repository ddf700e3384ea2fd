#![doc = include_str!("../README.md")]

mod audit;
mod breach;
mod exposure;
mod report;
mod risk;

pub use audit::{AuditClient, AuditClientExt, AuditOptions, AuditRequest, AuditResult};
pub use breach::{BreachLookup, BreachRecord, NormalizationDefaults, sample_breaches};
pub use exposure::{ExposureError, PasswordExposure};
pub use report::{PasswordStatus, ReportSummary};
pub use risk::{MAX_RISK_SCORE, RiskThresholds, RiskWeights, Severity, score};
