mod scoring;
mod weights;

pub use scoring::{MAX_RISK_SCORE, Severity, score};
pub use weights::{RiskThresholds, RiskWeights};
