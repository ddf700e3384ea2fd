use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Weight table mapping data-category tags to risk points.
///
/// This table is the single source of truth for the product's risk
/// semantics: changing a weight changes every score the engine produces, so
/// revisions are recorded here.
///
/// Version 1 of the default table:
///
/// | tag                     | points |
/// |-------------------------|--------|
/// | `Phone`                 | 50     |
/// | `Passwords`, `Password` | 30     |
/// | `Email`                 | 10     |
/// | anything else           | 15     |
///
/// Tag matching is exact-string. Both the plural and singular password tags
/// are listed because live directory entries are normalized with the
/// singular form while curated datasets use the plural.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RiskWeights {
    /// Points awarded per recognized tag.
    pub table: HashMap<String, u8>,
    /// Points awarded for tags not present in the table.
    pub default_weight: u8,
}

impl RiskWeights {
    /// Weight of a single tag.
    pub fn weight_of(&self, tag: &str) -> u8 {
        self.table.get(tag).copied().unwrap_or(self.default_weight)
    }
}

impl Default for RiskWeights {
    fn default() -> Self {
        let table = [
            ("Phone", 50),
            ("Passwords", 30),
            ("Password", 30),
            ("Email", 10),
        ]
        .into_iter()
        .map(|(tag, weight)| (tag.to_string(), weight))
        .collect();

        Self {
            table,
            default_weight: 15,
        }
    }
}

/// Severity tier boundaries.
///
/// Kept out of the scoring function so products can tune presentation tiers
/// without touching risk semantics.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RiskThresholds {
    /// Scores strictly above this value classify as critical; nonzero scores
    /// up to and including it as moderate; zero as secure.
    pub critical_over: u8,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self { critical_over: 50 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_v1() {
        let weights = RiskWeights::default();

        assert_eq!(weights.weight_of("Phone"), 50);
        assert_eq!(weights.weight_of("Passwords"), 30);
        assert_eq!(weights.weight_of("Password"), 30);
        assert_eq!(weights.weight_of("Email"), 10);
        assert_eq!(weights.weight_of("Job titles"), 15);
    }

    #[test]
    fn test_tag_matching_is_exact_string() {
        let weights = RiskWeights::default();

        // Case or whitespace variants fall back to the default weight
        assert_eq!(weights.weight_of("phone"), 15);
        assert_eq!(weights.weight_of("Email "), 15);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let weights: RiskWeights = serde_json::from_str("{}").unwrap();
        let thresholds: RiskThresholds = serde_json::from_str("{}").unwrap();

        assert_eq!(weights, RiskWeights::default());
        assert_eq!(thresholds.critical_over, 50);
    }
}
