use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical representation of a single breach, regardless of the shape the
/// source reported it in.
///
/// Records are created by the directory client or the simulation dataset and
/// never mutated afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BreachRecord {
    /// Source identifier. Never empty.
    pub name: String,
    /// Date the breach occurred. Sources without a usable date get the
    /// configured sentinel date.
    pub breach_date: NaiveDate,
    /// Category tags for the data compromised in this breach. May be empty.
    pub data_classes: Vec<String>,
    /// Human readable description of the breach.
    pub description: String,
}

/// Fallback values used when a directory entry does not carry a usable field.
///
/// These materially change what the scoring engine sees, so they are
/// configuration rather than constants.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct NormalizationDefaults {
    /// Sentinel date assigned to entries without a parseable breach date.
    pub breach_date: NaiveDate,
    /// Category tags assumed for entries that do not list any.
    pub data_classes: Vec<String>,
    /// Placeholder description for entries without one.
    pub description: String,
}

impl Default for NormalizationDefaults {
    fn default() -> Self {
        Self {
            breach_date: NaiveDate::from_ymd_opt(2021, 1, 1)
                .expect("sentinel date should be valid"),
            data_classes: vec!["Email".to_string(), "Password".to_string()],
            description: "Public database leak.".to_string(),
        }
    }
}

/// A single entry of a directory response.
///
/// The public directory mixes bare source names with structured objects, so
/// both shapes deserialize through this one adapter instead of ad hoc type
/// checks downstream.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub(crate) enum SourceEntry {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        date: Option<String>,
        #[serde(default, rename = "dataClasses")]
        data_classes: Option<Vec<String>>,
        #[serde(default)]
        description: Option<String>,
    },
}

impl SourceEntry {
    /// Map this entry into the canonical record shape, filling gaps from
    /// `defaults`. Deterministic for identical payloads.
    pub(crate) fn normalize(self, defaults: &NormalizationDefaults) -> BreachRecord {
        match self {
            SourceEntry::Name(name) => BreachRecord {
                name,
                breach_date: defaults.breach_date,
                data_classes: defaults.data_classes.clone(),
                description: defaults.description.clone(),
            },
            SourceEntry::Detailed {
                name,
                date,
                data_classes,
                description,
            } => BreachRecord {
                name,
                breach_date: date
                    .as_deref()
                    .and_then(parse_source_date)
                    .unwrap_or(defaults.breach_date),
                data_classes: data_classes.unwrap_or_else(|| defaults.data_classes.clone()),
                description: description.unwrap_or_else(|| defaults.description.clone()),
            },
        }
    }
}

/// Directory dates come as `YYYY-MM`, occasionally as a full `YYYY-MM-DD`.
/// Month-only dates resolve to the first of the month.
fn parse_source_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> NormalizationDefaults {
        NormalizationDefaults::default()
    }

    #[test]
    fn test_normalize_bare_name() {
        let entry = SourceEntry::Name("ExampleSite".to_string());

        let record = entry.normalize(&defaults());

        assert_eq!(record.name, "ExampleSite");
        assert_eq!(
            record.breach_date,
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()
        );
        assert_eq!(record.data_classes, vec!["Email", "Password"]);
        assert_eq!(record.description, "Public database leak.");
    }

    #[test]
    fn test_normalize_structured_entry_with_month_date() {
        let entry: SourceEntry =
            serde_json::from_str(r#"{"name": "Canva", "date": "2019-05"}"#).unwrap();

        let record = entry.normalize(&defaults());

        assert_eq!(record.name, "Canva");
        assert_eq!(
            record.breach_date,
            NaiveDate::from_ymd_opt(2019, 5, 1).unwrap()
        );
    }

    #[test]
    fn test_normalize_unparseable_date_falls_back_to_sentinel() {
        let entry: SourceEntry =
            serde_json::from_str(r#"{"name": "Old", "date": "unknown"}"#).unwrap();

        let record = entry.normalize(&defaults());

        assert_eq!(
            record.breach_date,
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_normalize_full_date_is_kept() {
        let entry: SourceEntry =
            serde_json::from_str(r#"{"name": "Full", "date": "2016-05-17"}"#).unwrap();

        let record = entry.normalize(&defaults());

        assert_eq!(
            record.breach_date,
            NaiveDate::from_ymd_opt(2016, 5, 17).unwrap()
        );
    }

    #[test]
    fn test_string_and_object_entries_deserialize_through_one_adapter() {
        let entries: Vec<SourceEntry> =
            serde_json::from_str(r#"["BareSite", {"name": "Structured"}]"#).unwrap();

        let records: Vec<BreachRecord> = entries
            .into_iter()
            .map(|e| e.normalize(&defaults()))
            .collect();

        assert_eq!(records[0].name, "BareSite");
        assert_eq!(records[1].name, "Structured");
        // Both shapes pick up identical defaults
        assert_eq!(records[0].data_classes, records[1].data_classes);
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let payload = r#"{"name": "Zomato", "date": "2017-05"}"#;

        let first: SourceEntry = serde_json::from_str(payload).unwrap();
        let second: SourceEntry = serde_json::from_str(payload).unwrap();

        assert_eq!(
            first.normalize(&defaults()),
            second.normalize(&defaults())
        );
    }

    #[test]
    fn test_custom_defaults_are_honored() {
        let custom = NormalizationDefaults {
            breach_date: NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
            data_classes: vec!["Usernames".to_string()],
            description: "No details available.".to_string(),
        };

        let record = SourceEntry::Name("Site".to_string()).normalize(&custom);

        assert_eq!(
            record.breach_date,
            NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()
        );
        assert_eq!(record.data_classes, vec!["Usernames"]);
        assert_eq!(record.description, "No details available.");
    }
}
