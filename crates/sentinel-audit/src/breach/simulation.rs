use chrono::NaiveDate;

use super::breach_record::BreachRecord;

/// Fixed sample dataset substituted for the demo identifier when the live
/// directory is unreachable or has no matches.
///
/// Version 1: four well-known historical breaches, in this order. Consumers
/// rely on the count and ordering staying stable across releases; revisions
/// bump the version in this doc.
pub fn sample_breaches() -> Vec<BreachRecord> {
    vec![
        record(
            "LinkedIn",
            (2016, 5, 17),
            &["Email", "Passwords", "Job titles"],
            "164 million accounts exposed in a massive professional network hack.",
        ),
        record(
            "Adobe",
            (2013, 10, 4),
            &["Email", "Hints", "Usernames"],
            "153 million accounts exposed affecting Creative Cloud users.",
        ),
        record(
            "Zomato",
            (2017, 5, 18),
            &["Email", "Passwords"],
            "17 million user records leaked from the food delivery giant.",
        ),
        record(
            "Canva",
            (2019, 5, 24),
            &["Email", "Names", "Locations"],
            "Graphic design platform database compromised.",
        ),
    ]
}

fn record(
    name: &str,
    (year, month, day): (i32, u32, u32),
    data_classes: &[&str],
    description: &str,
) -> BreachRecord {
    BreachRecord {
        name: name.to_string(),
        breach_date: NaiveDate::from_ymd_opt(year, month, day)
            .expect("sample dataset dates should be valid"),
        data_classes: data_classes.iter().map(|c| c.to_string()).collect(),
        description: description.to_string(),
    }
}
