//! Breach directory lookup.
//!
//! Queries the public directory by email and normalizes the heterogeneous
//! response entries into canonical [`BreachRecord`]s.

use sentinel_core::ApiError;
use serde::{Deserialize, Serialize};

use super::breach_record::{BreachRecord, NormalizationDefaults, SourceEntry};

/// Outcome of a breach directory lookup.
///
/// Failure is a first-class state here rather than an error: the aggregator
/// decides policy (simulation fallback vs. empty result), so nothing is
/// raised to the caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "value")]
pub enum BreachLookup {
    /// The directory returned at least one source for the email.
    Found(Vec<BreachRecord>),
    /// The directory was reachable and reported no matches. Not an error.
    Empty,
    /// Transport error, non-success status, or undecodable response.
    Failed(String),
}

/// Wire model of the directory response.
#[derive(Deserialize, Debug)]
struct DirectoryResponse {
    success: bool,
    #[serde(default)]
    sources: Option<Vec<SourceEntry>>,
}

/// Look up an email in the breach directory.
///
/// All failure modes collapse into [`BreachLookup::Failed`]; a reachable
/// directory with no matches is [`BreachLookup::Empty`]. Given identical
/// upstream payloads the normalized output is identical.
pub(crate) async fn fetch_breaches(
    http_client: &reqwest::Client,
    email: &str,
    directory_url: &str,
    defaults: &NormalizationDefaults,
) -> BreachLookup {
    match query_directory(http_client, email, directory_url).await {
        Ok(response) => match response.sources {
            Some(sources) if response.success && !sources.is_empty() => BreachLookup::Found(
                sources
                    .into_iter()
                    .map(|entry| entry.normalize(defaults))
                    .collect(),
            ),
            _ => BreachLookup::Empty,
        },
        Err(e) => {
            tracing::warn!("breach directory lookup failed: {e}");
            BreachLookup::Failed(e.to_string())
        }
    }
}

async fn query_directory(
    http_client: &reqwest::Client,
    email: &str,
    directory_url: &str,
) -> Result<DirectoryResponse, ApiError> {
    // The email lives in the query string, so strip URLs from any reqwest
    // error before it can reach logs.
    let response = http_client
        .get(directory_url)
        .query(&[("check", email)])
        .send()
        .await
        .map_err(|e| e.without_url())?;

    let status = response.status();
    let body = response.text().await.map_err(|e| e.without_url())?;

    if !status.is_success() {
        return Err(ApiError::ResponseContent {
            status,
            message: body,
        });
    }

    Ok(serde_json::from_str(&body)?)
}
