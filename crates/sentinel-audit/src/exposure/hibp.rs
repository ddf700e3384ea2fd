//! k-anonymity range client for the leaked-password API.
//!
//! The password is hashed locally and only a short digest prefix is ever
//! transmitted; the candidate list the API returns is disambiguated locally.

use thiserror::Error;

/// Error type for password exposure lookups. Callers above the audit boundary
/// never see this directly; the audit layer collapses it into
/// [`PasswordExposure::Unverified`](super::PasswordExposure::Unverified).
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ExposureError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("range response entry has an unparseable count: {0}")]
    MalformedEntry(String),
}

/// Hash the password with SHA-1 and split the uppercase hex digest into the
/// 5 character range prefix and 35 character suffix.
fn hash_password(password: &str) -> (String, String) {
    use sha1::{Digest, Sha1};

    let digest = format!("{:X}", Sha1::digest(password.as_bytes()));
    let (prefix, suffix) = digest.split_at(5);
    (prefix.to_string(), suffix.to_string())
}

/// Scan a range response for the computed suffix.
///
/// The response carries one `SUFFIX:COUNT` pair per line, uppercase hex.
/// Matching is an exact, case-sensitive comparison against our uppercase
/// suffix. No matching line confirms the password is not present and yields
/// `Ok(0)`; a matching line with an unparseable count is a malformed
/// response, not a zero.
fn scan_range_response(body: &str, target_suffix: &str) -> Result<u32, ExposureError> {
    match body
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(suffix, _)| *suffix == target_suffix)
    {
        Some((_, count)) => count
            .trim()
            .parse()
            .map_err(|_| ExposureError::MalformedEntry(count.trim().to_string())),
        None => Ok(0),
    }
}

/// Check password exposure using the k-anonymity model.
///
/// 1. Hash the password with SHA-1
/// 2. Send only the first 5 characters of the digest to the range API
/// 3. The API returns every known suffix sharing that prefix
/// 4. Scan the list locally for our suffix
///
/// Neither the password nor its full digest leaves the caller. Returns the
/// number of times the password appears in the corpus, 0 if absent.
pub(crate) async fn check_exposure(
    http_client: &reqwest::Client,
    password: &str,
    range_url: &str,
) -> Result<u32, ExposureError> {
    let (prefix, suffix) = hash_password(password);

    let url = format!("{range_url}/range/{prefix}");
    let body = http_client
        .get(&url)
        .send()
        .await
        .map_err(|e| e.without_url())?
        .error_for_status()
        .map_err(|e| e.without_url())?
        .text()
        .await
        .map_err(|e| e.without_url())?;

    scan_range_response(&body, &suffix)
}
