use serde::{Deserialize, Serialize};

/// Result of checking password exposure against the leaked-password range API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "value")]
pub enum PasswordExposure {
    /// Successfully checked; the password appears in this many breaches.
    /// `Found(0)` means confirmed not present in the corpus.
    Found(u32),
    /// The range query failed, so exposure could not be determined. Distinct
    /// from `Found(0)`: "could not verify" must never be presented as
    /// "verified safe".
    Unverified(String),
}
