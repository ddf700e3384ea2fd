use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These settings specify the various targets and behavior of the
/// Sentinel Client. They are optional and uneditable once the client is initialized.
///
/// Defaults to
///
/// ```
/// # use sentinel_core::ClientSettings;
/// let settings = ClientSettings {
///     directory_url: "https://leakcheck.io/api/public".to_string(),
///     range_url: "https://api.pwnedpasswords.com".to_string(),
///     user_agent: "Sentinel Rust-SDK".to_string(),
///     request_timeout_secs: 5,
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The breach directory endpoint queried by email. Defaults to `https://leakcheck.io/api/public`
    pub directory_url: String,
    /// The base url of the leaked-password range API. Defaults to `https://api.pwnedpasswords.com`
    pub range_url: String,
    /// The user_agent sent with every request. Defaults to `Sentinel Rust-SDK`
    pub user_agent: String,
    /// Per-request timeout in seconds. A remote call that exceeds it yields its failure state
    /// instead of blocking the audit. Defaults to 5
    pub request_timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            directory_url: "https://leakcheck.io/api/public".into(),
            range_url: "https://api.pwnedpasswords.com".into(),
            user_agent: "Sentinel Rust-SDK".into(),
            request_timeout_secs: 5,
        }
    }
}
