use super::client_settings::ClientSettings;

/// Shared state behind a [`Client`](super::Client). Sub-clients reach the HTTP
/// client and settings through this struct; nothing in it is mutable after
/// construction.
#[derive(Debug)]
pub struct InternalClient {
    pub(crate) settings: ClientSettings,
    pub(crate) http_client: reqwest::Client,
}

impl InternalClient {
    pub fn get_http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    pub fn get_settings(&self) -> &ClientSettings {
        &self.settings
    }
}
