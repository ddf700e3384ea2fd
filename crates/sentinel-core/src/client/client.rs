use std::{sync::Arc, time::Duration};

use reqwest::header::{self, HeaderValue};

use crate::client::{client_settings::ClientSettings, internal::InternalClient};

/// The main struct to interact with the Sentinel SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance, so all shared state lives behind the Arc.
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new Sentinel client, using the default settings when `None` is provided.
    pub fn new(settings_input: Option<ClientSettings>) -> Self {
        let settings = settings_input.unwrap_or_default();

        let headers = build_default_headers(&settings);

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .expect("HTTP Client build should not fail");

        Self {
            internal: Arc::new(InternalClient {
                settings,
                http_client,
            }),
        }
    }
}

/// Build default headers for the Sentinel HttpClient
fn build_default_headers(settings: &ClientSettings) -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();

    headers.append(
        header::USER_AGENT,
        HeaderValue::from_str(&settings.user_agent)
            .expect("User agent should be a valid header value"),
    );

    headers
}
