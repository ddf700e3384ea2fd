use sentinel_core::Client;

use crate::{
    breach::{self, BreachLookup},
    exposure::{self, PasswordExposure},
    risk::{self, Severity},
};

use super::types::{AuditOptions, AuditRequest, AuditResult};

/// Client for auditing identities against breach-intelligence sources.
pub struct AuditClient {
    pub(crate) client: Client,
}

impl AuditClient {
    /// Look up an email in the breach directory.
    ///
    /// Failures come back as [`BreachLookup::Failed`] rather than an error;
    /// the caller decides policy. See [`BreachLookup`] for the full contract.
    pub async fn fetch_breaches(&self, email: &str, options: &AuditOptions) -> BreachLookup {
        let internal = &self.client.internal;
        breach::fetch_breaches(
            internal.get_http_client(),
            email,
            &internal.get_settings().directory_url,
            &options.normalization,
        )
        .await
    }

    /// Run the k-anonymity exposure check for a password.
    ///
    /// Query failures are captured as [`PasswordExposure::Unverified`], never
    /// conflated with a confirmed zero count.
    pub async fn check_exposure(&self, password: &str) -> PasswordExposure {
        let internal = &self.client.internal;
        match exposure::check_exposure(
            internal.get_http_client(),
            password,
            &internal.get_settings().range_url,
        )
        .await
        {
            Ok(count) => PasswordExposure::Found(count),
            Err(e) => PasswordExposure::Unverified(e.to_string()),
        }
    }

    /// Run a full audit for one request.
    ///
    /// The directory lookup and, when a password was supplied, the exposure
    /// check run concurrently; neither depends on the other. A lookup that
    /// failed or came back empty is replaced by the simulation dataset only
    /// when the email matches the configured demo identifier. The risk score
    /// is then computed from whichever breach list was selected.
    ///
    /// Remote failures never surface as errors here; by this point they have
    /// been collapsed into the tagged states carried by the result.
    pub async fn run(&self, request: AuditRequest, options: AuditOptions) -> AuditResult {
        let password = request.password.as_deref().filter(|p| !p.is_empty());

        let lookup = self.fetch_breaches(&request.email, &options);
        let exposure = async {
            match password {
                Some(password) => Some(self.check_exposure(password).await),
                None => None,
            }
        };
        let (lookup, password_exposure) = tokio::join!(lookup, exposure);

        let (breaches, simulated) = match lookup {
            BreachLookup::Found(breaches) => (breaches, false),
            BreachLookup::Empty | BreachLookup::Failed(_)
                if request.email == options.demo_email =>
            {
                tracing::debug!("substituting simulation dataset for the demo identifier");
                (breach::sample_breaches(), true)
            }
            BreachLookup::Empty | BreachLookup::Failed(_) => (Vec::new(), false),
        };

        let risk_score = risk::score(&breaches, &options.weights);
        let severity = Severity::classify(risk_score, &options.thresholds);

        AuditResult {
            email: request.email,
            breaches,
            risk_score,
            severity,
            simulated,
            password_exposure,
        }
    }
}

/// Extension trait adding audit operations to [`Client`].
pub trait AuditClientExt {
    /// Audit related operations.
    fn audit(&self) -> AuditClient;
}

impl AuditClientExt for Client {
    fn audit(&self) -> AuditClient {
        AuditClient {
            client: self.clone(),
        }
    }
}
