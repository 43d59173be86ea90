use std::fmt;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Verdict returned by the challenge provider for one token.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyOutcome {
    pub success: bool,

    /// Provider diagnostics for failed verifications.
    #[serde(default, rename = "error-codes")]
    pub error_codes: Vec<String>,
}

/// Server-side re-verification of bot-challenge widget tokens.
///
/// Stateless: each call is one independent request to the provider's
/// verification API. The secret is held by the server process and never
/// reaches the storefront.
#[derive(Clone)]
pub struct ChallengeVerifier {
    verify_url: Url,
    secret: Option<String>,
    client: reqwest::Client,
}

impl fmt::Debug for ChallengeVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChallengeVerifier")
            .field("verify_url", &self.verify_url.as_str())
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl ChallengeVerifier {
    #[must_use]
    pub fn new(verify_url: Url, secret: Option<String>) -> Self {
        Self {
            verify_url,
            secret,
            client: crate::http_client().clone(),
        }
    }

    /// Re-verifies one widget token.
    ///
    /// The provider expects the secret and the token as query parameters on
    /// a POST with an empty body, and answers with a JSON verdict.
    pub async fn verify(&self, token: &str) -> Result<VerifyOutcome, VerifyError> {
        let Some(secret) = self.secret.as_deref() else {
            return Err(VerifyError::MissingSecret);
        };

        let response = self
            .client
            .post(self.verify_url.clone())
            .query(&[("secret", secret), ("response", token)])
            .send()
            .await
            .map_err(VerifyError::Transport)?;

        let status = response.status();
        let outcome = response
            .json::<VerifyOutcome>()
            .await
            .map_err(VerifyError::MalformedResponse)?;
        tracing::debug!(%status, success = outcome.success, "Challenge verification answered");
        Ok(outcome)
    }
}

#[derive(Debug, Error)]
pub enum VerifyError {
    /// No provider secret in the environment; detected before any network
    /// call is made.
    #[error("challenge secret is not configured")]
    MissingSecret,

    /// The provider could not be reached.
    #[error("challenge verification request failed")]
    Transport(#[source] reqwest::Error),

    /// The provider answered with something that is not a verdict.
    #[error("challenge provider returned an unreadable response")]
    MalformedResponse(#[source] reqwest::Error),
}
