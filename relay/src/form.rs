use merchstand_types::FormPayload;
use thiserror::Error;
use url::Url;

/// The seam a submission gate sends through.
///
/// Implemented by [`RelayClient`] for the hosted relay and by in-memory
/// doubles in tests. Static dispatch only; the gate is generic over it.
#[allow(async_fn_in_trait)]
pub trait FormRelay {
    /// Forwards one completed form. Exactly one outbound request.
    async fn forward(&self, payload: &FormPayload) -> Result<(), RelayError>;
}

/// Client for the hosted form relay.
///
/// The relay accepts a JSON body of the form fields plus a `_subject`
/// discriminator and answers 2xx when it queued the notification.
#[derive(Debug, Clone)]
pub struct RelayClient {
    endpoint: Url,
    client: reqwest::Client,
}

impl RelayClient {
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            client: crate::http_client().clone(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl FormRelay for RelayClient {
    async fn forward(&self, payload: &FormPayload) -> Result<(), RelayError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&payload.relay_body())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(form = %payload.kind(), %status, "Relay accepted submission");
            return Ok(());
        }

        // The relay reports failures as JSON; fall back to an empty object
        // when the body is something else.
        let detail = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or_else(|_| serde_json::json!({}));
        tracing::warn!(form = %payload.kind(), %status, "Relay rejected submission");
        Err(RelayError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    /// The relay answered with a non-success status.
    #[error("relay rejected the submission with status {status}")]
    Rejected {
        status: u16,
        /// The relay's JSON error payload, `{}` when unparsable.
        detail: serde_json::Value,
    },

    /// The relay could not be reached.
    #[error("relay request failed")]
    Transport(#[from] reqwest::Error),
}
