//! HTTP clients for Merchstand's hosted collaborators.
//!
//! Two out-of-process services do the heavy lifting for the storefront:
//!
//! - [`RelayClient`] forwards completed forms to the hosted form relay,
//!   which turns them into email/notifications. The [`FormRelay`] trait is
//!   the seam the submission gate sends through, so tests can substitute
//!   an in-memory double.
//! - [`ChallengeVerifier`] re-checks a bot-challenge widget token against
//!   the challenge provider's verification API using a server-held secret.
//!
//! Both clients issue exactly one request per call: no retry, no caching,
//! no rate limiting. Timeouts are whatever the shared client's transport
//! defaults provide.

mod challenge;
mod form;

pub use challenge::{ChallengeVerifier, VerifyError, VerifyOutcome};
pub use form::{FormRelay, RelayClient, RelayError};

use std::sync::OnceLock;
use std::time::Duration;

const CONNECT_TIMEOUT_SECS: u64 = 30;
const TCP_KEEPALIVE_SECS: u64 = 60;
const POOL_MAX_IDLE_PER_HOST: usize = 100;
const POOL_IDLE_TIMEOUT_SECS: u64 = 90;

/// Shared HTTP client for all relay and verification calls.
pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        base_client_builder().build().unwrap_or_else(|e| {
            tracing::error!("Failed to build tuned HTTP client: {e}. Falling back to defaults.");
            reqwest::Client::new()
        })
    })
}

fn base_client_builder() -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::none())
        .tcp_keepalive(Some(Duration::from_secs(TCP_KEEPALIVE_SECS)))
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .pool_idle_timeout(Some(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS)))
}
