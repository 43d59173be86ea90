//! Merchstand server binary.
//!
//! Boots tracing, loads settings, and serves the token re-verification
//! endpoint on the configured address. The storefront session core is a
//! library concern; this process only hosts the one HTTP route.

use anyhow::{Context, Result};
use merchstand_config::{CHALLENGE_SECRET_ENV, Settings};
use merchstand_relay::ChallengeVerifier;
use merchstand_server::{AppState, router};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use url::Url;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let settings = Settings::load().context("failed to load settings")?;

    let verify_url = Url::parse(settings.challenge.verify_url())
        .context("challenge verify_url is not a valid URL")?;
    let secret = settings.challenge.secret();
    if secret.is_none() {
        // Not fatal: the endpoint answers 500 per request instead, matching
        // the deployed behavior when the secret is absent.
        tracing::warn!(env = CHALLENGE_SECRET_ENV, "Challenge secret not set");
    }
    let verifier = ChallengeVerifier::new(verify_url, secret);

    let bind_addr = settings.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %listener.local_addr()?, "Serving token re-verification endpoint");

    merchstand_server::serve(listener, router(AppState::new(verifier)))
        .await
        .context("server terminated with an error")?;
    Ok(())
}
