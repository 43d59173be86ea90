//! HTTP endpoint re-verifying bot-challenge tokens server-side.
//!
//! One route, `POST /api/verify-token`, takes `{ "token": ... }` and asks
//! the challenge provider for a verdict through
//! [`merchstand_relay::ChallengeVerifier`]:
//!
//! - provider says the token is good: `200 { "success": true, ... }`
//! - provider says it is not: `400 { "success": false, ... }`
//! - the verification call itself fails (missing secret, transport,
//!   unreadable provider response): `500 { "error": ... }`
//! - the request body is not JSON with a token: `400`, kept distinct from
//!   a failed verification
//!
//! The endpoint is stateless and shares nothing with the storefront
//! session; each request is one independent provider call with no retry,
//! caching, or rate limiting.

mod verify;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use merchstand_relay::ChallengeVerifier;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<ChallengeVerifier>,
}

impl AppState {
    #[must_use]
    pub fn new(verifier: ChallengeVerifier) -> Self {
        Self {
            verifier: Arc::new(verifier),
        }
    }
}

/// Builds the endpoint router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/verify-token", post(verify::verify_token))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves `router` on `listener` until the process is interrupted.
pub async fn serve(listener: tokio::net::TcpListener, router: Router) -> std::io::Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
