use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct VerifyRequest {
    token: String,
}

/// Body for the 200 and 400 answers.
#[derive(Debug, Serialize)]
struct Verdict {
    success: bool,
    message: &'static str,
}

/// Body for the 500 answer.
#[derive(Debug, Serialize)]
struct Failure {
    error: String,
}

pub(crate) async fn verify_token(
    State(state): State<AppState>,
    body: Result<Json<VerifyRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            // Not a failed verification: the request never named a token.
            tracing::debug!(%rejection, "Rejecting malformed verify request");
            return (
                StatusCode::BAD_REQUEST,
                Json(Verdict {
                    success: false,
                    message: "request body must be JSON with a token field",
                }),
            )
                .into_response();
        }
    };

    match state.verifier.verify(&request.token).await {
        Ok(outcome) if outcome.success => (
            StatusCode::OK,
            Json(Verdict {
                success: true,
                message: "challenge verified",
            }),
        )
            .into_response(),
        Ok(outcome) => {
            tracing::debug!(codes = ?outcome.error_codes, "Token failed verification");
            (
                StatusCode::BAD_REQUEST,
                Json(Verdict {
                    success: false,
                    message: "challenge failed",
                }),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Challenge verification errored");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Failure {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
