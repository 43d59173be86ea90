//! Integration tests for challenge token re-verification against a stubbed
//! provider.

use merchstand_relay::{ChallengeVerifier, VerifyError};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn verify_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/siteverify", server.uri())).expect("valid verify url")
}

#[tokio::test]
async fn provider_success_yields_a_successful_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/siteverify"))
        .and(query_param("secret", "test-secret"))
        .and(query_param("response", "tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "hostname": "localhost",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let verifier = ChallengeVerifier::new(verify_url(&server), Some("test-secret".to_string()));
    let outcome = verifier.verify("tok-abc").await.expect("provider answers");
    assert!(outcome.success);
    assert!(outcome.error_codes.is_empty());
}

#[tokio::test]
async fn provider_failure_carries_error_codes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/siteverify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "error-codes": ["invalid-input-response"],
        })))
        .mount(&server)
        .await;

    let verifier = ChallengeVerifier::new(verify_url(&server), Some("test-secret".to_string()));
    let outcome = verifier.verify("stale-token").await.expect("provider answers");
    assert!(!outcome.success);
    assert_eq!(outcome.error_codes, ["invalid-input-response"]);
}

#[tokio::test]
async fn unreadable_provider_response_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/siteverify"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let verifier = ChallengeVerifier::new(verify_url(&server), Some("test-secret".to_string()));
    let err = verifier.verify("tok").await.expect_err("verdict unreadable");
    assert!(matches!(err, VerifyError::MalformedResponse(_)));
}

#[tokio::test]
async fn missing_secret_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/siteverify"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let verifier = ChallengeVerifier::new(verify_url(&server), None);
    let err = verifier.verify("tok").await.expect_err("no secret configured");
    assert!(matches!(err, VerifyError::MissingSecret));
}
