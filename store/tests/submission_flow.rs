//! End-to-end tests for the verified-submission flow: challenge, gate,
//! relay, reset. The relay is an in-memory double that records every
//! payload it is handed.

use std::sync::Mutex;

use merchstand_relay::{FormRelay, RelayError};
use merchstand_store::{SubmissionGate, SubmitError};
use merchstand_types::{DemoSubmission, FormKind, FormPayload, Subscription};

/// Relay double: records forwarded bodies and answers with a programmed
/// rejection, or accepts when none is set.
struct StubRelay {
    reject_with: Option<(u16, serde_json::Value)>,
    forwarded: Mutex<Vec<serde_json::Value>>,
}

impl StubRelay {
    fn accepting() -> Self {
        Self {
            reject_with: None,
            forwarded: Mutex::new(Vec::new()),
        }
    }

    fn rejecting(status: u16, detail: serde_json::Value) -> Self {
        Self {
            reject_with: Some((status, detail)),
            forwarded: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.forwarded.lock().expect("relay lock").len()
    }
}

impl FormRelay for StubRelay {
    async fn forward(&self, payload: &FormPayload) -> Result<(), RelayError> {
        self.forwarded
            .lock()
            .expect("relay lock")
            .push(payload.relay_body());
        match &self.reject_with {
            Some((status, detail)) => Err(RelayError::Rejected {
                status: *status,
                detail: detail.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn demo_payload() -> FormPayload {
    FormPayload::Demo(DemoSubmission {
        artist: "Night Driver".to_string(),
        email: "artist@example.com".to_string(),
        link: "https://audiomack.com/night-driver/demo".to_string(),
    })
}

fn subscribe_payload() -> FormPayload {
    FormPayload::Subscribe(Subscription {
        email: "fan@example.com".to_string(),
    })
}

#[tokio::test]
async fn unverified_submit_is_rejected_without_a_network_call() {
    let relay = StubRelay::accepting();
    let mut gate = SubmissionGate::new(FormKind::Demo);

    let err = gate
        .submit(&relay, &demo_payload())
        .await
        .expect_err("gate is unverified");
    assert!(matches!(err, SubmitError::NotVerified));
    assert_eq!(relay.call_count(), 0);
}

#[tokio::test]
async fn verified_submit_forwards_once_and_resets_the_gate() {
    let relay = StubRelay::accepting();
    let mut gate = SubmissionGate::new(FormKind::Demo);

    gate.on_challenge_result(Some("abc"));
    assert!(gate.is_verified());

    gate.submit(&relay, &demo_payload()).await.expect("relay accepts");
    assert_eq!(relay.call_count(), 1);

    // The next submission needs a fresh challenge.
    assert!(!gate.is_verified());
    let err = gate
        .submit(&relay, &demo_payload())
        .await
        .expect_err("verification was consumed");
    assert!(matches!(err, SubmitError::NotVerified));
    assert_eq!(relay.call_count(), 1);
}

#[tokio::test]
async fn failed_submit_keeps_the_verification_for_a_retry() {
    let rejecting = StubRelay::rejecting(502, serde_json::json!({ "error": "upstream down" }));
    let mut gate = SubmissionGate::new(FormKind::Subscribe);

    gate.on_challenge_result(Some("tok"));
    let err = gate
        .submit(&rejecting, &subscribe_payload())
        .await
        .expect_err("relay rejects");
    match err {
        SubmitError::Relay(RelayError::Rejected { status, detail }) => {
            assert_eq!(status, 502);
            assert_eq!(detail["error"], "upstream down");
        }
        other => panic!("expected a relay rejection, got {other:?}"),
    }

    // No re-challenge needed: the same gate retries against a healthy relay.
    assert!(gate.is_verified());
    let accepting = StubRelay::accepting();
    gate.submit(&accepting, &subscribe_payload())
        .await
        .expect("retry succeeds");
    assert!(!gate.is_verified());
}

#[tokio::test]
async fn expiry_between_challenge_and_submit_blocks_the_send() {
    let relay = StubRelay::accepting();
    let mut gate = SubmissionGate::new(FormKind::Demo);

    gate.on_challenge_result(Some("abc"));
    gate.on_challenge_expired();

    let err = gate
        .submit(&relay, &demo_payload())
        .await
        .expect_err("challenge expired");
    assert!(matches!(err, SubmitError::NotVerified));
    assert_eq!(relay.call_count(), 0);
}

#[tokio::test]
async fn forwarded_body_carries_the_subject_discriminator() {
    let relay = StubRelay::accepting();
    let mut gate = SubmissionGate::new(FormKind::Demo);

    gate.on_challenge_result(Some("abc"));
    gate.submit(&relay, &demo_payload()).await.expect("relay accepts");

    let forwarded = relay.forwarded.lock().expect("relay lock");
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0]["_subject"], "Demo submission");
    assert_eq!(forwarded[0]["artist"], "Night Driver");
}
