use merchstand_relay::{FormRelay, RelayError};
use merchstand_types::{FormKind, FormPayload, VerificationState};
use thiserror::Error;

/// Per-form gate between the challenge widget and the relay.
///
/// Each form owns one gate; passing the challenge on one form never opens
/// another. A submission only leaves the process while the gate reads
/// verified at the moment of submit, and an accepted submission consumes
/// the verification.
#[derive(Debug)]
pub struct SubmissionGate {
    form: FormKind,
    state: VerificationState,
}

impl SubmissionGate {
    #[must_use]
    pub fn new(form: FormKind) -> Self {
        Self {
            form,
            state: VerificationState::Unverified,
        }
    }

    #[must_use]
    pub const fn form(&self) -> FormKind {
        self.form
    }

    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.state.is_verified()
    }

    /// Challenge widget result callback.
    pub fn on_challenge_result(&mut self, token: Option<&str>) {
        self.state = self.state.after_challenge_result(token);
        tracing::debug!(form = %self.form, verified = self.is_verified(), "Challenge result applied");
    }

    /// Challenge widget expiry callback.
    pub fn on_challenge_expired(&mut self) {
        self.state = self.state.after_expiry();
        tracing::debug!(form = %self.form, "Challenge expired");
    }

    /// Forwards `payload` through `relay` if the gate is verified.
    ///
    /// An unverified gate rejects locally, before any network call. An
    /// accepted submission resets the gate so the next one needs a fresh
    /// challenge; a failed submission leaves the verification in place so
    /// the user can retry without re-challenging.
    pub async fn submit<R: FormRelay>(
        &mut self,
        relay: &R,
        payload: &FormPayload,
    ) -> Result<(), SubmitError> {
        if !self.state.is_verified() {
            tracing::warn!(form = %self.form, "Submission blocked: challenge not passed");
            return Err(SubmitError::NotVerified);
        }

        relay.forward(payload).await?;
        self.state = self.state.after_accepted_submission();
        tracing::info!(form = %self.form, "Submission forwarded to relay");
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Submission attempted before the challenge was passed; nothing was
    /// sent.
    #[error("complete the challenge before submitting")]
    NotVerified,

    #[error(transparent)]
    Relay(#[from] RelayError),
}
