use merchstand_relay::FormRelay;
use merchstand_types::{DemoSubmission, FormKind, FormPayload, Subscription};

use crate::gate::{SubmissionGate, SubmitError};

/// Draft state of the demo-submission form.
///
/// Field values survive a failed submit so nothing has to be retyped; an
/// accepted submit clears them along with consuming the verification.
#[derive(Debug)]
pub struct DemoForm {
    pub artist: String,
    pub email: String,
    pub link: String,
    gate: SubmissionGate,
}

impl DemoForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            artist: String::new(),
            email: String::new(),
            link: String::new(),
            gate: SubmissionGate::new(FormKind::Demo),
        }
    }

    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.gate.is_verified()
    }

    pub fn on_challenge_result(&mut self, token: Option<&str>) {
        self.gate.on_challenge_result(token);
    }

    pub fn on_challenge_expired(&mut self) {
        self.gate.on_challenge_expired();
    }

    /// Submits the current draft through the gate.
    pub async fn submit<R: FormRelay>(&mut self, relay: &R) -> Result<(), SubmitError> {
        let payload = FormPayload::Demo(DemoSubmission {
            artist: self.artist.clone(),
            email: self.email.clone(),
            link: self.link.clone(),
        });
        self.gate.submit(relay, &payload).await?;
        self.clear();
        Ok(())
    }

    fn clear(&mut self) {
        self.artist.clear();
        self.email.clear();
        self.link.clear();
    }
}

impl Default for DemoForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Draft state of the mailing-list subscribe form.
#[derive(Debug)]
pub struct SubscribeForm {
    pub email: String,
    gate: SubmissionGate,
}

impl SubscribeForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            email: String::new(),
            gate: SubmissionGate::new(FormKind::Subscribe),
        }
    }

    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.gate.is_verified()
    }

    pub fn on_challenge_result(&mut self, token: Option<&str>) {
        self.gate.on_challenge_result(token);
    }

    pub fn on_challenge_expired(&mut self) {
        self.gate.on_challenge_expired();
    }

    /// Submits the current draft through the gate.
    pub async fn submit<R: FormRelay>(&mut self, relay: &R) -> Result<(), SubmitError> {
        let payload = FormPayload::Subscribe(Subscription {
            email: self.email.clone(),
        });
        self.gate.submit(relay, &payload).await?;
        self.email.clear();
        Ok(())
    }
}

impl Default for SubscribeForm {
    fn default() -> Self {
        Self::new()
    }
}
