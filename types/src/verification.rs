/// Whether a form's bot challenge has been passed.
///
/// Each form instance owns its own state; passing the challenge on one form
/// never verifies another. The transitions are pure so the gate that applies
/// them stays trivially testable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerificationState {
    #[default]
    Unverified,
    Verified,
}

impl VerificationState {
    #[must_use]
    pub const fn is_verified(self) -> bool {
        matches!(self, VerificationState::Verified)
    }

    /// Transition for the challenge widget's result callback.
    ///
    /// Only a non-empty token verifies; the widget reports `None` (or an
    /// empty string) when the challenge was not actually solved.
    #[must_use]
    pub fn after_challenge_result(self, token: Option<&str>) -> Self {
        match token {
            Some(token) if !token.trim().is_empty() => VerificationState::Verified,
            _ => VerificationState::Unverified,
        }
    }

    /// Transition for the challenge widget's expiry callback.
    #[must_use]
    pub const fn after_expiry(self) -> Self {
        VerificationState::Unverified
    }

    /// Transition after the relay accepts a submission: every submission
    /// requires a fresh challenge.
    #[must_use]
    pub const fn after_accepted_submission(self) -> Self {
        VerificationState::Unverified
    }
}
