use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Amount, Currency};

/// Metadata shown on the payment provider's dashboard for a charge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutMetadata {
    pub product: String,
}

/// What the hosted payment widget is opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub email: String,
    pub amount: Amount,
    pub currency: Currency,
    pub metadata: CheckoutMetadata,
}

impl CheckoutRequest {
    /// The charge amount in currency subunits, the unit the widget bills in.
    #[must_use]
    pub const fn subunit_amount(&self) -> u64 {
        self.amount.subunits()
    }
}

/// How a checkout attempt ended.
///
/// The widget either reports a payment reference through its success
/// callback or is dismissed without paying. The reference is not confirmed
/// server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Completed { reference: String },
    Dismissed,
}

impl CheckoutOutcome {
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        match self {
            CheckoutOutcome::Completed { reference } => Some(reference),
            CheckoutOutcome::Dismissed => None,
        }
    }
}

/// Local failures raised before the widget is ever opened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The hosted widget is not available in this session.
    #[error("payment is unavailable right now - try again in a moment")]
    Unavailable,
    /// No publishable key configured for the payment provider.
    #[error("checkout public key is not configured")]
    MissingPublicKey,
}
