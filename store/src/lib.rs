//! Session core for the Merchstand storefront.
//!
//! One [`Session`] models one visit: the cart, the two gated forms, and
//! checkout orchestration. Everything here is UI-local state driven by
//! events in arrival order; there is no persistence and no shared mutable
//! state across sessions.
//!
//! The hosted collaborators are injected at the seams: the relay through
//! [`merchstand_relay::FormRelay`], the payment widget through
//! [`CheckoutGateway`]. Tests substitute in-memory doubles for both.

mod checkout;
mod forms;
mod gate;
mod session;

pub use checkout::{CheckoutGateway, PREORDER_BUNDLE_PRICE, PREORDER_BUNDLE_TITLE};
pub use forms::{DemoForm, SubscribeForm};
pub use gate::{SubmissionGate, SubmitError};
pub use session::Session;
