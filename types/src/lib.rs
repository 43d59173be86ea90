//! Core domain types for Merchstand.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! storefront: the catalog and cart, the form payloads forwarded to the
//! hosted relay, the per-form verification state machine, and the data
//! exchanged with the hosted checkout widget.

mod cart;
mod checkout;
mod form;
mod money;
mod product;
mod verification;

pub use cart::{Cart, CartEntry};
pub use checkout::{CheckoutError, CheckoutMetadata, CheckoutOutcome, CheckoutRequest};
pub use form::{DemoSubmission, FormKind, FormPayload, Subscription};
pub use money::{Amount, Currency};
pub use product::{Product, ProductId};
pub use verification::VerificationState;
