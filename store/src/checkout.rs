use merchstand_types::{Amount, CheckoutError, CheckoutOutcome, CheckoutRequest};

/// The hosted payment widget, as the session sees it.
///
/// The widget is an opaque overlay owned by the payment provider; the
/// session only hands it a request and receives how it ended. Injecting it
/// here keeps sessions runnable against doubles.
pub trait CheckoutGateway {
    /// Opens the payment overlay for `request` and reports how it ended.
    ///
    /// Local preconditions (widget not loaded, no publishable key) fail
    /// before anything opens.
    fn open(&mut self, request: CheckoutRequest) -> Result<CheckoutOutcome, CheckoutError>;
}

/// Fixed preorder bundle sold from the hero section.
pub const PREORDER_BUNDLE_TITLE: &str = "17 & Dangerous Preorder Bundle";
pub const PREORDER_BUNDLE_PRICE: Amount = Amount::new(20_000);
