use merchstand_types::{
    Amount, Cart, CheckoutError, CheckoutMetadata, CheckoutOutcome, CheckoutRequest, Currency,
    Product, ProductId,
};

use crate::checkout::{CheckoutGateway, PREORDER_BUNDLE_PRICE, PREORDER_BUNDLE_TITLE};
use crate::forms::{DemoForm, SubscribeForm};

/// One storefront visit: catalog, cart, and the two gated forms.
///
/// Created when the visit starts, dropped when it ends; nothing survives
/// the session. Mutations are applied in the order their triggering events
/// arrive.
#[derive(Debug)]
pub struct Session {
    catalog: Vec<Product>,
    pub cart: Cart,
    pub demo: DemoForm,
    pub subscribe: SubscribeForm,
    order_email: String,
    currency: Currency,
}

impl Session {
    #[must_use]
    pub fn new(catalog: Vec<Product>, order_email: impl Into<String>, currency: Currency) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            demo: DemoForm::new(),
            subscribe: SubscribeForm::new(),
            order_email: order_email.into(),
            currency,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.iter().find(|product| &product.id == id)
    }

    /// Adds a catalog product to the cart. Returns `false` when the id is
    /// not in the catalog (the shop grid never produces one, but the cart
    /// must not grow a phantom line if it happens).
    pub fn add_to_cart(&mut self, id: &ProductId) -> bool {
        let Some(product) = self.product(id).cloned() else {
            tracing::warn!(product = %id, "Ignoring add of unknown product");
            return false;
        };
        tracing::debug!(product = %id, "Added to cart");
        self.cart.add(product);
        true
    }

    /// Opens checkout for a single product at its catalog price.
    pub fn buy_product<G: CheckoutGateway>(
        &self,
        gateway: &mut G,
        product: &Product,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        tracing::info!(product = %product.id, amount = %product.price, "Opening checkout");
        gateway.open(self.checkout_request(product.price, &product.title))
    }

    /// Opens checkout for the fixed preorder bundle.
    pub fn buy_preorder_bundle<G: CheckoutGateway>(
        &self,
        gateway: &mut G,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        tracing::info!(amount = %PREORDER_BUNDLE_PRICE, "Opening preorder bundle checkout");
        gateway.open(self.checkout_request(PREORDER_BUNDLE_PRICE, PREORDER_BUNDLE_TITLE))
    }

    fn checkout_request(&self, amount: Amount, product_title: &str) -> CheckoutRequest {
        CheckoutRequest {
            email: self.order_email.clone(),
            amount,
            currency: self.currency.clone(),
            metadata: CheckoutMetadata {
                product: product_title.to_string(),
            },
        }
    }
}
