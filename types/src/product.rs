use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Amount;

/// Stable slug identifying a catalog entry (e.g. `dark-edition`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One item in the storefront catalog.
///
/// Catalog entries are fixed at process start from configuration; nothing
/// creates or retires a product at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Amount,
    pub description: String,
    /// Path or URL of the image shown in the shop grid.
    pub image: String,
}
