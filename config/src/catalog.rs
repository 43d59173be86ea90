use merchstand_types::{Amount, Product, ProductId};

/// The built-in catalog, used when the settings file defines no
/// `[[catalog]]` entries. Matches the live drop: the dark edition set and
/// the original set.
#[must_use]
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("dark-edition"),
            title: "Dark Edition Tee and Cap".to_string(),
            price: Amount::new(25_000),
            description: "Bold black tee and cap set featuring the cracked heart and cross print. Limited drop.".to_string(),
            image: "darkEdition.png".to_string(),
        },
        Product {
            id: ProductId::new("original-edition"),
            title: "Original Tee and Cap".to_string(),
            price: Amount::new(20_000),
            description: "Classic logo tee and cap set from the signature collection.".to_string(),
            image: "originalEdition.png".to_string(),
        },
    ]
}
