use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId, ValueObject};

/// Aggregate customer rating of a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0 to 5.
    pub rate: f64,
    /// Number of ratings behind `rate`.
    pub count: u64,
}

impl ValueObject for Rating {}

/// Catalog product, exactly as served by `GET /products`.
///
/// Products are read-only once fetched; the view pipeline only ever borrows
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    /// Image URL.
    pub image: String,
    pub rating: Rating,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
