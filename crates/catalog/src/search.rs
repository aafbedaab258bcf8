//! Free-text title search.

use serde::{Deserialize, Serialize};
use storefront_core::ValueObject;

use crate::product::Product;

/// Search box contents. An empty term matches every product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchTerm {
    raw: String,
    needle: String,
}

impl ValueObject for SearchTerm {}

impl SearchTerm {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.trim().to_lowercase();
        Self { raw, needle }
    }

    /// Text as typed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Case-insensitive substring match on the title.
    pub fn matches(&self, product: &Product) -> bool {
        self.is_empty() || product.title.to_lowercase().contains(&self.needle)
    }
}

pub fn filter_by_search<'a, I>(products: I, term: &SearchTerm) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products.into_iter().filter(|p| term.matches(p)).collect()
}
