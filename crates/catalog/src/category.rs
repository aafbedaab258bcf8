//! Category filter.

use serde::{Deserialize, Serialize};
use storefront_core::ValueObject;

use crate::product::Product;

/// Label the category picker uses for "every category".
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive category label.
    Only(String),
}

impl ValueObject for CategoryFilter {}

impl CategoryFilter {
    /// Both `""` and `"All"` select every category; anything else is taken
    /// verbatim.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" | ALL_CATEGORIES => CategoryFilter::All,
            label => CategoryFilter::Only(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(label) => label,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => product.category == *label,
        }
    }
}

pub fn filter_by_category<'a, I>(products: I, filter: &CategoryFilter) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products.into_iter().filter(|p| filter.matches(p)).collect()
}

/// Distinct category labels, in first-seen order.
pub fn categories<'a, I>(products: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut seen: Vec<&'a str> = Vec::new();
    for product in products {
        if !seen.contains(&product.category.as_str()) {
            seen.push(product.category.as_str());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::fixtures::{ids, product};

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "backpack", 109.95, "men's clothing"),
            product(2, "ring", 9.99, "jewelery"),
            product(3, "ssd", 109.0, "electronics"),
            product(4, "jacket", 55.99, "men's clothing"),
        ]
    }

    #[test]
    fn dual_sentinel_selects_all() {
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("all"),
            CategoryFilter::Only("all".to_string())
        );
    }

    #[test]
    fn exact_match_only() {
        let products = catalog();
        let filter = CategoryFilter::parse("men's clothing");
        assert_eq!(ids(&filter_by_category(&products, &filter)), vec![1, 4]);

        let filter = CategoryFilter::parse("Men's Clothing");
        assert!(filter_by_category(&products, &filter).is_empty());
    }

    #[test]
    fn all_restores_full_list() {
        let products = catalog();
        let narrowed = filter_by_category(&products, &CategoryFilter::parse("jewelery"));
        assert_eq!(narrowed.len(), 1);

        let restored = filter_by_category(&products, &CategoryFilter::parse("All"));
        assert_eq!(restored.len(), products.len());
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let products = catalog();
        assert_eq!(
            categories(&products),
            vec!["men's clothing", "jewelery", "electronics"]
        );
    }

    #[test]
    fn labels() {
        assert_eq!(CategoryFilter::All.label(), "All");
        assert_eq!(CategoryFilter::parse("jewelery").label(), "jewelery");
    }
}
