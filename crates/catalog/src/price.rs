//! Inclusive price range filter.

use serde::{Deserialize, Serialize};
use storefront_core::ValueObject;

use crate::product::Product;

/// One edge of the price range, as typed into a number input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum PriceBound {
    #[default]
    Unset,
    At(f64),
}

impl ValueObject for PriceBound {}

impl PriceBound {
    /// Normalize raw input. Empty, non-numeric and non-finite input is unset;
    /// this never fails.
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<f64>()
            .map(PriceBound::from_value)
            .unwrap_or(PriceBound::Unset)
    }

    pub fn from_value(value: f64) -> Self {
        if value.is_finite() {
            PriceBound::At(value)
        } else {
            PriceBound::Unset
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            PriceBound::Unset => None,
            PriceBound::At(v) => Some(*v),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, PriceBound::At(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: PriceBound,
    pub max: PriceBound,
}

impl ValueObject for PriceRange {}

impl PriceRange {
    pub fn new(min: PriceBound, max: PriceBound) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Effective lower edge; unset is negative infinity.
    pub fn lower(&self) -> f64 {
        self.min.value().unwrap_or(f64::NEG_INFINITY)
    }

    /// Effective upper edge; unset is positive infinity.
    pub fn upper(&self) -> f64 {
        self.max.value().unwrap_or(f64::INFINITY)
    }

    pub fn is_unbounded(&self) -> bool {
        !self.min.is_set() && !self.max.is_set()
    }

    /// `lower <= price <= upper`.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.lower() && price <= self.upper()
    }
}

pub fn filter_by_price<'a, I>(products: I, range: &PriceRange) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| range.contains(p.price))
        .collect()
}

/// Highest price in `products`, `None` when empty.
pub fn highest_price<'a, I>(products: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .map(|p| p.price)
        .max_by(|a, b| a.total_cmp(b))
}
