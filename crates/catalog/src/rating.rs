//! "N stars & above" rating filter.

use serde::{Deserialize, Serialize};
use storefront_core::ValueObject;

use crate::product::Product;

/// Highest floor the storefront offers.
pub const MAX_STARS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RatingFloor {
    #[default]
    Any,
    AtLeast(u8),
}

impl ValueObject for RatingFloor {}

impl RatingFloor {
    /// `0` means no floor; values above [`MAX_STARS`] are clamped.
    pub fn stars(n: u8) -> Self {
        match n {
            0 => RatingFloor::Any,
            n => RatingFloor::AtLeast(n.min(MAX_STARS)),
        }
    }

    /// Lenient parse of a star count; anything unparsable is no floor.
    pub fn parse(raw: &str) -> Self {
        raw.trim().parse::<u8>().map(RatingFloor::stars).unwrap_or_default()
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            RatingFloor::Any => true,
            RatingFloor::AtLeast(n) => product.rating.rate >= f64::from(*n),
        }
    }
}

pub fn filter_by_rating<'a, I>(products: I, floor: RatingFloor) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products.into_iter().filter(|p| floor.matches(p)).collect()
}
