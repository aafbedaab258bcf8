//! Sort key selection and product comparators.

use core::cmp::Ordering;
use core::str::FromStr;

use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};
use storefront_core::{DomainError, ValueObject};

use crate::product::Product;

/// Orderings offered by the storefront's "Sort By" select box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Keep upstream order.
    #[default]
    None,
    TitleDesc,
    TitleAsc,
    /// Most ratings first, then highest rate.
    Popularity,
    PriceHighToLow,
    PriceLowToHigh,
    RatingHighToLow,
    RatingLowToHigh,
}

impl ValueObject for SortKey {}

/// Placeholder label of the select box; selects [`SortKey::None`].
pub const SORT_PLACEHOLDER: &str = "Sort By";

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::None,
        SortKey::TitleDesc,
        SortKey::TitleAsc,
        SortKey::Popularity,
        SortKey::PriceHighToLow,
        SortKey::PriceLowToHigh,
        SortKey::RatingHighToLow,
        SortKey::RatingLowToHigh,
    ];

    /// Label as shown (and sent back) by the select box.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::None => SORT_PLACEHOLDER,
            SortKey::TitleDesc => "Title, DESC",
            SortKey::TitleAsc => "Title, ASC",
            SortKey::Popularity => "Popularity",
            SortKey::PriceHighToLow => "Price, HL",
            SortKey::PriceLowToHigh => "Price, LH",
            SortKey::RatingHighToLow => "Rating, HL",
            SortKey::RatingLowToHigh => "Rating, LH",
        }
    }

    /// Lenient parse used for UI input: unknown labels fall back to `None`.
    pub fn parse(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(SortKey::None);
        }
        SortKey::ALL
            .into_iter()
            .find(|key| key.label() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown sort key: {s}")))
    }
}

/// Product ordering used by [`sort_products`].
pub type Comparator = fn(&Product, &Product) -> Ordering;

thread_local! {
    static ROOT_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Locale-aware title comparison (root-locale collation, tertiary strength).
///
/// Accents and case only break ties between otherwise equal letters, so
/// `"éclair"` sorts before `"fig"` and `"a"` before `"A"`. Strings the collator
/// considers equal fall back to code point order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}

/// Numeric comparison for the price and rating sorts.
///
/// `-0.0` equals `0.0`. NaN has no place on the number line, so it sorts after
/// every number whichever direction is requested.
fn compare_numbers(a: f64, b: f64, descending: bool) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if descending { ord.reverse() } else { ord }
        }
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

fn title_asc(a: &Product, b: &Product) -> Ordering {
    locale_compare(&a.title, &b.title)
}

fn title_desc(a: &Product, b: &Product) -> Ordering {
    locale_compare(&b.title, &a.title)
}

fn popularity(a: &Product, b: &Product) -> Ordering {
    b.rating
        .count
        .cmp(&a.rating.count)
        .then_with(|| compare_numbers(a.rating.rate, b.rating.rate, true))
}

fn price_high_to_low(a: &Product, b: &Product) -> Ordering {
    compare_numbers(a.price, b.price, true)
}

fn price_low_to_high(a: &Product, b: &Product) -> Ordering {
    compare_numbers(a.price, b.price, false)
}

fn rating_high_to_low(a: &Product, b: &Product) -> Ordering {
    compare_numbers(a.rating.rate, b.rating.rate, true)
}

fn rating_low_to_high(a: &Product, b: &Product) -> Ordering {
    compare_numbers(a.rating.rate, b.rating.rate, false)
}

/// Comparator for `key`, or `None` when the key keeps upstream order.
pub fn select_comparator(key: SortKey) -> Option<Comparator> {
    let cmp: Comparator = match key {
        SortKey::None => return None,
        SortKey::TitleDesc => title_desc,
        SortKey::TitleAsc => title_asc,
        SortKey::Popularity => popularity,
        SortKey::PriceHighToLow => price_high_to_low,
        SortKey::PriceLowToHigh => price_low_to_high,
        SortKey::RatingHighToLow => rating_high_to_low,
        SortKey::RatingLowToHigh => rating_low_to_high,
    };
    Some(cmp)
}

/// Stable sort of `products` by `key`. The input is left untouched.
pub fn sort_products<'a, I>(products: I, key: SortKey) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut sorted: Vec<&'a Product> = products.into_iter().collect();
    if let Some(cmp) = select_comparator(key) {
        sorted.sort_by(|a, b| cmp(a, b));
    }
    sorted
}
