//! Catalog view state and the derived product list.
//!
//! [`CatalogState`] is an immutable value: every UI event becomes a
//! [`CatalogAction`], and [`Reducer::reduce`] returns the next state. The
//! rendered list is never stored; [`derive`] recomputes it from the canonical
//! list and the current state, so it cannot go stale.

use serde::{Deserialize, Serialize};
use storefront_core::Reducer;

use crate::category::{CategoryFilter, filter_by_category};
use crate::price::{PriceBound, PriceRange, filter_by_price, highest_price};
use crate::product::Product;
use crate::rating::{RatingFloor, filter_by_rating};
use crate::search::{SearchTerm, filter_by_search};
use crate::sort::{SortKey, sort_products};

/// UI events, carrying raw input the way the controls report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogAction {
    SelectCategory(String),
    ChangeSort(String),
    SetMinPrice(String),
    SetMaxPrice(String),
    ResetPrice,
    Search(String),
    SetRatingFloor(String),
    ResetAll,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogState {
    category: CategoryFilter,
    sort: SortKey,
    price: PriceRange,
    search: SearchTerm,
    rating: RatingFloor,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn price(&self) -> &PriceRange {
        &self.price
    }

    pub fn search(&self) -> &SearchTerm {
        &self.search
    }

    pub fn rating(&self) -> RatingFloor {
        self.rating
    }
}

impl Reducer for CatalogState {
    type Action = CatalogAction;

    fn reduce(&self, action: &CatalogAction) -> Self {
        let next = match action {
            CatalogAction::SelectCategory(raw) => Self {
                category: CategoryFilter::parse(raw),
                ..self.clone()
            },
            CatalogAction::ChangeSort(raw) => Self {
                sort: SortKey::parse(raw),
                ..self.clone()
            },
            CatalogAction::SetMinPrice(raw) => Self {
                price: PriceRange::new(PriceBound::parse(raw), self.price.max),
                ..self.clone()
            },
            CatalogAction::SetMaxPrice(raw) => Self {
                price: PriceRange::new(self.price.min, PriceBound::parse(raw)),
                ..self.clone()
            },
            CatalogAction::ResetPrice => Self {
                price: PriceRange::unbounded(),
                ..self.clone()
            },
            CatalogAction::Search(raw) => Self {
                search: SearchTerm::new(raw.as_str()),
                ..self.clone()
            },
            CatalogAction::SetRatingFloor(raw) => Self {
                rating: RatingFloor::parse(raw),
                ..self.clone()
            },
            CatalogAction::ResetAll => Self::default(),
        };

        tracing::debug!(?action, state = ?next, "catalog state updated");
        next
    }
}

/// Render model for one state of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedCatalog<'a> {
    /// Final list, in display order.
    pub products: Vec<&'a Product>,
    /// Size of the category-filtered list (before sort, price, rating, search).
    pub category_count: usize,
    /// Highest price among the category-filtered products.
    pub highest_price: Option<f64>,
}

impl DerivedCatalog<'_> {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}

/// Run the full pipeline over `canonical` for `state`.
pub fn derive<'a>(canonical: &'a [Product], state: &CatalogState) -> DerivedCatalog<'a> {
    let by_category = filter_by_category(canonical, state.category());
    let category_count = by_category.len();

    let sorted = sort_products(by_category, state.sort());
    let highest_price = highest_price(sorted.iter().copied());

    let priced = filter_by_price(sorted, state.price());
    let rated = filter_by_rating(priced, state.rating());
    let products = filter_by_search(rated, state.search());

    DerivedCatalog {
        products,
        category_count,
        highest_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::fixtures::{ids, product};
    use crate::product::Rating;

    fn catalog() -> Vec<Product> {
        let mut products = vec![
            product(1, "Fjallraven Backpack", 109.95, "men's clothing"),
            product(2, "Mens Casual T-Shirt", 22.3, "men's clothing"),
            product(3, "Gold Chain Bracelet", 695.0, "jewelery"),
            product(4, "WD 2TB Hard Drive", 64.0, "electronics"),
            product(5, "Mens Cotton Jacket", 55.99, "men's clothing"),
        ];
        let ratings = [(3.9, 120), (4.1, 259), (4.6, 400), (3.3, 203), (4.7, 500)];
        for (p, (rate, count)) in products.iter_mut().zip(ratings) {
            p.rating = Rating { rate, count };
        }
        products
    }

    fn apply(actions: &[CatalogAction]) -> CatalogState {
        CatalogState::new().reduce_all(actions)
    }

    #[test]
    fn default_state_shows_everything_in_fetch_order() {
        let products = catalog();
        let view = derive(&products, &CatalogState::new());
        assert_eq!(ids(&view.products), vec![1, 2, 3, 4, 5]);
        assert_eq!(view.category_count, 5);
        assert_eq!(view.highest_price, Some(695.0));
    }

    #[test]
    fn reduce_does_not_mutate_previous_state() {
        let before = CatalogState::new();
        let after = before.reduce(&CatalogAction::ChangeSort("Price, LH".into()));
        assert_eq!(before.sort(), SortKey::None);
        assert_eq!(after.sort(), SortKey::PriceLowToHigh);
    }

    #[test]
    fn stages_compose_in_order() {
        let products = catalog();
        let state = apply(&[
            CatalogAction::SelectCategory("men's clothing".into()),
            CatalogAction::ChangeSort("Price, LH".into()),
            CatalogAction::SetMinPrice("30".into()),
            CatalogAction::Search("mens".into()),
        ]);

        let view = derive(&products, &state);
        assert_eq!(ids(&view.products), vec![5]);
        assert_eq!(view.category_count, 3);
        assert_eq!(view.highest_price, Some(109.95));
    }

    #[test]
    fn selecting_all_restores_canonical_length() {
        let products = catalog();
        let narrowed = apply(&[CatalogAction::SelectCategory("jewelery".into())]);
        assert_eq!(derive(&products, &narrowed).len(), 1);

        let restored = narrowed.reduce(&CatalogAction::SelectCategory("All".into()));
        assert_eq!(derive(&products, &restored).len(), products.len());

        let restored = narrowed.reduce(&CatalogAction::SelectCategory(String::new()));
        assert_eq!(derive(&products, &restored).len(), products.len());
    }

    #[test]
    fn sort_survives_category_change() {
        let products = catalog();
        let state = apply(&[
            CatalogAction::ChangeSort("Price, HL".into()),
            CatalogAction::SelectCategory("men's clothing".into()),
        ]);
        assert_eq!(ids(&derive(&products, &state).products), vec![1, 5, 2]);

        let state = state.reduce(&CatalogAction::SelectCategory("All".into()));
        assert_eq!(ids(&derive(&products, &state).products), vec![3, 1, 4, 5, 2]);
    }

    #[test]
    fn price_bounds_are_set_independently_and_reset_together() {
        let state = apply(&[
            CatalogAction::SetMinPrice("20".into()),
            CatalogAction::SetMaxPrice("99".into()),
        ]);
        assert_eq!(state.price().min, PriceBound::At(20.0));
        assert_eq!(state.price().max, PriceBound::At(99.0));

        let state = state.reduce(&CatalogAction::SetMaxPrice("".into()));
        assert_eq!(state.price().min, PriceBound::At(20.0));
        assert_eq!(state.price().max, PriceBound::Unset);

        let state = state.reduce(&CatalogAction::ResetPrice);
        assert!(state.price().is_unbounded());
    }

    #[test]
    fn malformed_price_input_is_ignored() {
        let products = catalog();
        let state = apply(&[CatalogAction::SetMinPrice("cheap".into())]);
        assert_eq!(derive(&products, &state).len(), products.len());
    }

    #[test]
    fn popularity_and_rating_floor() {
        let products = catalog();
        let state = apply(&[
            CatalogAction::ChangeSort("Popularity".into()),
            CatalogAction::SetRatingFloor("4".into()),
        ]);
        assert_eq!(ids(&derive(&products, &state).products), vec![5, 3, 2]);
    }

    #[test]
    fn reset_all_returns_default() {
        let state = apply(&[
            CatalogAction::SelectCategory("jewelery".into()),
            CatalogAction::ChangeSort("Title, ASC".into()),
            CatalogAction::Search("gold".into()),
            CatalogAction::ResetAll,
        ]);
        assert_eq!(state, CatalogState::default());
    }

    #[test]
    fn empty_catalog_derives_empty_view() {
        let view = derive(&[], &CatalogState::new());
        assert!(view.is_empty());
        assert_eq!(view.category_count, 0);
        assert_eq!(view.highest_price, None);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the derived list is a subset of the canonical list,
            /// and every element satisfies every active predicate.
            #[test]
            fn derived_products_satisfy_state(
                category in prop::sample::select(vec!["", "All", "men's clothing", "jewelery", "toys"]),
                sort in prop::sample::select(SortKey::ALL.to_vec()),
                min in prop::option::of(0.0f64..200.0),
                max in prop::option::of(0.0f64..800.0),
                stars in 0u8..6,
            ) {
                let products = catalog();
                let mut actions = vec![
                    CatalogAction::SelectCategory(category.to_string()),
                    CatalogAction::ChangeSort(sort.label().to_string()),
                    CatalogAction::SetRatingFloor(stars.to_string()),
                ];
                if let Some(min) = min {
                    actions.push(CatalogAction::SetMinPrice(min.to_string()));
                }
                if let Some(max) = max {
                    actions.push(CatalogAction::SetMaxPrice(max.to_string()));
                }
                let state = apply(&actions);
                let view = derive(&products, &state);

                prop_assert!(view.len() <= view.category_count);
                for p in &view.products {
                    prop_assert!(state.category().matches(p));
                    prop_assert!(state.price().contains(p.price));
                    prop_assert!(state.rating().matches(p));
                }
            }
        }
    }
}
