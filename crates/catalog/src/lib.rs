//! Storefront catalog: product model and the client-side view pipeline.
//!
//! This crate contains the filter/sort/search logic as deterministic, pure
//! functions (no IO, no HTTP, no storage). The pipeline runs in this order:
//!
//! ```text
//! canonical -> category -> sort -> price -> rating -> search -> rendered list
//! ```

pub mod category;
pub mod price;
pub mod product;
pub mod rating;
pub mod search;
pub mod sort;
pub mod view;

pub use category::{CategoryFilter, categories, filter_by_category};
pub use price::{PriceBound, PriceRange, filter_by_price, highest_price};
pub use product::{Product, Rating};
pub use rating::{RatingFloor, filter_by_rating};
pub use search::{SearchTerm, filter_by_search};
pub use sort::{Comparator, SortKey, locale_compare, select_comparator, sort_products};
pub use view::{CatalogAction, CatalogState, DerivedCatalog, derive};
