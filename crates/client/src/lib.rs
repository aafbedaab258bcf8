//! `storefront-client`
//!
//! **Responsibility:** the storefront's product catalog page.
//!
//! This crate provides:
//! - Configuration (API base URL, initial view state)
//! - The one-shot product fetch against `GET /products`
//! - The page shell: load state, action dispatch, render model
//! - Plain-text rendering of the derived list
//!
//! All filtering and sorting lives in `storefront-catalog`.

pub mod config;
pub mod fetch;
pub mod render;
pub mod storefront;

pub use config::{ClientConfig, ConfigError};
pub use fetch::{CatalogClient, FetchError, ProductSource};
pub use render::render;
pub use storefront::{LoadState, Storefront, View};
