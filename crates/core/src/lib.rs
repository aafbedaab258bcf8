//! `storefront-core`: building blocks shared by the storefront crates.
//!
//! This crate contains **pure** primitives (no IO, no HTTP).

pub mod entity;
pub mod error;
pub mod id;
pub mod reducer;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use reducer::Reducer;
pub use value_object::ValueObject;
