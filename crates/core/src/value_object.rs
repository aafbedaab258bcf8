//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A price bound of
/// `20.0` is the same bound wherever it came from; a product with id `3` is an
/// entity and stays the same product even if its price changes upstream.
///
/// To "modify" a value object, build a new one. The catalog filters and sort
/// keys are all value objects, which is what lets the view state be replaced
/// wholesale on every update.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct PriceRange { min: PriceBound, max: PriceBound }
///
/// impl ValueObject for PriceRange {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
