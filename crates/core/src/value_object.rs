//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Item names and
/// quantities are value objects: two `Quantity(5)` are the same quantity.
///
/// Construction is the only place validation happens, so once a caller holds a
/// value object it can rely on its invariants without re-checking.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
