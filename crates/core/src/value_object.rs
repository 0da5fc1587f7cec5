//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. In the catalog, physical dimensions and category entries
//! are value objects while products are entities.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by value. To "modify" one, build
/// a new one with the new values.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Dimensions { weight: f64, width: f64, length: f64, height: f64 }
///
/// impl ValueObject for Dimensions {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
