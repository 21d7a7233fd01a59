//! Value object trait: equality by value, not identity.
//!
//! Inventory records, classified rows and restock lines have **no identity**:
//! two records with the same product name are tracked independently and are
//! equal only when every attribute matches.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value; the analysis engine never mutates what a caller hands it.
///
/// The trait requires:
/// - **Clone**: annotated copies are produced from the caller's records
/// - **PartialEq**: comparisons are by attribute values
/// - **Debug**: values show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Money {
///     amount: f64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
