//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, lookups). I/O concerns belong to the infrastructure crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a record field outside its domain).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Validation failure attributed to a named field.
    pub fn invalid_field(field: &str, msg: impl core::fmt::Display) -> Self {
        Self::Validation(format!("{field}: {msg}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_names_the_field() {
        let err = DomainError::invalid_field("unit_price", "must be non-negative");
        assert_eq!(
            err.to_string(),
            "validation failed: unit_price: must be non-negative"
        );
    }

    #[test]
    fn constructors_map_to_variants() {
        assert!(matches!(DomainError::validation("x"), DomainError::Validation(_)));
        assert!(matches!(DomainError::invariant("x"), DomainError::InvariantViolation(_)));
        assert_eq!(DomainError::not_found(), DomainError::NotFound);
    }
}
