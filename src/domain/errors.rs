//! # Domain Errors
//!
//! Error types for business rule violations in the domain layer.
//!
//! These errors are raised synchronously while validating preferences,
//! price observations, or an optimization batch. Any of them aborts the
//! whole batch: nothing is partially applied.
//!
//! # Examples
//!
//! ```
//! use deazl_optimizer::domain::errors::DomainError;
//!
//! let err = DomainError::invalid_weight(1.5);
//! assert!(err.to_string().contains("1.5"));
//! assert!(err.is_configuration());
//! ```

use crate::domain::value_objects::arithmetic::ArithmeticError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Price weight outside `[0, 1]` or not finite.
    #[error("invalid price weight: {0} (must be within [0, 1])")]
    InvalidWeight(f64),

    /// Search radius not strictly positive or not finite.
    #[error("invalid max radius: {0} km (must be positive)")]
    InvalidRadius(f64),

    /// Quality score outside `[0, 100]` or not finite.
    #[error("invalid quality score: {0} (must be within [0, 100])")]
    InvalidQualityScore(f64),

    /// Monetary amount rejected.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Identifier rejected (empty or whitespace only).
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// The same shopping-list item appears twice in one batch.
    #[error("duplicate item in optimization batch: {0}")]
    DuplicateItem(String),

    /// Quantity to buy is zero or negative.
    #[error("invalid quantity for item {item_id}: {quantity} (must be positive)")]
    InvalidQuantity {
        /// Item carrying the quantity.
        item_id: String,
        /// Rejected quantity.
        quantity: Decimal,
    },

    /// Alternatives of one item are quoted in different currencies.
    #[error("currency mismatch for item {item_id}: {expected} vs {found}")]
    CurrencyMismatch {
        /// Item whose alternatives disagree.
        item_id: String,
        /// Currency of the first alternative.
        expected: String,
        /// Conflicting currency.
        found: String,
    },

    /// Alternatives of one item are priced per different units.
    #[error("unit mismatch for item {item_id}: per {expected} vs per {found}")]
    UnitMismatch {
        /// Item whose alternatives disagree.
        item_id: String,
        /// Unit of the first alternative.
        expected: String,
        /// Conflicting unit.
        found: String,
    },

    /// Checked arithmetic failed while aggregating amounts.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates an invalid weight error.
    #[must_use]
    pub fn invalid_weight(weight: f64) -> Self {
        Self::InvalidWeight(weight)
    }

    /// Creates an invalid radius error.
    #[must_use]
    pub fn invalid_radius(radius_km: f64) -> Self {
        Self::InvalidRadius(radius_km)
    }

    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount(message.into())
    }

    /// Creates an invalid identifier error.
    #[must_use]
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier(message.into())
    }

    /// Creates a duplicate item error.
    #[must_use]
    pub fn duplicate_item(item_id: impl Into<String>) -> Self {
        Self::DuplicateItem(item_id.into())
    }

    /// Creates an invalid quantity error.
    #[must_use]
    pub fn invalid_quantity(item_id: impl Into<String>, quantity: Decimal) -> Self {
        Self::InvalidQuantity {
            item_id: item_id.into(),
            quantity,
        }
    }

    /// Creates a currency mismatch error.
    #[must_use]
    pub fn currency_mismatch(
        item_id: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::CurrencyMismatch {
            item_id: item_id.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates a unit mismatch error.
    #[must_use]
    pub fn unit_mismatch(
        item_id: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::UnitMismatch {
            item_id: item_id.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Returns true if the error comes from user preference configuration.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidWeight(_) | Self::InvalidRadius(_))
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            DomainError::invalid_radius(-1.0).to_string(),
            "invalid max radius: -1 km (must be positive)"
        );
        assert_eq!(
            DomainError::duplicate_item("item-1").to_string(),
            "duplicate item in optimization batch: item-1"
        );

        let err = DomainError::currency_mismatch("item-1", "EUR", "USD");
        assert!(err.to_string().contains("EUR vs USD"));

        let err = DomainError::unit_mismatch("item-1", "100g", "kg");
        assert_eq!(
            err.to_string(),
            "unit mismatch for item item-1: per 100g vs per kg"
        );

        let err = DomainError::invalid_quantity("item-1", Decimal::from(-3));
        assert_eq!(
            err.to_string(),
            "invalid quantity for item item-1: -3 (must be positive)"
        );
    }

    #[test]
    fn configuration_classification() {
        assert!(DomainError::invalid_weight(2.0).is_configuration());
        assert!(DomainError::invalid_radius(0.0).is_configuration());
        assert!(!DomainError::duplicate_item("x").is_configuration());
    }

    #[test]
    fn arithmetic_converts() {
        let err: DomainError = ArithmeticError::Overflow.into();
        assert_eq!(err, DomainError::Arithmetic(ArithmeticError::Overflow));
    }
}
