//! # Checked Arithmetic
//!
//! Safe arithmetic over monetary amounts.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//!
//! Basket totals and savings are summed over user-supplied amounts, so
//! every operation returns a `Result` instead of panicking.
//!
//! # Examples
//!
//! ```
//! use deazl_optimizer::domain::value_objects::arithmetic::CheckedArithmetic;
//! use rust_decimal::Decimal;
//!
//! let total = Decimal::new(350, 2).safe_add(Decimal::new(200, 2)).unwrap();
//! assert_eq!(total, Decimal::new(550, 2));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Arithmetic operation resulted in underflow.
    #[error("arithmetic underflow")]
    Underflow,
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Trait for checked arithmetic operations.
///
/// Implementors must never panic: overflow maps to
/// `ArithmeticError::Overflow` and underflow to `ArithmeticError::Underflow`.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely subtract two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would underflow.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_correctly() {
        assert_eq!(ArithmeticError::Overflow.to_string(), "arithmetic overflow");
        assert_eq!(
            ArithmeticError::Underflow.to_string(),
            "arithmetic underflow"
        );
    }

    #[test]
    fn safe_ops_on_prices() {
        let a = Decimal::new(350, 2);
        let b = Decimal::new(200, 2);
        assert_eq!(a.safe_sub(b).unwrap(), Decimal::new(150, 2));
        assert_eq!(b.safe_mul(Decimal::new(3, 0)).unwrap(), Decimal::new(600, 2));
    }

    #[test]
    fn safe_add_overflow_fails() {
        assert_eq!(
            Decimal::MAX.safe_add(Decimal::ONE),
            Err(ArithmeticError::Overflow)
        );
    }

    #[test]
    fn safe_sub_underflow_fails() {
        assert_eq!(
            Decimal::MIN.safe_sub(Decimal::ONE),
            Err(ArithmeticError::Underflow)
        );
    }
}
