//! # Money Value Object
//!
//! A non-negative decimal amount tagged with its currency and unit.
//!
//! # Examples
//!
//! ```
//! use deazl_optimizer::domain::value_objects::{Currency, Money, PriceUnit};
//! use rust_decimal::Decimal;
//!
//! let price = Money::new(Decimal::new(199, 2), Currency::Eur)
//!     .unwrap()
//!     .with_unit(PriceUnit::Kilogram);
//!
//! assert_eq!(price.to_string(), "1.99 EUR/kg");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::enums::{Currency, PriceUnit};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount observed on a price tag.
///
/// # Invariants
///
/// - Amount is never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMoney")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
    unit: PriceUnit,
}

#[derive(Deserialize)]
struct RawMoney {
    amount: Decimal,
    #[serde(default)]
    currency: Currency,
    #[serde(default)]
    unit: PriceUnit,
}

impl TryFrom<RawMoney> for Money {
    type Error = DomainError;

    fn try_from(raw: RawMoney) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.amount, raw.currency)?.with_unit(raw.unit))
    }
}

impl Money {
    /// Creates a per-unit amount in the given currency.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if `amount` is negative.
    pub fn new(amount: Decimal, currency: Currency) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::invalid_amount(format!(
                "amount must not be negative, got {amount}"
            )));
        }
        Ok(Self {
            amount,
            currency,
            unit: PriceUnit::default(),
        })
    }

    /// Creates an amount from a float, rounded to cents.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the value is not finite or
    /// negative.
    pub fn from_f64(amount: f64, currency: Currency) -> DomainResult<Self> {
        let decimal = Decimal::from_f64_retain(amount)
            .ok_or_else(|| DomainError::invalid_amount(format!("not a finite amount: {amount}")))?
            .round_dp(2);
        Self::new(decimal, currency)
    }

    /// Sets the unit this amount refers to.
    #[must_use]
    pub fn with_unit(mut self, unit: PriceUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Returns the decimal amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the unit.
    #[inline]
    #[must_use]
    pub fn unit(&self) -> PriceUnit {
        self.unit
    }

    /// Returns the amount as `f64` for scoring.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.amount.to_f64().unwrap_or(0.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)?;
        if self.unit != PriceUnit::Unit {
            write!(f, "/{}", self.unit)?;
        }
        Ok(())
    }
}
