//! # Scoring Weights
//!
//! The price weight drives the composite score: the price component is
//! multiplied by `w` and the quality component by `1 - w`.
//!
//! Out-of-range weights are rejected instead of clamped so caller bugs
//! surface at the request boundary.
//!
//! # Examples
//!
//! ```
//! use deazl_optimizer::domain::value_objects::PriceWeight;
//!
//! let weight = PriceWeight::new(0.7).unwrap();
//! assert!((weight.quality_weight() - 0.3).abs() < 1e-12);
//! assert!(PriceWeight::new(1.2).is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight of the price component, within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PriceWeight(f64);

impl PriceWeight {
    /// Default price weight.
    pub const DEFAULT: Self = Self(0.7);

    /// Creates a validated price weight.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeight` if `value` is not finite or
    /// outside `[0, 1]`.
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(DomainError::invalid_weight(value));
        }
        Ok(Self(value))
    }

    /// Returns the price weight.
    #[inline]
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns the complementary quality weight `1 - w`.
    #[inline]
    #[must_use]
    pub fn quality_weight(self) -> f64 {
        1.0 - self.0
    }
}

impl Default for PriceWeight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for PriceWeight {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PriceWeight> for f64 {
    fn from(weight: PriceWeight) -> Self {
        weight.0
    }
}

impl fmt::Display for PriceWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
