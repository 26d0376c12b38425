//! # Quality Score
//!
//! Nutrition/quality rating attached to a price observation, on a
//! `0..=100` scale (higher is better).

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated quality score in `[0, 100]`.
///
/// # Examples
///
/// ```
/// use deazl_optimizer::domain::value_objects::QualityScore;
///
/// let score = QualityScore::new(95.0).unwrap();
/// assert!((score.normalized() - 0.95).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct QualityScore(f64);

impl QualityScore {
    /// Upper bound of the scale.
    pub const MAX: f64 = 100.0;

    /// Normalized value used when an alternative carries no score.
    pub const NEUTRAL: f64 = 0.5;

    /// Creates a validated score.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQualityScore` if `value` is not finite
    /// or outside `[0, 100]`.
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || !(0.0..=Self::MAX).contains(&value) {
            return Err(DomainError::InvalidQualityScore(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw score.
    #[inline]
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns the score mapped onto `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn normalized(self) -> f64 {
        self.0 / Self::MAX
    }

    /// Normalizes an optional score, falling back to [`Self::NEUTRAL`].
    #[must_use]
    pub fn normalized_or_neutral(score: Option<Self>) -> f64 {
        score.map_or(Self::NEUTRAL, Self::normalized)
    }
}

impl TryFrom<f64> for QualityScore {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QualityScore> for f64 {
    fn from(score: QualityScore) -> Self {
        score.0
    }
}

impl fmt::Display for QualityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}
