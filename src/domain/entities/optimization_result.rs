//! # Optimization Result
//!
//! Per-item outcome of an optimization run. Results are transient: the
//! caller writes the selected price id back onto the shopping-list item
//! and discards the rest.

use crate::domain::value_objects::{OptimizationReason, PriceId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weighted contributions that add up to a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// `price_weight * normalized price`.
    pub price_component: f64,
    /// `(1 - price_weight) * normalized quality`.
    pub quality_component: f64,
    /// Additive favorite-store boost, `0.0` for other stores.
    pub favorite_boost: f64,
}

impl ScoreBreakdown {
    /// Returns the composite score.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.price_component + self.quality_component + self.favorite_boost
    }

    /// Returns the score without the favorite-store boost.
    #[must_use]
    pub fn without_boost(&self) -> f64 {
        self.price_component + self.quality_component
    }
}

/// Selected price, reason and score for one shopping-list item.
///
/// # Examples
///
/// ```
/// use deazl_optimizer::domain::entities::optimization_result::OptimizationResult;
/// use deazl_optimizer::domain::value_objects::OptimizationReason;
///
/// let result = OptimizationResult::no_selection();
/// assert!(result.selected_price_id.is_none());
/// assert_eq!(result.reason, OptimizationReason::OnlyOption);
/// assert_eq!(result.score, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Chosen price, `None` when the item had no alternatives.
    pub selected_price_id: Option<PriceId>,
    /// Why the price was chosen.
    pub reason: OptimizationReason,
    /// Composite score of the chosen price.
    pub score: f64,
    /// Score contributions of the chosen price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    /// Human-readable explanation shown to the user.
    pub justification: String,
}

impl OptimizationResult {
    /// Result for an item without any alternative.
    #[must_use]
    pub fn no_selection() -> Self {
        Self {
            selected_price_id: None,
            reason: OptimizationReason::OnlyOption,
            score: 0.0,
            breakdown: None,
            justification: "No price is known for this product yet".to_string(),
        }
    }

    /// Result selecting `price_id`.
    #[must_use]
    pub fn selected(
        price_id: PriceId,
        reason: OptimizationReason,
        breakdown: ScoreBreakdown,
        justification: impl Into<String>,
    ) -> Self {
        Self {
            selected_price_id: Some(price_id),
            reason,
            score: breakdown.total(),
            breakdown: Some(breakdown),
            justification: justification.into(),
        }
    }

    /// Returns true if a price was selected.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selected_price_id.is_some()
    }
}

impl fmt::Display for OptimizationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.selected_price_id {
            Some(id) => write!(f, "{} ({}, score={:.4})", id, self.reason, self.score),
            None => write!(f, "no selection ({})", self.reason),
        }
    }
}
