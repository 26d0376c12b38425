//! # Ranking Strategy
//!
//! Strategies for ranking the price alternatives of one shopping-list item.
//!
//! This module provides the [`RankingStrategy`] trait and two
//! implementations:
//! - [`WeightedScoreStrategy`]: composite of price, quality and favorite
//!   store, used by the optimizer
//! - [`BestPriceStrategy`]: cheapest first
//!
//! # Ordering
//!
//! Rankings are total and deterministic:
//!
//! ```text
//! score desc → amount asc → store id asc → price id asc
//! ```

use crate::domain::entities::optimization_result::ScoreBreakdown;
use crate::domain::entities::price_alternative::PriceAlternative;
use crate::domain::entities::user_preferences::UserPreferences;
use crate::domain::value_objects::QualityScore;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Additive score boost for alternatives sold at a favorite store.
pub const FAVORITE_STORE_BOOST: f64 = 0.1;

/// An alternative with its ranking information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// The alternative being ranked.
    pub alternative: PriceAlternative,
    /// The rank (1 = best).
    pub rank: usize,
    /// Weighted score contributions.
    pub breakdown: ScoreBreakdown,
}

impl RankedAlternative {
    /// Creates a new ranked alternative.
    #[must_use]
    pub fn new(alternative: PriceAlternative, rank: usize, breakdown: ScoreBreakdown) -> Self {
        Self {
            alternative,
            rank,
            breakdown,
        }
    }

    /// Returns the composite score (higher = better).
    #[must_use]
    pub fn score(&self) -> f64 {
        self.breakdown.total()
    }

    /// Returns true if this alternative is the best (rank 1).
    #[must_use]
    pub fn is_best(&self) -> bool {
        self.rank == 1
    }
}

impl fmt::Display for RankedAlternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RankedAlternative(#{} score={:.4} {})",
            self.rank,
            self.score(),
            self.alternative
        )
    }
}

/// Trait for ranking strategies.
///
/// Implementations score every alternative of a single item and return
/// them sorted best first. Rankings must be deterministic: the same inputs
/// always yield the same order and scores.
pub trait RankingStrategy: Send + Sync + fmt::Debug {
    /// Ranks the alternatives of one item under the given preferences.
    ///
    /// # Returns
    ///
    /// A vector of ranked alternatives sorted by rank (best first). Empty
    /// input yields an empty vector.
    fn rank(
        &self,
        alternatives: &[PriceAlternative],
        preferences: &UserPreferences,
    ) -> Vec<RankedAlternative>;

    /// Returns the name of this ranking strategy.
    fn name(&self) -> &'static str;
}

/// Orders two scored alternatives, best first.
///
/// Higher score wins; ties go to the lower amount, then the smaller store
/// id, then the smaller price id. Distance never decides.
#[must_use]
pub fn compare_scored(
    a_score: f64,
    a: &PriceAlternative,
    b_score: f64,
    b: &PriceAlternative,
) -> Ordering {
    b_score
        .total_cmp(&a_score)
        .then_with(|| tie_break(a, b))
}

/// Tie-break between alternatives with equal scores.
#[must_use]
pub fn tie_break(a: &PriceAlternative, b: &PriceAlternative) -> Ordering {
    a.price()
        .amount()
        .cmp(&b.price().amount())
        .then_with(|| a.store_id().cmp(b.store_id()))
        .then_with(|| a.id().cmp(b.id()))
}

/// Normalized price in `[0, 1]`: the cheapest alternative maps to `1`, the
/// most expensive to `0`. All-equal amounts map to `1`.
#[must_use]
pub fn normalized_price(amount: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range > 0.0 {
        (max - amount) / range
    } else {
        1.0
    }
}

fn amount_bounds(alternatives: &[PriceAlternative]) -> (f64, f64) {
    alternatives
        .iter()
        .map(|a| a.price().to_f64())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        })
}

fn sort_into_ranking(mut scored: Vec<(&PriceAlternative, ScoreBreakdown)>) -> Vec<RankedAlternative> {
    scored.sort_by(|(a, a_bd), (b, b_bd)| compare_scored(a_bd.total(), a, b_bd.total(), b));

    scored
        .into_iter()
        .enumerate()
        .map(|(rank, (alternative, breakdown))| {
            RankedAlternative::new(alternative.clone(), rank + 1, breakdown)
        })
        .collect()
}

/// Best price ranking strategy.
///
/// Ranks alternatives by amount only, cheapest first. Preferences are
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct BestPriceStrategy;

impl BestPriceStrategy {
    /// Creates a new best price strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RankingStrategy for BestPriceStrategy {
    fn rank(
        &self,
        alternatives: &[PriceAlternative],
        _preferences: &UserPreferences,
    ) -> Vec<RankedAlternative> {
        if alternatives.is_empty() {
            return Vec::new();
        }

        let (min, max) = amount_bounds(alternatives);
        let scored = alternatives
            .iter()
            .map(|a| {
                let breakdown = ScoreBreakdown {
                    price_component: normalized_price(a.price().to_f64(), min, max),
                    ..ScoreBreakdown::default()
                };
                (a, breakdown)
            })
            .collect();

        sort_into_ranking(scored)
    }

    fn name(&self) -> &'static str {
        "BestPrice"
    }
}

/// Weighted score ranking strategy.
///
/// ```text
/// score = w * price + (1 - w) * quality + boost
/// ```
///
/// - `price`: normalized against the item's cheapest and most expensive
///   alternatives, see [`normalized_price`]
/// - `quality`: quality score / 100, or `0.5` when unknown
/// - `boost`: [`FAVORITE_STORE_BOOST`] for favorite stores, else `0`
///
/// The boost is additive, so a materially cheaper or better non-favorite
/// alternative still outranks a favorite store.
#[derive(Debug, Clone)]
pub struct WeightedScoreStrategy {
    favorite_boost: f64,
}

impl Default for WeightedScoreStrategy {
    fn default() -> Self {
        Self {
            favorite_boost: FAVORITE_STORE_BOOST,
        }
    }
}

impl WeightedScoreStrategy {
    /// Creates a weighted strategy with the default favorite-store boost.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a weighted strategy with a custom favorite-store boost.
    #[must_use]
    pub fn with_favorite_boost(favorite_boost: f64) -> Self {
        Self { favorite_boost }
    }

    /// Returns the favorite-store boost.
    #[must_use]
    pub fn favorite_boost(&self) -> f64 {
        self.favorite_boost
    }

    /// Computes the score breakdown of one alternative given the item's
    /// amount bounds.
    #[must_use]
    pub fn breakdown(
        &self,
        alternative: &PriceAlternative,
        min_amount: f64,
        max_amount: f64,
        preferences: &UserPreferences,
    ) -> ScoreBreakdown {
        let weight = preferences.price_weight();
        let price = normalized_price(alternative.price().to_f64(), min_amount, max_amount);
        let quality = QualityScore::normalized_or_neutral(alternative.quality_score());
        let favorite_boost = if preferences.is_favorite(alternative.store_id()) {
            self.favorite_boost
        } else {
            0.0
        };

        ScoreBreakdown {
            price_component: weight.get() * price,
            quality_component: weight.quality_weight() * quality,
            favorite_boost,
        }
    }
}

impl RankingStrategy for WeightedScoreStrategy {
    fn rank(
        &self,
        alternatives: &[PriceAlternative],
        preferences: &UserPreferences,
    ) -> Vec<RankedAlternative> {
        if alternatives.is_empty() {
            return Vec::new();
        }

        let (min, max) = amount_bounds(alternatives);
        let scored = alternatives
            .iter()
            .map(|a| (a, self.breakdown(a, min, max, preferences)))
            .collect();

        sort_into_ranking(scored)
    }

    fn name(&self) -> &'static str {
        "WeightedScore"
    }
}
