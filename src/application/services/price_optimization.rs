//! # Price Optimization Service
//!
//! Selects the best price for every item of a shopping list.
//!
//! The service is a pure function over in-memory data: it holds no state
//! between calls and performs no I/O, so concurrent invocations are
//! independent and repeated invocations with the same input return the
//! same output.
//!
//! # Per-item algorithm
//!
//! ```text
//! no alternative      → no selection, only-option, score 0
//! filter candidates   → drop known out-of-stock / beyond-radius prices,
//!                       unless that would drop all of them
//! one candidate       → selected, only-option
//! several candidates  → weighted ranking, best first, then classify
//! ```
//!
//! # Examples
//!
//! ```
//! use deazl_optimizer::application::services::price_optimization::{
//!     OptimizationItem, PriceOptimizationService,
//! };
//! use deazl_optimizer::domain::entities::PriceAlternative;
//! use deazl_optimizer::domain::value_objects::{
//!     Currency, ItemId, Money, OptimizationReason, PriceId, ProductId, StoreId,
//! };
//! use rust_decimal::Decimal;
//!
//! let price = |id: &str, cents: i64, store: &str| {
//!     PriceAlternative::builder(
//!         PriceId::new(id),
//!         ProductId::new("milk-1l"),
//!         StoreId::new(store),
//!         Money::new(Decimal::new(cents, 2), Currency::Eur).unwrap(),
//!     )
//!     .try_build()
//!     .unwrap()
//! };
//!
//! let items = vec![OptimizationItem::new(
//!     ItemId::new("item-1"),
//!     vec![price("p1", 350, "s1"), price("p2", 200, "s2")],
//! )];
//! let mut prefs = PriceOptimizationService::default_preferences();
//! prefs = prefs.apply(&deazl_optimizer::domain::entities::PreferencesOverride {
//!     price_weight: Some(1.0),
//!     ..Default::default()
//! }).unwrap();
//!
//! let results = PriceOptimizationService::new().optimize_list(&items, &prefs).unwrap();
//! let result = &results[&ItemId::new("item-1")];
//! assert_eq!(result.selected_price_id, Some(PriceId::new("p2")));
//! assert_eq!(result.reason, OptimizationReason::BestPrice);
//! ```

use crate::application::services::ranking_strategy::{
    RankedAlternative, RankingStrategy, WeightedScoreStrategy, compare_scored,
};
use crate::domain::entities::optimization_result::OptimizationResult;
use crate::domain::entities::price_alternative::PriceAlternative;
use crate::domain::entities::user_preferences::UserPreferences;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{ItemId, OptimizationReason};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

/// One shopping-list item with its candidate prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationItem {
    /// Shopping-list item identifier.
    pub item_id: ItemId,
    /// Candidate prices for the item's product.
    #[serde(default)]
    pub alternatives: Vec<PriceAlternative>,
    /// Quantity to buy, used for basket totals.
    #[serde(default = "default_quantity")]
    pub quantity: Decimal,
}

fn default_quantity() -> Decimal {
    Decimal::ONE
}

impl OptimizationItem {
    /// Creates an item with quantity one.
    #[must_use]
    pub fn new(item_id: ItemId, alternatives: Vec<PriceAlternative>) -> Self {
        Self {
            item_id,
            alternatives,
            quantity: Decimal::ONE,
        }
    }

    /// Sets the quantity to buy.
    #[must_use]
    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity;
        self
    }
}

/// Returns the alternatives eligible under `preferences`.
///
/// Prices known to be out of stock or farther than the maximum radius are
/// dropped. Unknown signals never exclude a price. If every alternative
/// would be dropped, all of them are returned.
#[must_use]
pub fn eligible_alternatives<'a>(
    alternatives: &'a [PriceAlternative],
    preferences: &UserPreferences,
) -> Vec<&'a PriceAlternative> {
    let eligible: Vec<&PriceAlternative> = alternatives
        .iter()
        .filter(|a| !a.is_out_of_stock() && !a.is_beyond(preferences.max_radius_km()))
        .collect();

    if eligible.is_empty() {
        alternatives.iter().collect()
    } else {
        eligible
    }
}

/// Pure price optimization over a batch of shopping-list items.
#[derive(Debug, Clone, Default)]
pub struct PriceOptimizationService {
    strategy: WeightedScoreStrategy,
}

impl PriceOptimizationService {
    /// Creates a service using the default weighted strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service with a specific weighted strategy.
    #[must_use]
    pub fn with_strategy(strategy: WeightedScoreStrategy) -> Self {
        Self { strategy }
    }

    /// Returns the baseline preferences: price weight 0.7, 10 km radius,
    /// no favorite store, saving suggestions on.
    #[must_use]
    pub fn default_preferences() -> UserPreferences {
        UserPreferences::default()
    }

    /// Selects the best alternative for every item.
    ///
    /// Items are scored independently. The whole batch is validated first;
    /// if anything is invalid no result is produced.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidWeight` / `InvalidRadius` for bad preferences
    /// - `DomainError::DuplicateItem` if an item id repeats
    /// - `DomainError::InvalidQuantity` if a quantity is not positive
    /// - `DomainError::CurrencyMismatch` if one item mixes currencies
    /// - `DomainError::UnitMismatch` if one item mixes price units
    /// - any alternative invariant violation
    pub fn optimize_list(
        &self,
        items: &[OptimizationItem],
        preferences: &UserPreferences,
    ) -> DomainResult<BTreeMap<ItemId, OptimizationResult>> {
        Self::validate_batch(items, preferences)?;

        let results: BTreeMap<ItemId, OptimizationResult> = items
            .iter()
            .map(|item| {
                let result = self.optimize_item(item, preferences);
                tracing::debug!(
                    item_id = %item.item_id,
                    alternatives = item.alternatives.len(),
                    result = %result,
                    "item optimized"
                );
                (item.item_id.clone(), result)
            })
            .collect();

        tracing::info!(
            items = items.len(),
            selected = results.values().filter(|r| r.has_selection()).count(),
            strategy = self.strategy.name(),
            "shopping list optimized"
        );

        Ok(results)
    }

    /// Validates preferences and every item of a batch.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure encountered.
    pub fn validate_batch(
        items: &[OptimizationItem],
        preferences: &UserPreferences,
    ) -> DomainResult<()> {
        preferences.validate()?;

        let mut seen = HashSet::with_capacity(items.len());
        for item in items {
            if item.item_id.is_blank() {
                return Err(DomainError::invalid_identifier("item id is blank"));
            }
            if !seen.insert(&item.item_id) {
                return Err(DomainError::duplicate_item(item.item_id.as_str()));
            }
            if item.quantity <= Decimal::ZERO {
                return Err(DomainError::invalid_quantity(
                    item.item_id.as_str(),
                    item.quantity,
                ));
            }

            let mut first = None;
            for alternative in &item.alternatives {
                alternative.validate()?;
                let found = alternative.price();
                let Some(expected) = first else {
                    first = Some(found);
                    continue;
                };
                if expected.currency() != found.currency() {
                    return Err(DomainError::currency_mismatch(
                        item.item_id.as_str(),
                        expected.currency().code(),
                        found.currency().code(),
                    ));
                }
                if expected.unit() != found.unit() {
                    return Err(DomainError::unit_mismatch(
                        item.item_id.as_str(),
                        expected.unit().label(),
                        found.unit().label(),
                    ));
                }
            }
        }
        Ok(())
    }

    fn optimize_item(
        &self,
        item: &OptimizationItem,
        preferences: &UserPreferences,
    ) -> OptimizationResult {
        if item.alternatives.is_empty() {
            return OptimizationResult::no_selection();
        }

        let eligible = eligible_alternatives(&item.alternatives, preferences);
        if eligible.len() < item.alternatives.len() {
            tracing::debug!(
                item_id = %item.item_id,
                dropped = item.alternatives.len() - eligible.len(),
                "alternatives filtered by stock or radius"
            );
        } else if item
            .alternatives
            .iter()
            .any(|a| a.is_out_of_stock() || a.is_beyond(preferences.max_radius_km()))
        {
            tracing::warn!(
                item_id = %item.item_id,
                "no alternative passes stock and radius filters, scoring all of them"
            );
        }

        let candidates: Vec<PriceAlternative> = eligible.into_iter().cloned().collect();
        let ranked = self.strategy.rank(&candidates, preferences);
        let Some(winner) = ranked.first() else {
            return OptimizationResult::no_selection();
        };

        let reason = if ranked.len() == 1 {
            OptimizationReason::OnlyOption
        } else {
            classify(&ranked)
        };

        OptimizationResult::selected(
            winner.alternative.id().clone(),
            reason,
            winner.breakdown,
            justify(winner, reason, &ranked),
        )
    }
}

/// Classifies why the top-ranked alternative won.
///
/// Checked in order:
/// 1. `PreferredStore`: the winner is a favorite store and, without its own
///    boost, another alternative would outrank it
/// 2. `BestPrice`: strictly the cheapest and the weighted price component
///    is positive and at least the weighted quality component
/// 3. `BestQuality`: the weighted quality component exceeds the price one
/// 4. `Closest`: the winner's known distance is strictly shorter than every
///    other candidate's (unknown counts as farther)
/// 5. `BestBalance`: anything else
///
/// Classification only explains the ranking; it never changes the winner.
#[must_use]
pub fn classify(ranked: &[RankedAlternative]) -> OptimizationReason {
    let Some((winner, others)) = ranked.split_first() else {
        return OptimizationReason::OnlyOption;
    };
    if others.is_empty() {
        return OptimizationReason::OnlyOption;
    }

    let breakdown = winner.breakdown;
    if breakdown.favorite_boost > 0.0 {
        let unboosted = breakdown.without_boost();
        let boost_decisive = others.iter().any(|other| {
            compare_scored(other.score(), &other.alternative, unboosted, &winner.alternative)
                == Ordering::Less
        });
        if boost_decisive {
            return OptimizationReason::PreferredStore;
        }
    }

    let amount = winner.alternative.price().amount();
    let strictly_cheapest = others
        .iter()
        .all(|other| amount < other.alternative.price().amount());
    if strictly_cheapest
        && breakdown.price_component > 0.0
        && breakdown.price_component >= breakdown.quality_component
    {
        return OptimizationReason::BestPrice;
    }

    if breakdown.quality_component > breakdown.price_component {
        return OptimizationReason::BestQuality;
    }

    if let Some(distance) = winner.alternative.distance_km() {
        let closest = others.iter().all(|other| {
            other
                .alternative
                .distance_km()
                .is_none_or(|d| distance < d)
        });
        if closest {
            return OptimizationReason::Closest;
        }
    }

    OptimizationReason::BestBalance
}

fn justify(winner: &RankedAlternative, reason: OptimizationReason, ranked: &[RankedAlternative]) -> String {
    let alternative = &winner.alternative;
    let store = alternative.store().display_name();
    let price = alternative.price();

    match reason {
        OptimizationReason::OnlyOption => {
            format!("Only available price: {price} at {store}")
        }
        OptimizationReason::BestPrice => {
            let most_expensive = ranked
                .iter()
                .map(|r| r.alternative.price().amount())
                .max()
                .unwrap_or(price.amount());
            let saving = most_expensive - price.amount();
            format!(
                "Cheapest option at {store} ({price}), {saving:.2} {} less than the most expensive",
                price.currency()
            )
        }
        OptimizationReason::BestQuality => match alternative.quality_score() {
            Some(quality) => {
                format!("Best quality ({quality}) at {store} for {price}")
            }
            None => format!("Best quality for the price at {store} ({price})"),
        },
        OptimizationReason::PreferredStore => {
            format!("Sold at your favorite store {store} for {price}")
        }
        OptimizationReason::Closest => match alternative.distance_km() {
            Some(distance) => format!("Closest store {store} ({distance:.1} km) at {price}"),
            None => format!("Closest store {store} at {price}"),
        },
        OptimizationReason::BestBalance => {
            format!("Best balance of price and quality at {store} ({price})")
        }
    }
}
