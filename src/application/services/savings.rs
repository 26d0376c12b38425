//! # Savings Summary
//!
//! Aggregates per-item optimization results into basket totals.
//!
//! Amounts are summed per currency with checked decimal arithmetic. Each
//! item contributes `amount × quantity` of its selected price to the total
//! cost, and the gap to the most expensive eligible alternative to the
//! total savings.

use crate::application::services::price_optimization::{OptimizationItem, eligible_alternatives};
use crate::domain::entities::optimization_result::OptimizationResult;
use crate::domain::entities::price_alternative::PriceAlternative;
use crate::domain::entities::user_preferences::UserPreferences;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{CheckedArithmetic, Currency, ItemId, PriceId, StoreId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A cheaper alternative the optimizer did not pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingSuggestion {
    /// Item the suggestion applies to.
    pub item_id: ItemId,
    /// Cheapest eligible price for the item.
    pub cheaper_price_id: PriceId,
    /// Store selling the cheaper price.
    pub store_id: StoreId,
    /// Additional saving over the selected price, quantity included.
    pub extra_saving: Decimal,
    /// Currency of the saving.
    pub currency: Currency,
}

/// Basket-level view of an optimization run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSummary {
    /// Items that received a selected price.
    pub items_optimized: usize,
    /// Items without any known price.
    pub items_without_prices: usize,
    /// Cost of the selected prices per currency.
    pub total_cost: BTreeMap<Currency, Decimal>,
    /// Saving versus the most expensive alternatives per currency.
    pub total_savings: BTreeMap<Currency, Decimal>,
    /// Cheaper alternatives, present only when suggestions are enabled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<SavingSuggestion>,
}

impl OptimizationSummary {
    /// Returns the total cost in `currency`, zero if nothing was bought in it.
    #[must_use]
    pub fn cost_in(&self, currency: Currency) -> Decimal {
        self.total_cost.get(&currency).copied().unwrap_or_default()
    }

    /// Returns the total saving in `currency`.
    #[must_use]
    pub fn savings_in(&self, currency: Currency) -> Decimal {
        self.total_savings
            .get(&currency)
            .copied()
            .unwrap_or_default()
    }
}

fn accumulate(
    totals: &mut BTreeMap<Currency, Decimal>,
    currency: Currency,
    amount: Decimal,
) -> DomainResult<()> {
    let entry = totals.entry(currency).or_insert(Decimal::ZERO);
    *entry = entry.safe_add(amount)?;
    Ok(())
}

fn cheapest<'a>(alternatives: &[&'a PriceAlternative]) -> Option<&'a PriceAlternative> {
    alternatives.iter().copied().min_by(|a, b| {
        a.price()
            .amount()
            .cmp(&b.price().amount())
            .then_with(|| a.store_id().cmp(b.store_id()))
            .then_with(|| a.id().cmp(b.id()))
    })
}

/// Builds the summary of an optimization run.
///
/// Items missing from `results` are ignored.
///
/// # Errors
///
/// Returns `DomainError::InvalidQuantity` for a quantity that is not
/// positive and `DomainError::Arithmetic` if a total overflows.
pub fn summarize(
    items: &[OptimizationItem],
    results: &BTreeMap<ItemId, OptimizationResult>,
    preferences: &UserPreferences,
) -> DomainResult<OptimizationSummary> {
    let mut summary = OptimizationSummary::default();

    for item in items {
        if item.quantity <= Decimal::ZERO {
            return Err(DomainError::invalid_quantity(
                item.item_id.as_str(),
                item.quantity,
            ));
        }
        let Some(result) = results.get(&item.item_id) else {
            continue;
        };
        let Some(selected_id) = result.selected_price_id.as_ref() else {
            summary.items_without_prices += 1;
            continue;
        };
        let Some(selected) = item.alternatives.iter().find(|a| a.id() == selected_id) else {
            tracing::warn!(
                item_id = %item.item_id,
                price_id = %selected_id,
                "selected price not among item alternatives"
            );
            continue;
        };

        summary.items_optimized += 1;
        let currency = selected.price().currency();
        let selected_amount = selected.price().amount();
        accumulate(
            &mut summary.total_cost,
            currency,
            selected_amount.safe_mul(item.quantity)?,
        )?;

        let eligible = eligible_alternatives(&item.alternatives, preferences);
        let most_expensive = eligible
            .iter()
            .map(|a| a.price().amount())
            .max()
            .unwrap_or(selected_amount);
        let saving = most_expensive
            .safe_sub(selected_amount)?
            .max(Decimal::ZERO)
            .safe_mul(item.quantity)?;
        accumulate(&mut summary.total_savings, currency, saving)?;

        if !preferences.show_saving_suggestions() {
            continue;
        }
        if let Some(cheapest) = cheapest(&eligible) {
            let gap = selected_amount.safe_sub(cheapest.price().amount())?;
            if gap > Decimal::ZERO {
                summary.suggestions.push(SavingSuggestion {
                    item_id: item.item_id.clone(),
                    cheaper_price_id: cheapest.id().clone(),
                    store_id: cheapest.store_id().clone(),
                    extra_saving: gap.safe_mul(item.quantity)?,
                    currency,
                });
            }
        }
    }

    tracing::debug!(
        items_optimized = summary.items_optimized,
        items_without_prices = summary.items_without_prices,
        suggestions = summary.suggestions.len(),
        "optimization summary built"
    );

    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::application::services::price_optimization::PriceOptimizationService;
    use crate::domain::entities::user_preferences::PreferencesOverride;
    use crate::domain::value_objects::{Money, ProductId};

    fn alt(id: &str, cents: i64, store: &str, quality: Option<f64>) -> PriceAlternative {
        let mut builder = PriceAlternative::builder(
            PriceId::new(id),
            ProductId::new("prod-1"),
            StoreId::new(store),
            Money::new(Decimal::new(cents, 2), Currency::Eur).unwrap(),
        );
        if let Some(q) = quality {
            builder = builder.quality_score(q);
        }
        builder.try_build().unwrap()
    }

    fn run(
        items: &[OptimizationItem],
        preferences: &UserPreferences,
    ) -> OptimizationSummary {
        let results = PriceOptimizationService::new()
            .optimize_list(items, preferences)
            .unwrap();
        summarize(items, &results, preferences).unwrap()
    }

    fn price_only() -> UserPreferences {
        UserPreferences::default()
            .apply(&PreferencesOverride {
                price_weight: Some(1.0),
                ..Default::default()
            })
            .unwrap()
    }

    #[test]
    fn totals_use_quantity() {
        let items = vec![
            OptimizationItem::new(
                ItemId::new("i1"),
                vec![alt("p1", 350, "s1", None), alt("p2", 200, "s2", None)],
            )
            .with_quantity(Decimal::from(3)),
            OptimizationItem::new(ItemId::new("i2"), vec![alt("p3", 125, "s1", None)]),
        ];

        let summary = run(&items, &price_only());

        assert_eq!(summary.items_optimized, 2);
        assert_eq!(summary.items_without_prices, 0);
        // 3 × 2.00 + 1.25
        assert_eq!(summary.cost_in(Currency::Eur), Decimal::new(725, 2));
        // 3 × (3.50 − 2.00)
        assert_eq!(summary.savings_in(Currency::Eur), Decimal::new(450, 2));
        assert!(summary.suggestions.is_empty());
    }

    #[test]
    fn negative_quantity_never_reaches_the_totals() {
        let valid = vec![OptimizationItem::new(
            ItemId::new("i1"),
            vec![alt("p1", 350, "s1", None), alt("p2", 200, "s2", None)],
        )];
        let results = PriceOptimizationService::new()
            .optimize_list(&valid, &price_only())
            .unwrap();

        let negative = vec![valid[0].clone().with_quantity(Decimal::from(-3))];
        let err = summarize(&negative, &results, &price_only()).unwrap_err();
        assert_eq!(err, DomainError::invalid_quantity("i1", Decimal::from(-3)));
    }

    #[test]
    fn items_without_prices_are_counted() {
        let items = vec![OptimizationItem::new(ItemId::new("i1"), vec![])];
        let summary = run(&items, &price_only());

        assert_eq!(summary.items_optimized, 0);
        assert_eq!(summary.items_without_prices, 1);
        assert!(summary.total_cost.is_empty());
    }

    #[test]
    fn suggestion_when_quality_beats_price() {
        let items = vec![OptimizationItem::new(
            ItemId::new("i1"),
            vec![
                alt("premium", 350, "s1", Some(95.0)),
                alt("budget", 200, "s2", Some(10.0)),
            ],
        )];
        let preferences = UserPreferences::new(0.3, 10.0, Vec::<StoreId>::new(), true).unwrap();

        let summary = run(&items, &preferences);

        assert_eq!(summary.suggestions.len(), 1);
        let suggestion = &summary.suggestions[0];
        assert_eq!(suggestion.cheaper_price_id, PriceId::new("budget"));
        assert_eq!(suggestion.extra_saving, Decimal::new(150, 2));
        assert_eq!(summary.savings_in(Currency::Eur), Decimal::ZERO);
    }

    #[test]
    fn suggestions_disabled_by_preference() {
        let items = vec![OptimizationItem::new(
            ItemId::new("i1"),
            vec![
                alt("premium", 350, "s1", Some(95.0)),
                alt("budget", 200, "s2", Some(10.0)),
            ],
        )];
        let preferences = UserPreferences::new(0.3, 10.0, Vec::<StoreId>::new(), false).unwrap();

        let summary = run(&items, &preferences);
        assert!(summary.suggestions.is_empty());
        assert_eq!(summary.cost_in(Currency::Eur), Decimal::new(350, 2));
    }
}
