//! Properties of the per-item selection that hold for any input.
#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use deazl_optimizer::application::services::{
    OptimizationItem, PriceOptimizationService, RankingStrategy, WeightedScoreStrategy,
};
use deazl_optimizer::domain::entities::{PriceAlternative, UserPreferences};
use deazl_optimizer::domain::value_objects::{
    Currency, ItemId, Money, OptimizationReason, PriceId, ProductId, StoreId,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
struct AltInput {
    cents: i64,
    store: u8,
    quality: Option<u8>,
}

fn build(index: usize, input: &AltInput) -> PriceAlternative {
    let mut builder = PriceAlternative::builder(
        PriceId::new(format!("p{index}")),
        ProductId::new("prod"),
        StoreId::new(format!("s{}", input.store)),
        Money::new(Decimal::new(input.cents, 2), Currency::Eur).unwrap(),
    );
    if let Some(q) = input.quality {
        builder = builder.quality_score(f64::from(q));
    }
    builder.try_build().unwrap()
}

fn build_all(inputs: &[AltInput]) -> Vec<PriceAlternative> {
    inputs.iter().enumerate().map(|(i, s)| build(i, s)).collect()
}

fn alt_input() -> impl Strategy<Value = AltInput> {
    (1i64..=10_000, 0u8..6, proptest::option::of(0u8..=100)).prop_map(|(cents, store, quality)| {
        AltInput {
            cents,
            store,
            quality,
        }
    })
}

fn preferences() -> impl Strategy<Value = UserPreferences> {
    (0u8..=10, proptest::collection::btree_set(0u8..6, 0..3), any::<bool>()).prop_map(
        |(tenths, favorites, suggestions)| {
            UserPreferences::new(
                f64::from(tenths) / 10.0,
                10.0,
                favorites.into_iter().map(|s| StoreId::new(format!("s{s}"))),
                suggestions,
            )
            .unwrap()
        },
    )
}

fn optimize_one(
    alternatives: Vec<PriceAlternative>,
    preferences: &UserPreferences,
) -> deazl_optimizer::domain::entities::OptimizationResult {
    let items = vec![OptimizationItem::new(ItemId::new("item"), alternatives)];
    PriceOptimizationService::new()
        .optimize_list(&items, preferences)
        .unwrap()
        .remove(&ItemId::new("item"))
        .unwrap()
}

fn score_of(alternatives: &[PriceAlternative], id: &PriceId, preferences: &UserPreferences) -> f64 {
    WeightedScoreStrategy::new()
        .rank(alternatives, preferences)
        .into_iter()
        .find(|r| r.alternative.id() == id)
        .map(|r| r.score())
        .unwrap()
}

proptest! {
    #[test]
    fn one_result_per_item_from_its_own_alternatives(
        lists in proptest::collection::vec(proptest::collection::vec(alt_input(), 0..6), 0..5),
        prefs in preferences(),
    ) {
        let items: Vec<OptimizationItem> = lists
            .iter()
            .enumerate()
            .map(|(i, inputs)| OptimizationItem::new(ItemId::new(format!("item-{i}")), build_all(inputs)))
            .collect();

        let results = PriceOptimizationService::new().optimize_list(&items, &prefs).unwrap();

        prop_assert_eq!(results.len(), items.len());
        for item in &items {
            let result = &results[&item.item_id];
            match &result.selected_price_id {
                Some(id) => {
                    prop_assert!(item.alternatives.iter().any(|a| a.id() == id));
                }
                None => {
                    prop_assert!(item.alternatives.is_empty());
                    prop_assert_eq!(result.reason, OptimizationReason::OnlyOption);
                    prop_assert_eq!(result.score, 0.0);
                }
            }
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical(
        inputs in proptest::collection::vec(alt_input(), 0..8),
        prefs in preferences(),
    ) {
        let first = optimize_one(build_all(&inputs), &prefs);
        let second = optimize_one(build_all(&inputs), &prefs);

        prop_assert_eq!(first.score.to_bits(), second.score.to_bits());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn singleton_is_only_option(input in alt_input(), prefs in preferences()) {
        let result = optimize_one(vec![build(0, &input)], &prefs);

        prop_assert_eq!(result.selected_price_id, Some(PriceId::new("p0")));
        prop_assert_eq!(result.reason, OptimizationReason::OnlyOption);
    }

    #[test]
    fn lowering_a_price_never_lowers_its_score(
        inputs in proptest::collection::vec(alt_input(), 1..8),
        target in any::<prop::sample::Index>(),
        cut in 1i64..=9_999,
        prefs in preferences(),
    ) {
        let index = target.index(inputs.len());
        let before = build_all(&inputs);
        let id = before[index].id().clone();

        let mut lowered = inputs.clone();
        lowered[index].cents = (lowered[index].cents - cut).max(0);
        prop_assume!(lowered[index].cents < inputs[index].cents);
        let after = build_all(&lowered);

        prop_assert!(score_of(&after, &id, &prefs) >= score_of(&before, &id, &prefs));
    }

    #[test]
    fn pure_price_weight_selects_a_cheapest_price(
        inputs in proptest::collection::vec(alt_input(), 1..8),
    ) {
        let prefs = UserPreferences::new(1.0, 10.0, Vec::<StoreId>::new(), true).unwrap();
        let alternatives = build_all(&inputs);
        let cheapest = alternatives.iter().map(|a| a.price().amount()).min().unwrap();

        let result = optimize_one(alternatives.clone(), &prefs);
        let selected = alternatives
            .iter()
            .find(|a| Some(a.id()) == result.selected_price_id.as_ref())
            .unwrap();

        prop_assert_eq!(selected.price().amount(), cheapest);
    }
}

#[test]
fn equal_scores_resolve_to_lower_amount_then_store_id() {
    // Equal scores through quality: 0.5 * 1.0 + 0.5 * 0.0 == 0.5 * 0.0 + 0.5 * 1.0
    let prefs = UserPreferences::new(0.5, 10.0, Vec::<StoreId>::new(), true).unwrap();
    let cheap = build(0, &AltInput { cents: 100, store: 2, quality: Some(0) });
    let dear = build(1, &AltInput { cents: 200, store: 1, quality: Some(100) });
    let result = optimize_one(vec![dear, cheap], &prefs);
    assert_eq!(result.selected_price_id, Some(PriceId::new("p0")));

    let a = build(0, &AltInput { cents: 150, store: 3, quality: None });
    let b = build(1, &AltInput { cents: 150, store: 1, quality: None });
    let result = optimize_one(vec![a, b], &prefs);
    assert_eq!(result.selected_price_id, Some(PriceId::new("p1")));
}
