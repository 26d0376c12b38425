//! End-to-end optimization of stored shopping lists over in-memory repositories.
#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use deazl_optimizer::application::use_cases::{
    ActionResponse, OptimizeListRequest, OptimizeListResponse, OptimizeShoppingListUseCase,
};
use deazl_optimizer::domain::entities::{PreferencesOverride, PriceAlternative, ShoppingListItem};
use deazl_optimizer::domain::value_objects::{
    Currency, ItemId, Money, OptimizationReason, PriceId, ProductId, ShoppingListId, StoreId,
};
use deazl_optimizer::infrastructure::persistence::in_memory::{
    InMemoryPreferencesRepository, InMemoryPriceRepository, InMemoryShoppingListRepository,
};
use deazl_optimizer::infrastructure::persistence::ShoppingListRepository;
use rust_decimal::Decimal;
use std::sync::Arc;

fn price(id: &str, product: &str, store: &str, cents: i64) -> PriceAlternative {
    PriceAlternative::builder(
        PriceId::new(id),
        ProductId::new(product),
        StoreId::new(store),
        Money::new(Decimal::new(cents, 2), Currency::Eur).unwrap(),
    )
    .store_name(format!("Store {store}"))
    .try_build()
    .unwrap()
}

#[tokio::test]
async fn weekly_basket_is_optimized_and_saved() {
    let prices = Arc::new(InMemoryPriceRepository::with_prices([
        price("milk-a", "milk", "a", 119),
        price("milk-b", "milk", "b", 99),
        price("eggs-a", "eggs", "a", 289),
        price("eggs-c", "eggs", "c", 310),
    ]));
    let lists = Arc::new(InMemoryShoppingListRepository::new());
    let list = ShoppingListId::new("weekly");
    for (item, product, qty) in [("i-milk", "milk", 2), ("i-eggs", "eggs", 1), ("i-salt", "salt", 1)] {
        lists
            .save_item(
                &ShoppingListItem::new(ItemId::new(item), list.clone(), ProductId::new(product))
                    .with_quantity(Decimal::from(qty))
                    .unwrap(),
            )
            .await
            .unwrap();
    }

    let use_case = OptimizeShoppingListUseCase::new(
        prices,
        Arc::new(InMemoryPreferencesRepository::new()),
        lists.clone(),
    );
    let request = OptimizeListRequest::new(list.clone()).with_overrides(PreferencesOverride {
        price_weight: Some(1.0),
        ..Default::default()
    });

    let response: ActionResponse<OptimizeListResponse> = use_case.execute_action(request).await;
    assert!(response.success);
    let data = response.data.unwrap();

    let milk = &data.results[&ItemId::new("i-milk")];
    assert_eq!(milk.selected_price_id, Some(PriceId::new("milk-b")));
    assert_eq!(milk.reason, OptimizationReason::BestPrice);
    assert!(milk.justification.contains("Store b"));

    let salt = &data.results[&ItemId::new("i-salt")];
    assert_eq!(salt.selected_price_id, None);
    assert_eq!(salt.reason, OptimizationReason::OnlyOption);

    // 2 × 0.99 + 2.89
    assert_eq!(data.summary.cost_in(Currency::Eur), Decimal::new(487, 2));
    // 2 × 0.20 + 0.21
    assert_eq!(data.summary.savings_in(Currency::Eur), Decimal::new(61, 2));

    let saved = lists.items(&list).await.unwrap();
    let selections: Vec<Option<&str>> = saved
        .iter()
        .map(|i| i.selected_price_id().map(PriceId::as_str))
        .collect();
    assert_eq!(selections, vec![Some("eggs-a"), Some("milk-b"), None]);
}

#[tokio::test]
async fn response_serializes_reason_codes() {
    let lists = Arc::new(InMemoryShoppingListRepository::new());
    let list = ShoppingListId::new("l1");
    lists
        .save_item(&ShoppingListItem::new(ItemId::new("i1"), list.clone(), ProductId::new("milk")))
        .await
        .unwrap();

    let use_case = OptimizeShoppingListUseCase::new(
        Arc::new(InMemoryPriceRepository::with_prices([price("p1", "milk", "a", 100)])),
        Arc::new(InMemoryPreferencesRepository::new()),
        lists,
    );
    let response = use_case.execute_action(OptimizeListRequest::new(list)).await;

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["success"], true);
    assert!(json.get("error").is_none());
    assert_eq!(json["data"]["results"]["i1"]["reason"], "only-option");
    assert_eq!(json["data"]["results"]["i1"]["selected_price_id"], "p1");
}
