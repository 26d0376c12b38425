//! # Optimize Shopping List Use Case
//!
//! Loads a shopping list, optimizes every item and writes the selections
//! back.
//!
//! # Flow
//!
//! ```text
//! items(list) → resolve preferences → one price lookup
//!             → optimize (abort on invalid input, nothing written)
//!             → set_selected_price per item → results + summary
//! ```
//!
//! Repository failures propagate unmodified inside
//! [`ApplicationError::Repository`]. Nothing is retried.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::price_optimization::{
    OptimizationItem, PriceOptimizationService,
};
use crate::application::services::savings::{OptimizationSummary, summarize};
use crate::domain::entities::optimization_result::OptimizationResult;
use crate::domain::entities::price_alternative::PriceAlternative;
use crate::domain::entities::user_preferences::{PreferencesOverride, UserPreferences};
use crate::domain::value_objects::{ItemId, ProductId, ShoppingListId, UserId};
use crate::infrastructure::persistence::traits::{
    PreferencesRepository, PriceRepository, RepositoryError, ShoppingListRepository,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

/// Default maximum number of items optimized in one request.
pub const DEFAULT_MAX_ITEMS: usize = 500;

/// Request to optimize one shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeListRequest {
    /// List to optimize.
    pub list_id: ShoppingListId,
    /// Owner whose stored preferences apply, if any.
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Per-request preference override.
    #[serde(default)]
    pub overrides: Option<PreferencesOverride>,
}

impl OptimizeListRequest {
    /// Creates a request with no user and no override.
    #[must_use]
    pub fn new(list_id: ShoppingListId) -> Self {
        Self {
            list_id,
            user_id: None,
            overrides: None,
        }
    }

    /// Sets the user whose stored preferences apply.
    #[must_use]
    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Sets the per-request override.
    #[must_use]
    pub fn with_overrides(mut self, overrides: PreferencesOverride) -> Self {
        self.overrides = Some(overrides);
        self
    }
}

/// Outcome of a successful list optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeListResponse {
    /// Optimized list.
    pub list_id: ShoppingListId,
    /// Preferences the optimization ran with.
    pub preferences: UserPreferences,
    /// Result per item.
    pub results: BTreeMap<ItemId, OptimizationResult>,
    /// Basket totals.
    pub summary: OptimizationSummary,
}

/// Structured outcome returned across the request boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse<T> {
    /// True if the action succeeded.
    pub success: bool,
    /// Payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ActionResponse<T> {
    /// Creates a successful response.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Creates a failed response.
    #[must_use]
    pub fn failure(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
        }
    }

    /// Converts a use case result.
    #[must_use]
    pub fn from_result(result: ApplicationResult<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::failure(err),
        }
    }
}

/// Use case for optimizing a stored shopping list.
#[derive(Debug, Clone)]
pub struct OptimizeShoppingListUseCase {
    prices: Arc<dyn PriceRepository>,
    preferences: Arc<dyn PreferencesRepository>,
    lists: Arc<dyn ShoppingListRepository>,
    service: PriceOptimizationService,
    max_items: usize,
}

impl OptimizeShoppingListUseCase {
    /// Creates the use case with the default item limit.
    #[must_use]
    pub fn new(
        prices: Arc<dyn PriceRepository>,
        preferences: Arc<dyn PreferencesRepository>,
        lists: Arc<dyn ShoppingListRepository>,
    ) -> Self {
        Self {
            prices,
            preferences,
            lists,
            service: PriceOptimizationService::new(),
            max_items: DEFAULT_MAX_ITEMS,
        }
    }

    /// Sets the maximum number of items per request.
    #[must_use]
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Returns the maximum number of items per request.
    #[must_use]
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Optimizes a list and writes each selection back.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::NotFound` if the list does not exist
    /// - `ApplicationError::Validation` if the list exceeds the item limit
    /// - `ApplicationError::Domain` for invalid preferences or prices; no
    ///   item is written in that case
    /// - `ApplicationError::Repository` for any other persistence failure
    pub async fn execute(
        &self,
        request: OptimizeListRequest,
    ) -> ApplicationResult<OptimizeListResponse> {
        let list_items = match self.lists.items(&request.list_id).await {
            Ok(items) => items,
            Err(RepositoryError::NotFound { .. }) => {
                return Err(ApplicationError::not_found(
                    "ShoppingList",
                    request.list_id.as_str(),
                ));
            }
            Err(err) => return Err(err.into()),
        };

        if list_items.len() > self.max_items {
            return Err(ApplicationError::validation(format!(
                "list has {} items, limit is {}",
                list_items.len(),
                self.max_items
            )));
        }

        let stored = match &request.user_id {
            Some(user_id) => self.preferences.get(user_id).await?,
            None => None,
        };
        let preferences = UserPreferences::resolve(stored.as_ref(), request.overrides.as_ref())?;

        let product_ids: Vec<ProductId> = list_items
            .iter()
            .map(|item| item.product_id().clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let prices = self.prices.find_by_products(&product_ids).await?;
        tracing::debug!(
            list_id = %request.list_id,
            items = list_items.len(),
            products = product_ids.len(),
            prices = prices.len(),
            "prices loaded"
        );

        let mut by_product: HashMap<ProductId, Vec<PriceAlternative>> = HashMap::new();
        for price in prices {
            by_product
                .entry(price.product_id().clone())
                .or_default()
                .push(price);
        }

        let items: Vec<OptimizationItem> = list_items
            .iter()
            .map(|item| {
                OptimizationItem::new(
                    item.id().clone(),
                    by_product.get(item.product_id()).cloned().unwrap_or_default(),
                )
                .with_quantity(item.quantity())
            })
            .collect();

        let results = self.service.optimize_list(&items, &preferences)?;
        let summary = summarize(&items, &results, &preferences)?;

        for (item_id, result) in &results {
            self.lists
                .set_selected_price(item_id, result.selected_price_id.clone())
                .await?;
        }

        tracing::info!(
            list_id = %request.list_id,
            items = results.len(),
            items_optimized = summary.items_optimized,
            "shopping list optimization saved"
        );

        Ok(OptimizeListResponse {
            list_id: request.list_id,
            preferences,
            results,
            summary,
        })
    }

    /// Runs [`execute`](Self::execute) and wraps the outcome for the
    /// request boundary.
    pub async fn execute_action(
        &self,
        request: OptimizeListRequest,
    ) -> ActionResponse<OptimizeListResponse> {
        let list_id = request.list_id.clone();
        let result = self.execute(request).await;
        if let Err(err) = &result {
            tracing::warn!(list_id = %list_id, error = %err, "shopping list optimization failed");
        }
        ActionResponse::from_result(result)
    }
}
