//! # In-Memory Shopping List Repository
//!
//! In-memory implementation of [`ShoppingListRepository`] for testing.
//!
//! Items are grouped per list and kept sorted by item id, so reads are
//! deterministic.

use crate::domain::entities::shopping_list_item::ShoppingListItem;
use crate::domain::value_objects::{ItemId, PriceId, ShoppingListId};
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, ShoppingListRepository,
};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

type ListStorage = HashMap<ShoppingListId, BTreeMap<ItemId, ShoppingListItem>>;

/// In-memory implementation of [`ShoppingListRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryShoppingListRepository {
    storage: Arc<RwLock<ListStorage>>,
}

impl InMemoryShoppingListRepository {
    /// Creates a new empty in-memory shopping list repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list. Existing lists are left untouched.
    pub async fn create_list(&self, list_id: &ShoppingListId) {
        let mut storage = self.storage.write().await;
        storage.entry(list_id.clone()).or_default();
    }

    /// Returns one item by id, searching every list.
    pub async fn item(&self, item_id: &ItemId) -> Option<ShoppingListItem> {
        let storage = self.storage.read().await;
        storage
            .values()
            .find_map(|items| items.get(item_id))
            .cloned()
    }
}

#[async_trait]
impl ShoppingListRepository for InMemoryShoppingListRepository {
    async fn save_item(&self, item: &ShoppingListItem) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage
            .entry(item.list_id().clone())
            .or_default()
            .insert(item.id().clone(), item.clone());
        Ok(())
    }

    async fn items(&self, list_id: &ShoppingListId) -> RepositoryResult<Vec<ShoppingListItem>> {
        let storage = self.storage.read().await;
        storage
            .get(list_id)
            .map(|items| items.values().cloned().collect())
            .ok_or_else(|| RepositoryError::not_found("ShoppingList", list_id.as_str()))
    }

    async fn set_selected_price(
        &self,
        item_id: &ItemId,
        price_id: Option<PriceId>,
    ) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        let item = storage
            .values_mut()
            .find_map(|items| items.get_mut(item_id))
            .ok_or_else(|| RepositoryError::not_found("ShoppingListItem", item_id.as_str()))?;
        item.select_price(price_id);
        Ok(())
    }
}
