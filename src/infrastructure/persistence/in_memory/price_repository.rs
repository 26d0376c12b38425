//! # In-Memory Price Repository
//!
//! In-memory implementation of [`PriceRepository`] for testing.

use crate::domain::entities::price_alternative::PriceAlternative;
use crate::domain::value_objects::{PriceId, ProductId};
use crate::infrastructure::persistence::traits::{PriceRepository, RepositoryResult};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`PriceRepository`].
#[derive(Debug, Clone)]
pub struct InMemoryPriceRepository {
    storage: Arc<RwLock<HashMap<PriceId, PriceAlternative>>>,
}

impl InMemoryPriceRepository {
    /// Creates a new empty in-memory price repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a repository pre-filled with prices.
    #[must_use]
    pub fn with_prices(prices: impl IntoIterator<Item = PriceAlternative>) -> Self {
        let storage = prices
            .into_iter()
            .map(|p| (p.id().clone(), p))
            .collect::<HashMap<_, _>>();
        Self {
            storage: Arc::new(RwLock::new(storage)),
        }
    }

    /// Returns the number of prices in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryPriceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceRepository for InMemoryPriceRepository {
    async fn save(&self, price: &PriceAlternative) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.insert(price.id().clone(), price.clone());
        Ok(())
    }

    async fn find_by_products(
        &self,
        product_ids: &[ProductId],
    ) -> RepositoryResult<Vec<PriceAlternative>> {
        let wanted: HashSet<&ProductId> = product_ids.iter().collect();
        let storage = self.storage.read().await;
        let mut prices: Vec<PriceAlternative> = storage
            .values()
            .filter(|p| wanted.contains(p.product_id()))
            .cloned()
            .collect();
        prices.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(prices)
    }
}
