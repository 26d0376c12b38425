//! # In-Memory Preferences Repository
//!
//! In-memory implementation of [`PreferencesRepository`] for testing.

use crate::domain::entities::user_preferences::UserPreferences;
use crate::domain::value_objects::UserId;
use crate::infrastructure::persistence::traits::{PreferencesRepository, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`PreferencesRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferencesRepository {
    storage: Arc<RwLock<HashMap<UserId, UserPreferences>>>,
}

impl InMemoryPreferencesRepository {
    /// Creates a new empty in-memory preferences repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all stored preferences.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

#[async_trait]
impl PreferencesRepository for InMemoryPreferencesRepository {
    async fn get(&self, user_id: &UserId) -> RepositoryResult<Option<UserPreferences>> {
        let storage = self.storage.read().await;
        Ok(storage.get(user_id).cloned())
    }

    async fn save(&self, user_id: &UserId, preferences: &UserPreferences) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.insert(user_id.clone(), preferences.clone());
        Ok(())
    }
}
