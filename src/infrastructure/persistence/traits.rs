//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! The optimizer itself performs no I/O. These ports are what the
//! optimization use case reads prices, preferences and shopping-list items
//! through, and writes selections back to.
//!
//! # Available Repositories
//!
//! - [`PriceRepository`]: Observed prices per product
//! - [`PreferencesRepository`]: Stored optimizer preferences per user
//! - [`ShoppingListRepository`]: Shopping-list items and their selections
//!
//! # Examples
//!
//! ```ignore
//! use deazl_optimizer::infrastructure::persistence::traits::PriceRepository;
//!
//! async fn count_prices(repo: &impl PriceRepository, products: &[ProductId]) {
//!     let prices = repo.find_by_products(products).await.unwrap();
//!     println!("Found {} prices", prices.len());
//! }
//! ```

use crate::domain::entities::price_alternative::PriceAlternative;
use crate::domain::entities::shopping_list_item::ShoppingListItem;
use crate::domain::entities::user_preferences::UserPreferences;
use crate::domain::value_objects::{ItemId, PriceId, ProductId, ShoppingListId, UserId};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// The backing store could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for observed prices.
#[async_trait]
pub trait PriceRepository: Send + Sync + fmt::Debug {
    /// Saves a price observation.
    ///
    /// If a price with the same id exists, it is replaced.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Connection` if the store is unreachable.
    async fn save(&self, price: &PriceAlternative) -> RepositoryResult<()>;

    /// Finds every known price for the given products in one lookup.
    ///
    /// Products without prices contribute nothing. The order of the returned
    /// prices is unspecified.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Connection` if the store is unreachable.
    async fn find_by_products(
        &self,
        product_ids: &[ProductId],
    ) -> RepositoryResult<Vec<PriceAlternative>>;
}

/// Repository for stored user preferences.
#[async_trait]
pub trait PreferencesRepository: Send + Sync + fmt::Debug {
    /// Gets the stored preferences of a user.
    ///
    /// Returns `None` if the user never saved any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Connection` if the store is unreachable.
    async fn get(&self, user_id: &UserId) -> RepositoryResult<Option<UserPreferences>>;

    /// Saves a user's preferences, replacing previous ones.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Connection` if the store is unreachable.
    async fn save(&self, user_id: &UserId, preferences: &UserPreferences) -> RepositoryResult<()>;
}

/// Repository for shopping-list items.
#[async_trait]
pub trait ShoppingListRepository: Send + Sync + fmt::Debug {
    /// Saves an item. Existing items are replaced.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Connection` if the store is unreachable.
    async fn save_item(&self, item: &ShoppingListItem) -> RepositoryResult<()>;

    /// Gets every item of a list.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the list does not exist.
    async fn items(&self, list_id: &ShoppingListId) -> RepositoryResult<Vec<ShoppingListItem>>;

    /// Replaces the selected price of an item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the item does not exist.
    async fn set_selected_price(
        &self,
        item_id: &ItemId,
        price_id: Option<PriceId>,
    ) -> RepositoryResult<()>;
}
