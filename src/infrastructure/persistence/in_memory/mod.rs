//! # In-Memory Repositories
//!
//! In-memory implementations for testing without database dependencies.
//!
//! ## Available Repositories
//!
//! - [`InMemoryPriceRepository`]: Price observations
//! - [`InMemoryPreferencesRepository`]: User preferences
//! - [`InMemoryShoppingListRepository`]: Shopping-list items
//!
//! ## Thread Safety
//!
//! All implementations use `Arc<RwLock<HashMap>>` for thread-safe access.

pub mod preferences_repository;
pub mod price_repository;
pub mod shopping_list_repository;

pub use preferences_repository::InMemoryPreferencesRepository;
pub use price_repository::InMemoryPriceRepository;
pub use shopping_list_repository::InMemoryShoppingListRepository;
