//! # Persistence Layer
//!
//! Repository ports and their implementations.
//!
//! ## Repository Traits (Ports)
//!
//! - [`PriceRepository`]: Observed prices per product
//! - [`PreferencesRepository`]: Stored user preferences
//! - [`ShoppingListRepository`]: Shopping-list items
//!
//! ## Implementations
//!
//! - `in_memory`: In-memory implementations for tests and the CLI

pub mod in_memory;
pub mod traits;

pub use traits::{
    PreferencesRepository, PriceRepository, RepositoryError, RepositoryResult,
    ShoppingListRepository,
};
