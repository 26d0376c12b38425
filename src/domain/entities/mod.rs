//! # Domain Entities
//!
//! - [`PriceAlternative`]: Observed price for a product at a store
//! - [`UserPreferences`]: Validated optimizer preferences
//! - [`OptimizationResult`]: Per-item optimization outcome
//! - [`ShoppingListItem`]: Shopping-list line the optimizer writes back to

pub mod optimization_result;
pub mod price_alternative;
pub mod shopping_list_item;
pub mod user_preferences;

pub use optimization_result::{OptimizationResult, ScoreBreakdown};
pub use price_alternative::{PriceAlternative, PriceAlternativeBuilder, StoreRef};
pub use shopping_list_item::ShoppingListItem;
pub use user_preferences::{DEFAULT_MAX_RADIUS_KM, PreferencesOverride, UserPreferences};
