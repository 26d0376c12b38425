//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`PriceId`], [`StoreId`], [`ProductId`]: price observation identifiers
//! - [`ItemId`], [`ShoppingListId`], [`UserId`]: shopping-list identifiers
//!
//! ## Numeric Types
//!
//! - [`Money`]: Non-negative decimal amount with currency and unit
//! - [`PriceWeight`]: Price weight within `[0, 1]`
//! - [`QualityScore`]: Nutrition/quality score within `[0, 100]`
//!
//! ## Domain Enums
//!
//! - [`Currency`], [`PriceUnit`], [`OptimizationReason`]

pub mod arithmetic;
pub mod enums;
pub mod ids;
pub mod money;
pub mod quality_score;
pub mod timestamp;
pub mod weight;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic};
pub use enums::{Currency, OptimizationReason, ParseEnumError, PriceUnit};
pub use ids::{ItemId, PriceId, ProductId, ShoppingListId, StoreId, UserId};
pub use money::Money;
pub use quality_score::QualityScore;
pub use timestamp::Timestamp;
pub use weight::PriceWeight;
