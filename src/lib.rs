//! # Deazl Optimizer
//!
//! Shopping-list price optimization for the Deazl price comparison app.
//!
//! For every item of a shopping list the optimizer picks one price among the
//! observed alternatives, scoring them on price, quality and favorite
//! stores, and explains the choice with a reason code and a sentence.
//!
//! # Layers
//!
//! - [`domain`]: Value objects, entities and validation errors
//! - [`application`]: Optimization, ranking and savings services, and the
//!   list optimization use case
//! - [`infrastructure`]: Repository ports and in-memory adapters
//! - [`config`] and [`telemetry`]: Runtime settings and logging for the
//!   binary
//!
//! # Examples
//!
//! ```
//! use deazl_optimizer::application::services::{OptimizationItem, PriceOptimizationService};
//! use deazl_optimizer::domain::value_objects::ItemId;
//!
//! let service = PriceOptimizationService::new();
//! let preferences = PriceOptimizationService::default_preferences();
//! let items = vec![OptimizationItem::new(ItemId::new("item-1"), vec![])];
//!
//! let results = service.optimize_list(&items, &preferences).unwrap();
//! assert!(!results[&ItemId::new("item-1")].has_selection());
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
