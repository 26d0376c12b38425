//! # Use Cases
//!
//! Application use cases orchestrating services and repository ports.
//!
//! - [`OptimizeShoppingListUseCase`]: Optimize a stored list and save the
//!   selections

pub mod optimize_shopping_list;

pub use optimize_shopping_list::{
    ActionResponse, DEFAULT_MAX_ITEMS, OptimizeListRequest, OptimizeListResponse,
    OptimizeShoppingListUseCase,
};
