//! # Application Services
//!
//! Pure services over domain data.
//!
//! This module provides:
//! - [`PriceOptimizationService`]: Per-item best price selection
//! - [`RankingStrategy`]: Strategies for ranking price alternatives
//! - [`summarize`]: Basket totals and saving suggestions

pub mod price_optimization;
pub mod ranking_strategy;
pub mod savings;

pub use price_optimization::{
    OptimizationItem, PriceOptimizationService, classify, eligible_alternatives,
};
pub use ranking_strategy::{
    BestPriceStrategy, FAVORITE_STORE_BOOST, RankedAlternative, RankingStrategy,
    WeightedScoreStrategy,
};
pub use savings::{OptimizationSummary, SavingSuggestion, summarize};
