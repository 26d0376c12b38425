//! # Application Layer
//!
//! Use cases and services built on the domain layer.
//!
//! - [`services`]: Pure optimization, ranking and savings services
//! - [`use_cases`]: Orchestration over repository ports
//! - [`error`]: Application error type

pub mod error;
pub mod services;
pub mod use_cases;
