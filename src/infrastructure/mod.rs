//! # Infrastructure Layer
//!
//! Adapters behind the ports the application layer depends on.
//!
//! - [`persistence`]: Repository traits and in-memory implementations

pub mod persistence;
