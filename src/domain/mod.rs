//! # Domain Layer
//!
//! Value objects, entities and errors for shopping-list price optimization.
//! Nothing in this layer performs I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;
