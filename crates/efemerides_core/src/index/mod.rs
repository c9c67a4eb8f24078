//! Derived indexes over the event store.
//!
//! # Responsibility
//! - Compute the category list that feeds the type filter selector.

pub mod types;
