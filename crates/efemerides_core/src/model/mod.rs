//! Domain model for dated notes and their calendar keys.
//!
//! # Responsibility
//! - Define the immutable record loaded from the efemérides document.
//! - Define the canonical month-day key used for every store lookup.
//!
//! # Invariants
//! - Records carry no identity; duplicates are legal and keep their order.
//! - Keys format as `<month>-<day>` without zero-padding.

pub mod date_key;
pub mod efemeride;
