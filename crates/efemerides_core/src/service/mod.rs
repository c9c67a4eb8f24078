//! Application-root state and intent handling.
//!
//! # Responsibility
//! - Own the store, type index, view state and selection for one session.
//! - Apply renderer intents and report which views need repainting.
//! - Keep presentation layers free of calendar and selection rules.

pub mod calendar_app;
