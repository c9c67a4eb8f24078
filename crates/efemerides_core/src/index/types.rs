//! Category (type) index.
//!
//! # Invariants
//! - Every record is visited exactly once.
//! - Output keeps first-seen order and holds no duplicates.
//! - Records without a category contribute nothing.

use crate::store::EventStore;
use std::collections::HashSet;

/// Collects distinct categories across the store in first-seen order.
///
/// An empty store yields an empty list.
pub fn derive_types(store: &EventStore) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut types = Vec::new();
    for (_, items) in store.iter() {
        for category in items.iter().filter_map(|item| item.category.as_deref()) {
            if seen.insert(category) {
                types.push(category.to_string());
            }
        }
    }
    types
}
