//! Day detail computation.

use crate::calendar::year_month::month_name;
use crate::model::date_key::DateKey;
use crate::model::efemeride::Efemeride;
use crate::store::EventStore;

const EMPTY_HEADLINE: &str = "No hay efemérides registradas para esta fecha";
const EMPTY_HINT: &str = "¡Pero cada día es especial por sí mismo!";

/// Placeholder texts shown when a day has nothing to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub headline: String,
    pub hint: &'static str,
    /// Whether a type filter was active, so emptiness may be filter-induced.
    pub filtered: bool,
}

impl EmptyState {
    fn for_filter(filter: Option<&str>) -> Self {
        match filter {
            None => Self {
                headline: EMPTY_HEADLINE.to_string(),
                hint: EMPTY_HINT,
                filtered: false,
            },
            Some(category) => Self {
                headline: format!("No hay efemérides de tipo «{category}» para esta fecha"),
                hint: EMPTY_HINT,
                filtered: true,
            },
        }
    }
}

/// Detail panel content for one selected day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub date_key: DateKey,
    /// Human label such as `17 de Octubre`.
    pub label: String,
    pub events: Vec<Efemeride>,
    /// Present only when `events` is empty.
    pub empty_state: Option<EmptyState>,
}

impl DetailView {
    /// Builds the panel for `key`, filtering its notes by `filter`.
    pub fn build(store: &EventStore, key: DateKey, filter: Option<&str>) -> Self {
        let events = compute_detail(store, key, filter);
        let empty_state = events.is_empty().then(|| EmptyState::for_filter(filter));
        Self {
            date_key: key,
            label: format!("{} de {}", key.day(), month_name(key.month())),
            events,
            empty_state,
        }
    }
}

/// Returns the notes stored for `key` that pass `filter`, in storage order.
///
/// Never returns `None`; no match is an empty list.
pub fn compute_detail(store: &EventStore, key: DateKey, filter: Option<&str>) -> Vec<Efemeride> {
    store
        .lookup(key)
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}
