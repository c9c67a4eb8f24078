//! In-memory efemérides store.

use crate::model::date_key::DateKey;
use crate::model::efemeride::Efemeride;
use crate::store::LoadResult;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;

/// Mapping from date key text to the ordered notes of that day.
///
/// Entries keep source document order, which keeps the derived type list
/// deterministic. Canonical keys are indexed by `DateKey` for lookups;
/// any other key stays in `entries` but is unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    entries: IndexMap<String, Vec<Efemeride>>,
    positions: HashMap<DateKey, usize>,
}

impl EventStore {
    /// Parses a document shaped as `{ "<month>-<day>": [ {tipo, evento, descripcion} ] }`.
    ///
    /// Ingestion is permissive below the top level: keys are kept verbatim,
    /// a day that is not an array holds no notes, and mistyped record fields
    /// are coerced per [`Efemeride::from_value`].
    ///
    /// # Errors
    /// - `LoadError::Parse` when the document is not JSON or not an object.
    pub fn from_json(document: &str) -> LoadResult<Self> {
        let raw: IndexMap<String, Value> = serde_json::from_str(document)?;
        Ok(Self::from_entries(raw.into_iter().map(|(key, day)| {
            let items = match day {
                Value::Array(records) => records.into_iter().map(Efemeride::from_value).collect(),
                _ => Vec::new(),
            };
            (key, items)
        })))
    }

    /// Builds a store from already-parsed entries, preserving iteration order.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Vec<Efemeride>)>,
    {
        let entries: IndexMap<String, Vec<Efemeride>> = entries
            .into_iter()
            .map(|(key, items)| (key.into(), items))
            .collect();
        let positions = entries
            .keys()
            .enumerate()
            .filter_map(|(position, key)| {
                key.parse::<DateKey>().ok().map(|date_key| (date_key, position))
            })
            .collect();
        Self { entries, positions }
    }

    /// Embedded dataset used when the external document is unavailable.
    pub fn fallback() -> Self {
        Self::from_entries([(
            "1-1",
            vec![
                Efemeride::new(
                    "Mundial",
                    "Año Nuevo",
                    "Celebración del inicio del nuevo año en el calendario gregoriano",
                ),
                Efemeride::new(
                    "Historia",
                    "Creación de la bandera de Cuba (1902)",
                    "Se adopta oficialmente la bandera cubana",
                ),
                Efemeride::new(
                    "Religioso",
                    "Circuncisión de Jesús",
                    "Festividad cristiana celebrada ocho días después de Navidad",
                ),
            ],
        )])
    }

    /// Returns the notes stored for `key`, or an empty slice.
    pub fn lookup(&self, key: DateKey) -> &[Efemeride] {
        self.positions
            .get(&key)
            .and_then(|position| self.entries.get_index(*position))
            .map(|(_, items)| items.as_slice())
            .unwrap_or_default()
    }

    /// Number of keys in the store, including inert ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(raw key, notes)` in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Efemeride])> {
        self.entries
            .iter()
            .map(|(key, items)| (key.as_str(), items.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::EventStore;
    use crate::model::date_key::DateKey;

    #[test]
    fn lookup_returns_empty_slice_for_unknown_key() {
        let store = EventStore::fallback();
        assert!(store.lookup(DateKey::new(3, 8).unwrap()).is_empty());
        assert_eq!(store.lookup(DateKey::new(1, 1).unwrap()).len(), 3);
    }

    #[test]
    fn from_json_keeps_document_order_and_duplicates() {
        let store = EventStore::from_json(
            r#"{
                "5-2": [{"tipo":"B","evento":"x","descripcion":"d"}],
                "1-1": [
                    {"tipo":"A","evento":"y","descripcion":"d"},
                    {"tipo":"A","evento":"y","descripcion":"d"}
                ]
            }"#,
        )
        .expect("valid document");

        let keys = store.iter().map(|(key, _)| key).collect::<Vec<_>>();
        assert_eq!(keys, vec!["5-2", "1-1"]);
        let day = store.lookup(DateKey::new(1, 1).unwrap());
        assert_eq!(day.len(), 2);
        assert_eq!(day[0], day[1]);
    }

    #[test]
    fn non_canonical_keys_are_stored_but_unreachable() {
        let store = EventStore::from_json(
            r#"{"01-01": [{"tipo":"A"}], "2-30": [{"tipo":"B"}]}"#,
        )
        .expect("shape is valid");
        assert_eq!(store.len(), 2);
        assert!(store.lookup(DateKey::new(1, 1).unwrap()).is_empty());
    }

    #[test]
    fn from_json_rejects_non_object_documents() {
        assert!(EventStore::from_json(r#"["1-1"]"#).is_err());
        assert!(EventStore::from_json("not json").is_err());
    }

    #[test]
    fn non_array_days_hold_no_notes() {
        let store = EventStore::from_json(r#"{"1-1": {"tipo":"A"}, "1-2": null, "1-3": 7}"#)
            .expect("object document");
        assert_eq!(store.len(), 3);
        for day in 1..=3 {
            assert!(store.lookup(DateKey::new(1, day).unwrap()).is_empty());
        }
    }
}
