//! Efeméride record.
//!
//! # Responsibility
//! - Mirror one entry of the source document (`tipo`, `evento`, `descripcion`).
//! - Keep ingestion permissive: missing fields become `None`, never an error.
//! - Scalars of the wrong type are kept as text; nulls and nested values are
//!   dropped to `None`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One dated historical or cultural note.
///
/// Fields are optional because the source document is not validated field by
/// field. Absent values render as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Efemeride {
    /// Serialized as `tipo`; used by the type filter.
    #[serde(
        rename = "tipo",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    /// Serialized as `evento`.
    #[serde(
        rename = "evento",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    /// Serialized as `descripcion`.
    #[serde(
        rename = "descripcion",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl Efemeride {
    /// Builds a record from any JSON value; non-objects yield an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_else(|_| Self::empty()),
            _ => Self::empty(),
        }
    }

    fn empty() -> Self {
        Self {
            category: None,
            title: None,
            description: None,
        }
    }

    /// Creates a fully populated record.
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: Some(category.into()),
            title: Some(title.into()),
            description: Some(description.into()),
        }
    }

    /// Category text for display, empty when absent.
    pub fn category_text(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    /// Title text for display, empty when absent.
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Description text for display, empty when absent.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Returns whether this record passes the optional category filter.
    ///
    /// Exact, case-sensitive comparison. A record without category never
    /// matches a set filter.
    pub fn matches_filter(&self, filter: Option<&str>) -> bool {
        match filter {
            None => true,
            Some(wanted) => self.category.as_deref() == Some(wanted),
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}
