//! Event store loading and lookup.
//!
//! # Responsibility
//! - Fetch the efemérides document from its configured location.
//! - Degrade to the embedded dataset whenever the document is unavailable.
//! - Serve read-only lookups by `DateKey`.
//!
//! # Invariants
//! - The store is built once and never mutated afterwards.
//! - `load_with_fallback` never fails; `LoadError` does not leave this module
//!   through that path.
//! - Keys that are not canonical stay in the store but are never matched.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod event_store;
mod source;

pub use event_store::EventStore;
pub use source::{
    load_with_fallback, try_load, EventSource, FileSource, HttpSource, SourceLocation,
    DEFAULT_SOURCE, SOURCE_ENV_VAR,
};

pub type LoadResult<T> = Result<T, LoadError>;

/// Reasons the external document could not become a store.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Http(reqwest::Error),
    Status(u16),
    Parse(serde_json::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read efemerides document: {err}"),
            Self::Http(err) => write!(f, "failed to fetch efemerides document: {err}"),
            Self::Status(code) => write!(f, "efemerides document request returned status {code}"),
            Self::Parse(err) => write!(f, "efemerides document is not valid: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Http(err) => Some(err),
            Self::Status(_) => None,
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
