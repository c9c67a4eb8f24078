//! Document sources and the load-with-fallback policy.
//!
//! # Invariants
//! - One fetch per load; no retries.
//! - Any fetch or parse failure resolves to `EventStore::fallback()`.

use crate::store::{EventStore, LoadError, LoadResult};
use log::{info, warn};
use std::path::PathBuf;

/// Environment variable holding the document location (URL or file path).
pub const SOURCE_ENV_VAR: &str = "EFEMERIDES_SOURCE";
/// Location used when no explicit source is configured.
pub const DEFAULT_SOURCE: &str = "efemerides.json";

/// Provider of the raw efemérides document.
pub trait EventSource {
    /// Returns the document body.
    fn fetch(&self) -> LoadResult<String>;

    /// Short, log-safe description of where the document comes from.
    fn describe(&self) -> String;
}

/// Fetches the document over HTTP(S) with a blocking client.
pub struct HttpSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::blocking::Client::new())
    }

    pub fn with_client(url: impl Into<String>, client: reqwest::blocking::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

impl EventSource for HttpSource {
    fn fetch(&self) -> LoadResult<String> {
        let response = self.client.get(self.url.as_str()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }
        Ok(response.text()?)
    }

    fn describe(&self) -> String {
        format!("http:{}", self.url)
    }
}

/// Reads the document from the local file system.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EventSource for FileSource {
    fn fetch(&self) -> LoadResult<String> {
        Ok(std::fs::read_to_string(&self.path)?)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Parsed document location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Http(String),
    File(PathBuf),
}

impl SourceLocation {
    /// Classifies `raw` as a URL (`http://`, `https://`) or a file path.
    ///
    /// Blank input resolves to [`DEFAULT_SOURCE`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::File(PathBuf::from(DEFAULT_SOURCE));
        }
        let lowered = trimmed.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            Self::Http(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    /// Resolves the location from [`SOURCE_ENV_VAR`], falling back to
    /// [`DEFAULT_SOURCE`] when unset or blank.
    pub fn from_env() -> Self {
        match std::env::var(SOURCE_ENV_VAR) {
            Ok(raw) => Self::parse(raw.as_str()),
            Err(_) => Self::parse(DEFAULT_SOURCE),
        }
    }

    /// Builds the matching source implementation.
    pub fn into_source(self) -> Box<dyn EventSource> {
        match self {
            Self::Http(url) => Box::new(HttpSource::new(url)),
            Self::File(path) => Box::new(FileSource::new(path)),
        }
    }
}

/// Fetches and parses the document, surfacing any failure.
pub fn try_load(source: &dyn EventSource) -> LoadResult<EventStore> {
    let body = source.fetch()?;
    EventStore::from_json(body.as_str())
}

/// Loads the store, substituting the embedded dataset on any failure.
///
/// The failure is logged and then dropped; callers always receive a store.
pub fn load_with_fallback(source: &dyn EventSource) -> EventStore {
    match try_load(source) {
        Ok(store) => {
            info!(
                "event=store_load module=store status=ok source={} entries={}",
                source.describe(),
                store.len()
            );
            store
        }
        Err(err) => {
            warn!(
                "event=store_load module=store status=fallback source={} reason={}",
                source.describe(),
                err
            );
            EventStore::fallback()
        }
    }
}
