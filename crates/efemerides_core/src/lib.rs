//! Core logic for the efemérides calendar.
//! This crate owns every calendar, filter and selection invariant; renderers
//! only translate its views to pixels and user events back to intents.

pub mod calendar;
pub mod index;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use calendar::{
    compute_detail, compute_month, DayCell, DetailView, Direction, EmptyState, MonthView,
    YearMonth,
};
pub use index::types::derive_types;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::date_key::{DateKey, DateKeyError};
pub use model::efemeride::Efemeride;
pub use service::calendar_app::{CalendarApp, CalendarIntent, Redraw};
pub use store::{
    load_with_fallback, try_load, EventSource, EventStore, FileSource, HttpSource, LoadError,
    LoadResult, SourceLocation,
};

/// Minimal health-check API for adapter wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
