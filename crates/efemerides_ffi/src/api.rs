//! FFI use-case API for the calendar screen.
//!
//! # Responsibility
//! - Hold the single calendar session of the UI process.
//! - Turn screen events into core intents and return flat snapshots.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The store is loaded once per process; later opens reuse the session.
//! - Every snapshot is renderable: load failures already degraded to the
//!   embedded dataset inside core.

use chrono::Local;
use efemerides_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, load_with_fallback,
    ping as ping_inner, CalendarApp, CalendarIntent, Direction, Efemeride, Redraw,
    SourceLocation,
};
use log::{info, warn};
use std::sync::{Mutex, OnceLock};

static SESSION: OnceLock<Mutex<Option<CalendarApp>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One grid cell of the displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCellItem {
    pub day: u32,
    /// Canonical `<month>-<day>` key.
    pub date_key: String,
    pub has_event: bool,
    pub selected: bool,
}

/// One efeméride card in the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventItem {
    pub category: String,
    pub title: String,
    pub description: String,
}

/// Everything the calendar screen needs to paint itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSnapshot {
    pub year: i32,
    /// Month in `1..=12`.
    pub month: u32,
    pub month_label: String,
    pub leading_blanks: u32,
    pub cells: Vec<DayCellItem>,
    /// Filter selector options, first-seen order.
    pub types: Vec<String>,
    pub active_filter: Option<String>,
    pub selected_day: Option<u32>,
    /// `None` when no day is selected.
    pub detail_label: Option<String>,
    pub events: Vec<EventItem>,
    /// Set when a day is selected but has nothing to show.
    pub empty_message: Option<String>,
    pub empty_hint: Option<String>,
    pub redraw_grid: bool,
    pub redraw_detail: bool,
}

/// Loads the store and starts the session, auto-selecting today.
///
/// `source` overrides `EFEMERIDES_SOURCE` (URL or file path).
///
/// # FFI contract
/// - Sync call; the first call may block on network or file I/O.
/// - Later calls return the existing session without reloading; an explicit
///   `source` passed then is ignored and logged at `warn`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_open(source: Option<String>) -> CalendarSnapshot {
    let mut slot = lock_session();
    if let Some(app) = slot.as_ref() {
        if source.is_some() {
            warn!("event=session_open module=ffi status=ignored_source reason=already_open");
        }
        return snapshot_of(app, Redraw::GridAndDetail);
    }

    let app = slot.insert(open_session(source));
    app.start();
    snapshot_of(app, Redraw::GridAndDetail)
}

/// Returns the current session view without changing state.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_snapshot() -> CalendarSnapshot {
    with_session(|_| Redraw::GridAndDetail)
}

/// Shows the previous month and clears the selection.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_prev_month() -> CalendarSnapshot {
    with_session(|app| app.apply(CalendarIntent::GoToAdjacentMonth(Direction::Prev)))
}

/// Shows the next month and clears the selection.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_next_month() -> CalendarSnapshot {
    with_session(|app| app.apply(CalendarIntent::GoToAdjacentMonth(Direction::Next)))
}

/// Selects `day` of the displayed month; out-of-month days are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_select_day(day: u32) -> CalendarSnapshot {
    with_session(|app| app.apply(CalendarIntent::SelectDay(day)))
}

/// Sets the type filter; `None` or empty clears it.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_set_filter(filter: Option<String>) -> CalendarSnapshot {
    with_session(|app| app.apply(CalendarIntent::SetFilter(filter)))
}

fn lock_session() -> std::sync::MutexGuard<'static, Option<CalendarApp>> {
    SESSION
        .get_or_init(|| Mutex::new(None))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn open_session(source: Option<String>) -> CalendarApp {
    let location = match source {
        Some(raw) => SourceLocation::parse(raw.as_str()),
        None => SourceLocation::from_env(),
    };
    let store = load_with_fallback(location.into_source().as_ref());
    let today = Local::now().date_naive();
    info!(
        "event=session_open module=ffi status=ok entries={} today={}",
        store.len(),
        today
    );
    CalendarApp::new(store, today)
}

// Opens the session with the configured source when the UI skipped `calendar_open`.
fn with_session(intent: impl FnOnce(&mut CalendarApp) -> Redraw) -> CalendarSnapshot {
    let mut slot = lock_session();
    let app = slot.get_or_insert_with(|| open_session(None));
    app.start();
    let redraw = intent(app);
    snapshot_of(app, redraw)
}

fn snapshot_of(app: &CalendarApp, redraw: Redraw) -> CalendarSnapshot {
    let month = app.month_view();
    let detail = app.detail_view();
    let cells = month
        .cells
        .iter()
        .map(|cell| DayCellItem {
            day: cell.day,
            date_key: cell.date_key.to_string(),
            has_event: cell.has_matching_event,
            selected: month.selected_day == Some(cell.day),
        })
        .collect();

    let (detail_label, events, empty_message, empty_hint) = match detail {
        Some(view) => {
            let (message, hint) = match view.empty_state {
                Some(empty) => (Some(empty.headline), Some(empty.hint.to_string())),
                None => (None, None),
            };
            let events = view.events.iter().map(to_event_item).collect();
            (Some(view.label), events, message, hint)
        }
        None => (None, Vec::new(), None, None),
    };

    CalendarSnapshot {
        year: month.year,
        month: month.month,
        month_label: month.label.to_string(),
        leading_blanks: month.leading_blanks,
        cells,
        types: app.types().to_vec(),
        active_filter: app.filter().map(str::to_string),
        selected_day: month.selected_day,
        detail_label,
        events,
        empty_message,
        empty_hint,
        redraw_grid: redraw.grid(),
        redraw_detail: redraw.detail(),
    }
}

fn to_event_item(item: &Efemeride) -> EventItem {
    EventItem {
        category: item.category_text().to_string(),
        title: item.title_text().to_string(),
        description: item.description_text().to_string(),
    }
}
