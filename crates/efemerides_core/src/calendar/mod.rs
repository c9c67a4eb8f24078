//! Calendar model: month arithmetic, grid cells and day details.
//!
//! # Responsibility
//! - Turn a displayed year/month plus an optional type filter into grid cells.
//! - Produce the filtered detail list for a single day.
//!
//! # Invariants
//! - Grid cells cover exactly `1..=days_in_month`, preceded by
//!   `first_weekday_offset` blank slots (weeks start on Sunday).
//! - Empty results are normal outcomes, never errors.
//! - Nothing here depends on rendering or on the current wall-clock date.

mod detail;
mod month;
mod year_month;

pub use detail::{compute_detail, DetailView, EmptyState};
pub use month::{compute_month, DayCell, MonthView};
pub use year_month::{month_name, Direction, YearMonth, MONTH_NAMES};
