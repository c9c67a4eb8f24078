//! Displayed month with year context.

use chrono::{Datelike, NaiveDate};

/// Spanish month names, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Returns the display name for a 1-based month, empty when out of range.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or_default()
}

/// Navigation direction for adjacent-month moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// A year plus a 1-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a value, returning `None` when `month` is not in `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// Month in `1..=12`.
    pub fn month(self) -> u32 {
        self.month
    }

    /// Month in `0..=11`.
    pub fn month0(self) -> u32 {
        self.month - 1
    }

    /// Moves one month in `direction`, wrapping across year boundaries.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Next if self.month == 12 => Self {
                year: self.year.saturating_add(1),
                month: 1,
            },
            Direction::Next => Self {
                month: self.month + 1,
                ..self
            },
            Direction::Prev if self.month == 1 => Self {
                year: self.year.saturating_sub(1),
                month: 12,
            },
            Direction::Prev => Self {
                month: self.month - 1,
                ..self
            },
        }
    }

    /// First day of the month, `None` outside chrono's supported year range.
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Number of days in the month, leap years included.
    ///
    /// Computed as the day before the first of the following month.
    /// Returns 0 outside chrono's supported year range.
    pub fn days_in_month(self) -> u32 {
        self.step(Direction::Next)
            .first_day()
            .and_then(|next_first| next_first.pred_opt())
            .filter(|last| last.month() == self.month)
            .map(|last| last.day())
            .unwrap_or(0)
    }

    /// Blank slots before day 1, with Sunday as the first column.
    pub fn first_weekday_offset(self) -> u32 {
        self.first_day()
            .map(|first| first.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Whether `day` names a real day of this month.
    pub fn contains_day(self, day: u32) -> bool {
        (1..=self.days_in_month()).contains(&day)
    }

    pub fn name(self) -> &'static str {
        month_name(self.month)
    }
}
