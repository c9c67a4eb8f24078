//! Calendar session state machine.
//!
//! # Responsibility
//! - Track the displayed month, active type filter and selected day.
//! - Translate `CalendarIntent`s into state changes plus a `Redraw` scope.
//!
//! # Invariants
//! - At most one day is selected, and it belongs to the displayed month.
//! - Month navigation clears the selection.
//! - Changing the filter keeps the selected day; only its detail changes.
//! - Auto-select-today runs once per session, at `start`.

use crate::calendar::{compute_month, DetailView, Direction, MonthView, YearMonth};
use crate::index::types::derive_types;
use crate::model::date_key::DateKey;
use crate::store::EventStore;
use chrono::{Datelike, NaiveDate};
use log::{debug, info};

/// User intents emitted by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarIntent {
    GoToAdjacentMonth(Direction),
    SelectDay(u32),
    /// `None` or an empty string clears the filter.
    SetFilter(Option<String>),
}

/// Views a renderer must repaint after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Nothing,
    Detail,
    Grid,
    GridAndDetail,
}

impl Redraw {
    pub fn grid(self) -> bool {
        matches!(self, Self::Grid | Self::GridAndDetail)
    }

    pub fn detail(self) -> bool {
        matches!(self, Self::Detail | Self::GridAndDetail)
    }
}

/// Single owner of all calendar session state.
#[derive(Debug, Clone)]
pub struct CalendarApp {
    store: EventStore,
    types: Vec<String>,
    displayed: YearMonth,
    filter: Option<String>,
    selected_day: Option<u32>,
    today: NaiveDate,
    started: bool,
}

impl CalendarApp {
    /// Creates a session displaying the month that contains `today`.
    pub fn new(store: EventStore, today: NaiveDate) -> Self {
        Self::with_displayed(store, YearMonth::of(today), today)
    }

    /// Creates a session displaying an explicit month.
    ///
    /// Auto-select-today only fires if `displayed` contains `today`.
    pub fn with_displayed(store: EventStore, displayed: YearMonth, today: NaiveDate) -> Self {
        let types = derive_types(&store);
        Self {
            store,
            types,
            displayed,
            filter: None,
            selected_day: None,
            today,
            started: false,
        }
    }

    /// Completes initialization after the first grid render.
    ///
    /// Selects today when its month is displayed. Later calls do nothing.
    pub fn start(&mut self) -> Redraw {
        if self.started {
            return Redraw::Nothing;
        }
        self.started = true;
        info!(
            "event=calendar_start module=calendar year={} month={} types={}",
            self.displayed.year(),
            self.displayed.month(),
            self.types.len()
        );

        if self.displayed == YearMonth::of(self.today) {
            self.select_day(self.today.day());
            Redraw::GridAndDetail
        } else {
            Redraw::Grid
        }
    }

    /// Dispatches one renderer intent.
    pub fn apply(&mut self, intent: CalendarIntent) -> Redraw {
        match intent {
            CalendarIntent::GoToAdjacentMonth(direction) => self.go_to_adjacent_month(direction),
            CalendarIntent::SelectDay(day) => self.select_day(day),
            CalendarIntent::SetFilter(filter) => self.set_filter(filter),
        }
    }

    /// Moves the displayed month and drops any selection.
    pub fn go_to_adjacent_month(&mut self, direction: Direction) -> Redraw {
        self.displayed = self.displayed.step(direction);
        self.selected_day = None;
        debug!(
            "event=navigate module=calendar direction={:?} year={} month={}",
            direction,
            self.displayed.year(),
            self.displayed.month()
        );
        Redraw::GridAndDetail
    }

    /// Selects `day` of the displayed month, replacing any prior selection.
    ///
    /// Days outside the month are ignored.
    pub fn select_day(&mut self, day: u32) -> Redraw {
        if !self.displayed.contains_day(day) {
            debug!(
                "event=select_day module=calendar status=ignored day={} month={}",
                day,
                self.displayed.month()
            );
            return Redraw::Nothing;
        }

        let previous = self.selected_day.replace(day);
        debug!(
            "event=select_day module=calendar status=ok day={} month={} previous={:?}",
            day,
            self.displayed.month(),
            previous
        );
        if previous == Some(day) {
            Redraw::Detail
        } else {
            Redraw::GridAndDetail
        }
    }

    /// Replaces the active category filter.
    pub fn set_filter(&mut self, filter: Option<String>) -> Redraw {
        let filter = filter.filter(|value| !value.is_empty());
        if filter == self.filter {
            return Redraw::Nothing;
        }
        self.filter = filter;
        debug!(
            "event=set_filter module=calendar active={} selected={:?}",
            self.filter.is_some(),
            self.selected_day
        );
        if self.selected_day.is_some() {
            Redraw::GridAndDetail
        } else {
            Redraw::Grid
        }
    }

    /// Grid for the displayed month under the active filter.
    pub fn month_view(&self) -> MonthView {
        let mut view = compute_month(&self.store, self.displayed, self.filter());
        view.selected_day = self.selected_day;
        view
    }

    /// Detail for the selected day, or `None` when nothing is selected.
    pub fn detail_view(&self) -> Option<DetailView> {
        let day = self.selected_day?;
        let key = DateKey::from_calendar(self.displayed.month(), day);
        Some(DetailView::build(&self.store, key, self.filter()))
    }

    /// Categories available for the filter selector.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn displayed(&self) -> YearMonth {
        self.displayed
    }

    pub fn selected_day(&self) -> Option<u32> {
        self.selected_day
    }
}
