//! Month grid generation.

use crate::calendar::year_month::YearMonth;
use crate::model::date_key::DateKey;
use crate::store::EventStore;

/// One grid unit for a real day of the displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub date_key: DateKey,
    /// True when at least one note of this day passes the active filter.
    pub has_matching_event: bool,
}

/// Grid output for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    /// Month in `1..=12`.
    pub month: u32,
    /// Display name of the month.
    pub label: &'static str,
    /// Layout-only blank slots before day 1.
    pub leading_blanks: u32,
    pub cells: Vec<DayCell>,
    /// Day shown with the selected style instead of the has-event style.
    pub selected_day: Option<u32>,
}

/// Computes grid cells for `month` against the optional category `filter`.
///
/// A filter naming a category absent from the month still yields the full
/// grid, with every `has_matching_event` false.
pub fn compute_month(store: &EventStore, month: YearMonth, filter: Option<&str>) -> MonthView {
    let cells = (1..=month.days_in_month())
        .map(|day| {
            let date_key = DateKey::from_calendar(month.month(), day);
            let has_matching_event = store
                .lookup(date_key)
                .iter()
                .any(|item| item.matches_filter(filter));
            DayCell {
                day,
                date_key,
                has_matching_event,
            }
        })
        .collect();

    MonthView {
        year: month.year(),
        month: month.month(),
        label: month.name(),
        leading_blanks: month.first_weekday_offset(),
        cells,
        selected_day: None,
    }
}

#[cfg(test)]
mod tests {
    use super::compute_month;
    use crate::calendar::YearMonth;
    use crate::store::EventStore;

    #[test]
    fn january_fallback_marks_new_year_only() {
        let store = EventStore::fallback();
        let view = compute_month(&store, YearMonth::new(2026, 1).unwrap(), None);
        assert_eq!(view.label, "Enero");
        assert_eq!(view.cells.len(), 31);
        let marked = view
            .cells
            .iter()
            .filter(|cell| cell.has_matching_event)
            .map(|cell| cell.day)
            .collect::<Vec<_>>();
        assert_eq!(marked, vec![1]);
    }

    #[test]
    fn filter_restricts_marks() {
        let store = EventStore::fallback();
        let month = YearMonth::new(2026, 1).unwrap();
        assert!(compute_month(&store, month, Some("Religioso")).cells[0].has_matching_event);
        assert!(!compute_month(&store, month, Some("Ciencia")).cells[0].has_matching_event);
    }
}
