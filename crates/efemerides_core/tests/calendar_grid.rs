use efemerides_core::{compute_detail, compute_month, DateKey, Efemeride, EventStore, YearMonth};

fn new_year_store() -> EventStore {
    EventStore::from_entries([("1-1", vec![Efemeride::new("Mundial", "Año Nuevo", "...")])])
}

#[test]
fn every_month_has_contiguous_days_and_sunday_offset() {
    for year in [1900, 1999, 2000, 2023, 2024, 2026, 2100] {
        for month in 1..=12 {
            let displayed = YearMonth::new(year, month).unwrap();
            let view = compute_month(&EventStore::default(), displayed, None);

            let expected_days = displayed.days_in_month();
            assert!((28..=31).contains(&expected_days), "{year}-{month}");
            assert_eq!(view.cells.len() as u32, expected_days, "{year}-{month}");
            let days = view.cells.iter().map(|cell| cell.day).collect::<Vec<_>>();
            assert_eq!(days, (1..=expected_days).collect::<Vec<_>>());
            assert_eq!(view.leading_blanks, displayed.first_weekday_offset());
            assert!(view.leading_blanks < 7);
        }
    }
}

#[test]
fn cells_carry_canonical_keys() {
    let displayed = YearMonth::new(2026, 10).unwrap();
    let view = compute_month(&EventStore::default(), displayed, None);
    assert_eq!(view.cells[0].date_key.to_string(), "10-1");
    assert_eq!(view.cells[16].date_key.to_string(), "10-17");
    assert_eq!(view.label, "Octubre");
    assert_eq!(view.leading_blanks, 4);
}

#[test]
fn leap_day_is_generated_only_in_leap_years() {
    let store =
        EventStore::from_entries([("2-29", vec![Efemeride::new("Mundial", "Bisiesto", "")])]);

    let leap = compute_month(&store, YearMonth::new(2024, 2).unwrap(), None);
    assert_eq!(leap.cells.len(), 29);
    assert!(leap.cells[28].has_matching_event);

    let common = compute_month(&store, YearMonth::new(2025, 2).unwrap(), None);
    assert_eq!(common.cells.len(), 28);
    assert!(common.cells.iter().all(|cell| !cell.has_matching_event));
}

#[test]
fn inert_keys_never_match_any_cell() {
    let store = EventStore::from_json(
        r#"{"2-30": [{"tipo": "A"}], "02-01": [{"tipo": "A"}], "feb-1": [{"tipo": "A"}]}"#,
    )
    .expect("valid shape");
    for year in [2024, 2025] {
        let view = compute_month(&store, YearMonth::new(year, 2).unwrap(), None);
        assert!(view.cells.iter().all(|cell| !cell.has_matching_event));
    }
}

#[test]
fn unfiltered_new_year_is_marked_with_single_detail() {
    let store = new_year_store();
    let view = compute_month(&store, YearMonth::new(2026, 1).unwrap(), None);
    assert!(view.cells[0].has_matching_event);
    assert!(view.cells[1..].iter().all(|cell| !cell.has_matching_event));

    let detail = compute_detail(&store, DateKey::new(1, 1).unwrap(), None);
    assert_eq!(detail, vec![Efemeride::new("Mundial", "Año Nuevo", "...")]);
}

#[test]
fn absent_category_filter_unmarks_day_and_empties_detail() {
    let store = new_year_store();
    let view = compute_month(&store, YearMonth::new(2026, 1).unwrap(), Some("Historia"));
    assert_eq!(view.cells.len(), 31);
    assert!(view.cells.iter().all(|cell| !cell.has_matching_event));

    let detail = compute_detail(&store, DateKey::new(1, 1).unwrap(), Some("Historia"));
    assert!(detail.is_empty());
}

#[test]
fn filtered_detail_keeps_storage_order() {
    let store = EventStore::from_entries([(
        "5-1",
        vec![
            Efemeride::new("Historia", "primero", ""),
            Efemeride::new("Mundial", "intermedio", ""),
            Efemeride::new("Historia", "segundo", ""),
        ],
    )]);
    let titles = compute_detail(&store, DateKey::new(5, 1).unwrap(), Some("Historia"))
        .iter()
        .map(|item| item.title_text().to_string())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["primero", "segundo"]);
}
