//! Terminal smoke renderer.
//!
//! # Responsibility
//! - Verify `efemerides_core` linkage without the Flutter/FFI runtime.
//! - Render the current month grid and today's detail panel as plain text.

use chrono::Local;
use efemerides_core::{load_with_fallback, CalendarApp, DetailView, MonthView, SourceLocation};
use std::fmt::Write;

const WEEKDAY_HEADER: &str = " Do  Lu  Ma  Mi  Ju  Vi  Sá";

fn main() {
    println!("efemerides_core ping={}", efemerides_core::ping());
    println!("efemerides_core version={}", efemerides_core::core_version());

    let store = load_with_fallback(SourceLocation::from_env().into_source().as_ref());
    let mut app = CalendarApp::new(store, Local::now().date_naive());
    app.start();

    println!("tipos: {}", app.types().join(", "));
    println!();
    print!("{}", render_month(&app.month_view()));
    println!();
    match app.detail_view() {
        Some(detail) => print!("{}", render_detail(&detail)),
        None => println!("(ningún día seleccionado)"),
    }
}

// `[d]` marks the selected day, `*` a day with efemérides.
fn render_month(view: &MonthView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", view.label, view.year);
    let _ = writeln!(out, "{WEEKDAY_HEADER}");

    let mut column = view.leading_blanks;
    out.push_str(&"    ".repeat(column as usize));
    for cell in &view.cells {
        let text = if view.selected_day == Some(cell.day) {
            format!("[{:>2}]", cell.day)
        } else if cell.has_matching_event {
            format!(" {:>2}*", cell.day)
        } else {
            format!(" {:>2} ", cell.day)
        };
        out.push_str(&text);
        column += 1;
        if column % 7 == 0 {
            out.push('\n');
        }
    }
    if column % 7 != 0 {
        out.push('\n');
    }
    out
}

fn render_detail(view: &DetailView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", view.label);
    if let Some(empty) = &view.empty_state {
        let _ = writeln!(out, "{}", empty.headline);
        let _ = writeln!(out, "{}", empty.hint);
        return out;
    }
    for item in &view.events {
        let _ = writeln!(out, "[{}] {}", item.category_text(), item.title_text());
        let _ = writeln!(out, "    {}", item.description_text());
    }
    out
}
