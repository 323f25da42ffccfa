// Full-frame renders of the dashboard on a test backend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use salesdash::data::{SalesMetric, load_table};
use salesdash::ui::focus::Focus;
use salesdash::ui::state::InputMode;
use salesdash::ui::{AppState, draw, handle_key};

use crate::common::helpers::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn screen(state: &mut AppState) -> String {
    screen_sized(state, 140, 45)
}

fn screen_sized(state: &mut AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    draw(&mut terminal, state).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_dashboard_shows_every_panel() {
    let mut state = AppState::new(ab_table(), SalesMetric::Retail);
    let out = screen(&mut state);

    assert!(out.contains("Sales Segmentation Dashboard"));
    assert!(out.contains("Total SKUs"));
    assert!(out.contains("Avg Retail Sales"));
    assert!(out.contains("Cluster Sales Profile"));
    assert!(out.contains("Monthly Sales Trend (RETAIL SALES)"));
    assert!(out.contains("Cluster Interpretation"));
    assert!(out.contains("[x] C1 A"));
    assert!(out.contains("Rows: 5/5"));
}

#[test]
fn test_empty_selection_shows_placeholders() {
    let mut state = AppState::new(ab_table(), SalesMetric::Retail);
    state.clusters.clear();
    let out = screen(&mut state);

    assert!(out.contains("No data for the current filters"));
    assert!(out.contains("[ ] C1 A"));
    assert!(out.contains("Rows: 0/5"));
    assert!(out.contains("No clusters selected."));
}

#[test]
fn test_lookup_result_is_rendered() {
    let table = table_from_csv(
        "ITEM CODE,ITEM DESCRIPTION,ITEM TYPE,Clusters,MONTH,RETAIL SALES,WAREHOUSE SALES\n\
         100009,BOOTLEG RED - 750ML,WINE,High Performing Core Products,1,51.5,57.6\n",
    );
    let mut state = AppState::new(table, SalesMetric::Retail);

    state.item_code.set("100009");
    state.commit_lookup();
    assert!(screen(&mut state).contains("Item found"));

    state.item_code.set("999999");
    state.commit_lookup();
    assert!(screen(&mut state).contains("Item code not found."));
}

#[test]
fn test_help_modal_draws_over_dashboard() {
    let mut state = AppState::new(ab_table(), SalesMetric::Warehouse);
    handle_key(press(KeyCode::Char('h')), &mut state);

    let out = screen(&mut state);
    assert!(out.contains("Help - About"));
    assert!(out.contains("Records:    5"));
}

#[test]
fn test_notes_scroll_reaches_last_wrapped_line() {
    let table = load_table(&demo_csv_path()).unwrap();
    let mut state = AppState::new(table, SalesMetric::Retail);
    state.focus = Focus::Interpretation;

    // The first draw measures the panel
    let first = screen_sized(&mut state, 120, 40);
    assert!(!first.contains("Often used by specific"));

    handle_key(press(KeyCode::End), &mut state);
    let out = screen_sized(&mut state, 120, 40);
    assert!(out.contains("Often used by specific"));
    assert!(state.notes_max_scroll > 0);
    assert_eq!(state.notes_scroll, state.notes_max_scroll);
}

#[test]
fn test_notes_scroll_down_one_row_at_a_time_reaches_end() {
    let table = load_table(&demo_csv_path()).unwrap();
    let mut state = AppState::new(table, SalesMetric::Retail);
    state.focus = Focus::Interpretation;

    screen_sized(&mut state, 120, 40);
    for _ in 0..200 {
        handle_key(press(KeyCode::Down), &mut state);
        screen_sized(&mut state, 120, 40);
    }
    assert!(screen_sized(&mut state, 120, 40).contains("Often used by specific"));
}

#[test]
fn test_cluster_tags_keep_charts_readable() {
    let table = load_table(&demo_csv_path()).unwrap();
    let mut state = AppState::new(table, SalesMetric::Retail);
    let out = screen_sized(&mut state, 120, 40);

    // Sidebar and profile key both map tags to cluster names
    assert!(out.contains("[x] C1 Bulk"));
    assert!(out.contains("C3 Mixed Channel"));
    assert!(out.contains("C5 Warehouse Lean"));
    assert!(out.contains("C2 High Performing Core"));
    // Group labels are tags, not clipped names
    assert!(!out.contains("Low Volu "));
}

#[test]
fn test_long_item_code_keeps_cursor_in_view() {
    let mut state = AppState::new(ab_table(), SalesMetric::Retail);
    state.focus = Focus::ItemCodeInput;
    handle_key(press(KeyCode::Enter), &mut state);
    assert_eq!(state.input_mode, InputMode::Editing);

    let code = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789wxyz";
    for c in code.chars() {
        handle_key(press(KeyCode::Char(c)), &mut state);
    }

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    draw(&mut terminal, &mut state).unwrap();
    let out: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(out.contains("6789wxyz"));
    assert!(!out.contains("ABCDEF"));

    // Cursor sits just past the last character, on the box's last column
    let cursor = terminal.get_cursor_position().unwrap();
    assert_eq!(cursor.x, 34);
}
