//! Tests for form rendering

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::app::App;
use crate::layout::{Region, region_at};
use crate::test_utils::test_helpers::{left_click, strings, test_app, type_text};

const TEST_WIDTH: u16 = 70;
const TEST_HEIGHT: u16 = 24;

fn render_app(app: &mut App) -> String {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_renders_all_field_labels() {
    let mut app = test_app();
    let output = render_app(&mut app);

    for label in ["First title", "Second title", "Show", "Character"] {
        assert!(output.contains(label), "missing label {}", label);
    }
    assert!(output.contains("showfinder"));
    assert!(output.contains("Tab: next field"));
}

#[test]
fn test_records_input_regions() {
    let mut app = test_app();
    render_app(&mut app);

    assert_eq!(app.layout_regions.inputs.len(), 4);
    let area = app.layout_regions.input_area(2).unwrap();
    assert_eq!(region_at(&app.layout_regions, area.x + 2, area.y + 1), Some(Region::Input(2)));
}

#[test]
fn test_typed_value_is_rendered() {
    let mut app = test_app();
    type_text(&mut app, "Breaking Bad");
    let output = render_app(&mut app);
    assert!(output.contains("Breaking Bad"));
}

#[test]
fn test_open_popup_is_drawn_and_clickable() {
    let mut app = test_app();
    app.bindings[0]
        .state
        .update_suggestions(strings(&["Alpha", "Beta"]));
    app.sync_dismiss(0);

    let output = render_app(&mut app);

    assert!(output.contains("Suggestions"));
    assert!(output.contains("Alpha"));
    let popup = app.layout_regions.popups[0];
    assert_eq!(popup.binding, 0);

    // Second row of the popup sits one line below the first
    app.handle_mouse_event(left_click(popup.area.x + 3, popup.area.y + 2));
    assert_eq!(app.fields[0].value(), "Beta");
}

#[test]
fn test_hidden_popups_are_not_recorded() {
    let mut app = test_app();
    render_app(&mut app);
    assert!(app.layout_regions.popups.is_empty());
}

#[test]
fn test_status_message_replaces_hints() {
    let mut app = test_app();
    app.set_status("Invalid config file: bad. Using defaults.");

    let output = render_app(&mut app);

    assert!(output.contains("Using defaults"));
    assert!(!output.contains("Tab: next field"));
}
