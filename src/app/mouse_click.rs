//! Mouse click handling
//!
//! A press on a suggestion row selects it. Every press is then dispatched to
//! the page-level dismiss registry, which closes all popups except the one
//! belonging to the clicked input.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::layout::{Region, region_at};

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let region = region_at(&app.layout_regions, mouse.column, mouse.row);
        handle_click(app, region);
    }
}

/// Handle left mouse button press for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    if let Some(Region::SuggestionRow { binding, row }) = region {
        press_suggestion_row(app, binding, row);
    }

    let target = match region {
        Some(Region::Input(field)) => {
            app.focus_field(field);
            app.binding_for_field(field)
        }
        _ => None,
    };

    for binding in app.dismiss.dispatch_click(target) {
        app.close_suggestions(binding);
    }
}

fn press_suggestion_row(app: &mut App, binding: usize, row: usize) {
    let Some(field) = app.bindings.get(binding).map(|b| b.input_index()) else {
        return;
    };
    if app.bindings[binding].press_row(row, &mut app.fields[field].textarea) {
        app.close_suggestions(binding);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
