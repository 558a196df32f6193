//! Autocomplete popup rendering
//!
//! Draws a binding's suggestion list directly beneath its input.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use unicode_width::UnicodeWidthStr;

use super::binding::Binding;
use crate::layout::PopupRegion;
use crate::widgets::popup;

// Autocomplete popup display constants
pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MIN_POPUP_WIDTH: usize = 12;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;
const ACTIVE_MARKER: &str = "► ";
const INACTIVE_MARKER: &str = "  ";

/// Render the popup for `binding` below `input_area`
///
/// Returns the drawn region for mouse hit-testing, or `None` when hidden or
/// there is no room.
pub fn render_popup(
    binding: &Binding,
    binding_index: usize,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<PopupRegion> {
    let state = &binding.state;
    let suggestions = state.suggestions();
    if !state.is_visible() || suggestions.is_empty() {
        return None;
    }

    let visible_count = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS);
    let popup_height = (visible_count as u16) + POPUP_BORDER_HEIGHT;

    let text_width = suggestions
        .iter()
        .map(|s| s.width() + ACTIVE_MARKER.width())
        .max()
        .unwrap_or(0)
        .max(MIN_POPUP_WIDTH);
    let popup_width = (text_width.min(u16::MAX as usize) as u16).saturating_add(POPUP_PADDING);

    let popup_area = popup::popup_near_anchor(
        input_area,
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
        frame.area(),
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT || popup_area.width <= 2 {
        return None;
    }

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let line = if state.is_active(i) {
                Line::from(Span::styled(
                    format!("{}{}", ACTIVE_MARKER, suggestion),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("{}{}", INACTIVE_MARKER, suggestion),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    let mut list_state = ListState::default().with_selected(state.selected_index());
    frame.render_stateful_widget(list, popup_area, &mut list_state);

    let inner_height = (popup_area.height - POPUP_BORDER_HEIGHT) as usize;
    let offset = list_state.offset();
    Some(PopupRegion {
        binding: binding_index,
        area: popup_area,
        offset,
        row_count: suggestions.len().saturating_sub(offset).min(inner_height),
    })
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
