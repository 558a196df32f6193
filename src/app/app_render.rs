use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::autocomplete::render_popup;

const FIELD_HEIGHT: u16 = 3;
const KEY_HINTS: &str = "Tab: next field  ↑/↓: suggestions  Enter: select/submit  Esc: close/quit";

impl App {
    /// Render the form; popups are drawn last so they overlay other fields
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(self.fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));
        let chunks = Layout::vertical(constraints).split(frame.area());

        self.render_title(frame, chunks[0]);

        for (index, field) in self.fields.iter().enumerate() {
            let field_area = chunks[index + 1];
            frame.render_widget(&field.textarea, field_area);
            self.layout_regions.set_input(index, field_area);
        }

        self.render_status(frame, chunks[chunks.len() - 1]);

        for (index, binding) in self.bindings.iter().enumerate() {
            if !binding.state.is_visible() {
                continue;
            }
            let Some(anchor) = self.layout_regions.input_area(binding.input_index()) else {
                continue;
            };
            if let Some(popup) = render_popup(binding, index, frame, anchor) {
                self.layout_regions.set_popup(popup);
            }
        }
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(
                " showfinder ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", self.base_url),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status {
            Some(message) => Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
