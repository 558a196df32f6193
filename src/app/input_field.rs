use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::config::FieldConfig;

/// A single-line text input on the form
pub struct InputField {
    pub id: String,
    pub label: String,
    /// Suggestion container attached to this input, if the page has one
    pub container_id: Option<String>,
    pub textarea: TextArea<'static>,
}

impl InputField {
    pub fn new(config: &FieldConfig) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());

        let mut field = Self {
            id: config.id.clone(),
            label: config.display_label().to_string(),
            container_id: config.container.clone().filter(|c| !c.trim().is_empty()),
            textarea,
        };
        field.set_focused(false);
        field
    }

    pub fn value(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Update border color and cursor visibility
    pub fn set_focused(&mut self, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.label))
                .border_style(Style::default().fg(border_color)),
        );

        let cursor_style = if focused {
            Style::default().add_modifier(ratatui::style::Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor_style);
    }
}

impl std::fmt::Debug for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputField")
            .field("id", &self.id)
            .field("value", &self.value())
            .field("container_id", &self.container_id)
            .finish()
    }
}
