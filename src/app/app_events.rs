//! Keyboard and terminal event routing

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use tui_textarea::{Input, Key};

use super::app_state::App;
use super::mouse_click;
use crate::autocomplete::KeyOutcome;
use crate::fetch::SuggestRequest;

impl App {
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                return;
            }
            KeyCode::BackTab => {
                self.focus_previous();
                return;
            }
            _ => {}
        }

        let field = self.focus;
        if field >= self.fields.len() {
            return;
        }

        // The focused autocomplete gets first refusal
        if let Some(binding) = self.binding_for_field(field) {
            let was_visible = self.bindings[binding].state.is_visible();
            let outcome = self.bindings[binding].handle_key(key, &mut self.fields[field].textarea);
            self.sync_dismiss(binding);
            if was_visible && !self.bindings[binding].state.is_visible() {
                self.send_request(SuggestRequest::Cancel { binding });
            }
            if outcome == KeyOutcome::Consumed {
                return;
            }
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.handle_escape(field),
            _ => {
                let input = Input::from(key);
                if inserts_newline(&input) {
                    return;
                }
                if self.fields[field].textarea.input(input) {
                    self.on_input_changed(field);
                }
            }
        }
    }

    /// Esc closes the focused popup first, then quits
    fn handle_escape(&mut self, field: usize) {
        if let Some(binding) = self.binding_for_field(field)
            && self.bindings[binding].state.is_visible()
        {
            self.close_suggestions(binding);
            return;
        }
        self.should_quit = true;
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        mouse_click::handle_mouse(self, mouse);
    }
}

/// Keys tui-textarea turns into a line break; every field is single-line
fn inserts_newline(input: &Input) -> bool {
    matches!(
        input,
        Input { key: Key::Enter, .. }
            | Input {
                key: Key::Char('m'),
                ctrl: true,
                ..
            }
            | Input {
                key: Key::Char('\n' | '\r'),
                ..
            }
    )
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
