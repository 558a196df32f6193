//! Autocomplete bindings
//!
//! A binding ties one form input to its suggestion container and backend
//! endpoint. It reacts to three things: the input value changing, key presses
//! on the input, and clicks elsewhere on the page.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use tui_textarea::TextArea;

use super::autocomplete_state::AutocompleteState;
use super::request::{build_suggest_url, prepare_query};
use crate::config::BindingConfig;
use crate::fetch::SuggestResponse;

/// Read access to the current value of form fields by id
pub trait FieldValues {
    fn field_value(&self, id: &str) -> Option<String>;
}

/// Something that can look up the elements a binding refers to
pub trait ElementLookup {
    /// Index of the input with this id
    fn input_index(&self, id: &str) -> Option<usize>;
    /// Whether a suggestion container with this id exists
    fn has_container(&self, id: &str) -> bool;
}

/// Produces the optional `context` value sent with each query
pub trait ContextProvider {
    fn context(&self, fields: &dyn FieldValues) -> String;
}

impl<F> ContextProvider for F
where
    F: Fn(&dyn FieldValues) -> String,
{
    fn context(&self, fields: &dyn FieldValues) -> String {
        self(fields)
    }
}

/// Uses the trimmed value of another field as context
#[derive(Debug, Clone)]
pub struct SiblingField {
    field_id: String,
}

impl SiblingField {
    pub fn new(field_id: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
        }
    }
}

impl ContextProvider for SiblingField {
    fn context(&self, fields: &dyn FieldValues) -> String {
        fields
            .field_value(&self.field_id)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }
}

/// Whether a key press was handled by the widget
///
/// `Ignored` lets the host perform the key's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Consumed,
    Ignored,
}

/// What the host must do after the input value changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Send this request to the suggestion worker
    Fetch { request_id: u64, url: String },
    /// Query too short; abandon anything in flight
    Cancel,
}

pub struct Binding {
    config: BindingConfig,
    input_index: usize,
    context_provider: Option<Box<dyn ContextProvider>>,
    pub state: AutocompleteState,
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("config", &self.config)
            .field("input_index", &self.input_index)
            .field("has_context", &self.context_provider.is_some())
            .field("state", &self.state)
            .finish()
    }
}

/// Bind an input to its suggestion container
///
/// Returns `None` when either element is missing; such a binding does nothing.
pub fn bind(
    config: BindingConfig,
    elements: &dyn ElementLookup,
    context_provider: Option<Box<dyn ContextProvider>>,
) -> Option<Binding> {
    let Some(input_index) = elements.input_index(&config.input_id) else {
        log::debug!("Not binding '{}': no such input", config.input_id);
        return None;
    };
    if !elements.has_container(&config.suggestion_container_id) {
        log::debug!(
            "Not binding '{}': no container '{}'",
            config.input_id,
            config.suggestion_container_id
        );
        return None;
    }

    Some(Binding {
        config,
        input_index,
        context_provider,
        state: AutocompleteState::new(),
    })
}

impl Binding {
    pub fn input_index(&self) -> usize {
        self.input_index
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// React to a new input value
    pub fn on_input_changed(
        &mut self,
        value: &str,
        fields: &dyn FieldValues,
        base_url: &str,
    ) -> Dispatch {
        let Some(query) = prepare_query(value) else {
            self.close();
            return Dispatch::Cancel;
        };

        let context = self
            .context_provider
            .as_ref()
            .map(|provider| provider.context(fields));
        let url = build_suggest_url(base_url, &self.config.endpoint, query, context.as_deref());
        let request_id = self.state.next_request_id();

        log::debug!("Dispatching request {} for '{}': {}", request_id, self.config.input_id, url);
        Dispatch::Fetch { request_id, url }
    }

    /// Handle a key press on the bound input
    pub fn handle_key(&mut self, key: KeyEvent, input: &mut TextArea<'static>) -> KeyOutcome {
        if self.state.suggestions().is_empty() {
            return KeyOutcome::Ignored;
        }

        match key.code {
            KeyCode::Down => {
                self.state.select_next();
                KeyOutcome::Consumed
            }
            KeyCode::Up => {
                self.state.select_previous();
                KeyOutcome::Consumed
            }
            KeyCode::Enter => match self.state.selected_suggestion() {
                Some(text) => {
                    let text = text.to_string();
                    set_input_value(input, &text);
                    self.close();
                    KeyOutcome::Consumed
                }
                None => KeyOutcome::Ignored,
            },
            _ => KeyOutcome::Ignored,
        }
    }

    /// Mouse press on a suggestion row
    pub fn press_row(&mut self, row: usize, input: &mut TextArea<'static>) -> bool {
        let Some(text) = self.state.suggestions().get(row).cloned() else {
            return false;
        };
        set_input_value(input, &text);
        self.close();
        true
    }

    /// Outside-click dismissal
    pub fn dismiss(&mut self) {
        self.close();
    }

    /// Clear the list so that nothing already in flight can reopen it
    fn close(&mut self) {
        self.state.hide();
        self.state.invalidate_requests();
    }

    /// Apply a worker response addressed to this binding
    pub fn apply_response(&mut self, response: SuggestResponse) {
        match response {
            SuggestResponse::Suggestions {
                request_id, items, ..
            } => {
                self.state.apply_response(request_id, items);
            }
            SuggestResponse::Failed {
                request_id, error, ..
            } => {
                log::warn!(
                    "Autocomplete fetch error for '{}' (request {}): {}",
                    self.config.input_id,
                    request_id,
                    error
                );
            }
            SuggestResponse::Cancelled { request_id, .. } => {
                log::debug!("Request {} for '{}' cancelled", request_id, self.config.input_id);
            }
        }
    }
}

/// Replace the single-line content of an input
pub fn set_input_value(input: &mut TextArea<'static>, text: &str) {
    input.delete_line_by_head();
    input.delete_line_by_end();
    input.insert_str(text);
}

#[cfg(test)]
#[path = "binding_tests.rs"]
mod binding_tests;
