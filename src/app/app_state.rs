use std::sync::mpsc::Receiver;

use tokio::sync::mpsc::UnboundedSender;

use super::input_field::InputField;
use crate::autocomplete::{
    Binding, ContextProvider, Dispatch, DismissRegistry, ElementLookup, FieldValues,
    SiblingField, bind,
};
use crate::config::Config;
use crate::fetch::{SuggestRequest, SuggestResponse};
use crate::layout::LayoutRegions;

/// How the app ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the field values (Enter without a highlighted suggestion)
    Submit,
}

/// Application state
pub struct App {
    pub fields: Vec<InputField>,
    pub bindings: Vec<Binding>,
    pub focus: usize,
    pub dismiss: DismissRegistry,
    pub layout_regions: LayoutRegions,
    pub base_url: String,
    pub status: Option<String>,
    pub should_quit: bool,
    pub output_mode: Option<OutputMode>,
    request_tx: Option<UnboundedSender<SuggestRequest>>,
    response_rx: Option<Receiver<SuggestResponse>>,
}

impl ElementLookup for Vec<InputField> {
    fn input_index(&self, id: &str) -> Option<usize> {
        self.iter().position(|field| field.id == id)
    }

    fn has_container(&self, id: &str) -> bool {
        self.iter()
            .any(|field| field.container_id.as_deref() == Some(id))
    }
}

impl FieldValues for Vec<InputField> {
    fn field_value(&self, id: &str) -> Option<String> {
        self.iter()
            .find(|field| field.id == id)
            .map(|field| field.value().to_string())
    }
}

impl App {
    /// Build the form and bind every configured autocomplete
    pub fn new(config: &Config) -> Self {
        let mut fields: Vec<InputField> = config.fields.iter().map(InputField::new).collect();

        let bindings: Vec<Binding> = config
            .bindings
            .iter()
            .filter_map(|binding_config| {
                let context_provider = binding_config.context_from.as_ref().map(|id| {
                    Box::new(SiblingField::new(id.clone())) as Box<dyn ContextProvider>
                });
                bind(binding_config.clone(), &fields, context_provider)
            })
            .collect();

        if let Some(first) = fields.first_mut() {
            first.set_focused(true);
        }

        Self {
            fields,
            bindings,
            focus: 0,
            dismiss: DismissRegistry::new(),
            layout_regions: LayoutRegions::new(),
            base_url: config.server.base_url.clone(),
            status: None,
            should_quit: false,
            output_mode: None,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Connect the app to the suggestion worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SuggestRequest>,
        response_rx: Receiver<SuggestResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn field_value(&self, id: &str) -> Option<String> {
        self.fields.field_value(id)
    }

    /// Index of the binding attached to a field
    pub fn binding_for_field(&self, field: usize) -> Option<usize> {
        self.bindings.iter().position(|b| b.input_index() == field)
    }

    pub fn focus_field(&mut self, index: usize) {
        if index >= self.fields.len() || index == self.focus {
            return;
        }
        if let Some(current) = self.fields.get_mut(self.focus) {
            current.set_focused(false);
        }
        self.focus = index;
        self.fields[index].set_focused(true);
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus_field((self.focus + 1) % self.fields.len());
        }
    }

    pub fn focus_previous(&mut self) {
        let count = self.fields.len();
        if count > 0 {
            self.focus_field((self.focus + count - 1) % count);
        }
    }

    /// Keep the dismiss registry in step with a binding's visibility
    pub(super) fn sync_dismiss(&mut self, binding: usize) {
        let visible = self.bindings[binding].state.is_visible();
        self.dismiss.set_open(binding, visible);
    }

    /// Dispatch a query for the field whose value just changed
    pub(super) fn on_input_changed(&mut self, field: usize) {
        let Some(binding) = self.binding_for_field(field) else {
            return;
        };

        let value = self.fields[field].value().to_string();
        let dispatch = self.bindings[binding].on_input_changed(&value, &self.fields, &self.base_url);
        self.sync_dismiss(binding);

        let request = match dispatch {
            Dispatch::Fetch { request_id, url } => SuggestRequest::Fetch {
                binding,
                request_id,
                url,
            },
            Dispatch::Cancel => SuggestRequest::Cancel { binding },
        };
        self.send_request(request);
    }

    /// Close a binding's list and abandon whatever it has in flight
    pub(super) fn close_suggestions(&mut self, binding: usize) {
        self.bindings[binding].dismiss();
        self.sync_dismiss(binding);
        self.send_request(SuggestRequest::Cancel { binding });
    }

    pub(super) fn send_request(&self, request: SuggestRequest) {
        if let Some(tx) = &self.request_tx
            && tx.send(request).is_err()
        {
            log::warn!("Suggestion worker is gone; request dropped");
        }
    }

    /// Apply every response the worker has produced so far
    pub fn poll_responses(&mut self) {
        let responses: Vec<SuggestResponse> = match &self.response_rx {
            Some(rx) => rx.try_iter().collect(),
            None => return,
        };

        for response in responses {
            let binding = response.binding();
            if binding >= self.bindings.len() {
                log::warn!("Response for unknown binding {}", binding);
                continue;
            }
            self.bindings[binding].apply_response(response);
            self.sync_dismiss(binding);
        }
    }

    pub fn submit(&mut self) {
        self.output_mode = Some(OutputMode::Submit);
        self.should_quit = true;
    }

    /// Field values keyed by field id
    pub fn form_json(&self) -> serde_json::Value {
        let values: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|field| (field.id.clone(), serde_json::Value::from(field.value())))
            .collect();
        serde_json::Value::Object(values)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
