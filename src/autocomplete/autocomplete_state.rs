//! Autocomplete state for a single binding
//!
//! Holds the rendered suggestion list, the focus cursor and the request
//! sequence used to discard stale responses.

#[derive(Debug, Clone, Default)]
pub struct AutocompleteState {
    suggestions: Vec<String>,
    /// Focus cursor; always `None` or a valid index into `suggestions`
    selected_index: Option<usize>,
    visible: bool,
    /// Id of the most recently issued request; only its response may render
    latest_request_id: u64,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rendered list and reset the cursor
    pub fn update_suggestions(&mut self, suggestions: Vec<String>) {
        self.visible = !suggestions.is_empty();
        self.suggestions = suggestions;
        self.selected_index = None;
    }

    pub fn hide(&mut self) {
        self.suggestions.clear();
        self.selected_index = None;
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Cursor as a signed index, `-1` when nothing is selected
    pub fn focus_cursor(&self) -> isize {
        self.selected_index.map_or(-1, |i| i as isize)
    }

    pub fn selected_suggestion(&self) -> Option<&str> {
        self.selected_index
            .and_then(|i| self.suggestions.get(i))
            .map(String::as_str)
    }

    /// Whether row `index` carries the active marker
    pub fn is_active(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }

    /// Move the cursor down, wrapping to the first row
    pub fn select_next(&mut self) {
        let count = self.suggestions.len();
        if count == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(current) => (current + 1) % count,
            None => 0,
        });
    }

    /// Move the cursor up, wrapping to the last row
    pub fn select_previous(&mut self) {
        let count = self.suggestions.len();
        if count == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(current) => (current + count - 1) % count,
            None => count - 1,
        });
    }

    /// Issue a new request id, superseding every earlier request
    pub fn next_request_id(&mut self) -> u64 {
        self.latest_request_id += 1;
        self.latest_request_id
    }

    /// Make any in-flight response stale without issuing a request
    pub fn invalidate_requests(&mut self) {
        self.latest_request_id += 1;
    }

    pub fn latest_request_id(&self) -> u64 {
        self.latest_request_id
    }

    pub fn is_current_request(&self, request_id: u64) -> bool {
        request_id == self.latest_request_id
    }

    /// Render a response if it belongs to the latest request
    ///
    /// Returns false (and leaves the list untouched) for stale responses.
    pub fn apply_response(&mut self, request_id: u64, suggestions: Vec<String>) -> bool {
        if !self.is_current_request(request_id) {
            log::debug!(
                "Discarding stale suggestions for request {} (latest: {})",
                request_id,
                self.latest_request_id
            );
            return false;
        }
        self.update_suggestions(suggestions);
        true
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
