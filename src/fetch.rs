//! Suggestion fetching
//!
//! HTTP requests run on a background worker so the UI loop never waits on the
//! network. Requests and responses carry the binding index and the request id
//! issued by that binding's state.

mod client;
mod worker;

pub use client::{SuggestClient, SuggestError, parse_suggestions};
pub use worker::spawn_worker;

/// Request messages sent to the suggestion worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestRequest {
    /// Fetch suggestions, superseding any in-flight request for `binding`
    Fetch {
        binding: usize,
        request_id: u64,
        url: String,
    },
    /// Abort whatever is in flight for `binding`
    Cancel { binding: usize },
}

/// Response messages received from the suggestion worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestResponse {
    Suggestions {
        binding: usize,
        request_id: u64,
        items: Vec<String>,
    },
    Failed {
        binding: usize,
        request_id: u64,
        error: String,
    },
    Cancelled {
        binding: usize,
        request_id: u64,
    },
}

impl SuggestResponse {
    pub fn binding(&self) -> usize {
        match self {
            SuggestResponse::Suggestions { binding, .. }
            | SuggestResponse::Failed { binding, .. }
            | SuggestResponse::Cancelled { binding, .. } => *binding,
        }
    }
}
