//! Async HTTP client for the suggestion endpoint

use std::time::Duration;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors that can occur while fetching suggestions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SuggestError {
    /// Connection, DNS, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("Server returned HTTP {0}")]
    Status(u16),

    /// Body was not a JSON array of strings
    #[error("Parse error: {0}")]
    Parse(String),

    /// Superseded by a newer request
    #[error("Request cancelled")]
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct SuggestClient {
    http: reqwest::Client,
}

impl SuggestClient {
    /// Create a client; `timeout` of `None` means requests never time out
    pub fn new(timeout: Option<Duration>) -> Result<Self, SuggestError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SuggestError::Network(e.to_string()))?;
        Ok(Self { http })
    }

    pub fn from_http(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// GET `url` and parse the suggestion list
    ///
    /// Returns `SuggestError::Cancelled` as soon as `cancel_token` fires,
    /// dropping the in-flight request.
    pub async fn fetch(
        &self,
        url: &str,
        cancel_token: &CancellationToken,
    ) -> Result<Vec<String>, SuggestError> {
        if cancel_token.is_cancelled() {
            return Err(SuggestError::Cancelled);
        }

        let response = tokio::select! {
            biased;
            _ = cancel_token.cancelled() => return Err(SuggestError::Cancelled),
            result = self.http.get(url).send() => {
                result.map_err(|e| SuggestError::Network(e.to_string()))?
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status(status.as_u16()));
        }

        let body = tokio::select! {
            biased;
            _ = cancel_token.cancelled() => return Err(SuggestError::Cancelled),
            result = response.text() => {
                result.map_err(|e| SuggestError::Network(e.to_string()))?
            }
        };

        parse_suggestions(&body)
    }
}

/// Parse a response body as a JSON array of strings, keeping server order
pub fn parse_suggestions(body: &str) -> Result<Vec<String>, SuggestError> {
    serde_json::from_str::<Vec<String>>(body).map_err(|e| SuggestError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
