//! Suggestion worker thread
//!
//! Owns a current-thread tokio runtime and runs one task per in-flight
//! request. A new request for a binding cancels that binding's previous one.

use std::collections::HashMap;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::client::{SuggestClient, SuggestError};
use super::{SuggestRequest, SuggestResponse};
use crate::config::ServerConfig;

/// Spawn the suggestion worker thread
///
/// The thread exits once every request sender has been dropped.
pub fn spawn_worker(
    config: &ServerConfig,
    request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) -> JoinHandle<()> {
    let client = SuggestClient::new(config.timeout_ms.map(Duration::from_millis));

    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx);
    })
}

fn worker_loop(
    client: Result<SuggestClient, SuggestError>,
    request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to start suggestion runtime: {}", e);
            return;
        }
    };

    runtime.block_on(process_requests(client, request_rx, response_tx));
    log::debug!("Suggestion worker shutting down");
}

async fn process_requests(
    client: Result<SuggestClient, SuggestError>,
    mut request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    // Latest in-flight request per binding
    let mut in_flight: HashMap<usize, (u64, CancellationToken)> = HashMap::new();

    while let Some(request) = request_rx.recv().await {
        match request {
            SuggestRequest::Fetch {
                binding,
                request_id,
                url,
            } => {
                let client = match &client {
                    Ok(c) => c.clone(),
                    Err(e) => {
                        let _ = response_tx.send(SuggestResponse::Failed {
                            binding,
                            request_id,
                            error: e.to_string(),
                        });
                        continue;
                    }
                };

                let cancel_token = CancellationToken::new();
                if let Some((previous_id, previous_token)) =
                    in_flight.insert(binding, (request_id, cancel_token.clone()))
                {
                    previous_token.cancel();
                    log::debug!(
                        "Request {} supersedes {} for binding {}",
                        request_id,
                        previous_id,
                        binding
                    );
                }

                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    let response = match client.fetch(&url, &cancel_token).await {
                        Ok(items) => SuggestResponse::Suggestions {
                            binding,
                            request_id,
                            items,
                        },
                        Err(SuggestError::Cancelled) => SuggestResponse::Cancelled {
                            binding,
                            request_id,
                        },
                        Err(e) => SuggestResponse::Failed {
                            binding,
                            request_id,
                            error: e.to_string(),
                        },
                    };
                    // Receiver gone means the UI has exited
                    let _ = response_tx.send(response);
                });
            }
            SuggestRequest::Cancel { binding } => {
                if let Some((request_id, token)) = in_flight.remove(&binding) {
                    token.cancel();
                    log::debug!("Cancelled request {} for binding {}", request_id, binding);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
