//! API worker thread
//!
//! Runs HTTP requests in a background thread so the UI loop never blocks.
//! Requests arrive over a channel tagged with a request id; responses carry
//! the same id back so the app can discard results for a superseded search
//! or selection.

use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use super::client::ApiClient;
use super::types::{Drug, DrugDetails};

/// Request messages sent to the API worker thread
#[derive(Debug)]
pub enum ApiRequest {
    /// Search the remote API for drugs matching a query
    Search {
        query: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Fetch sentiment, recommendations and side effects for a drug
    Details {
        drug_name: String,
        request_id: u64,
    },
}

/// Response messages received from the API worker thread
#[derive(Debug)]
pub enum ApiResponse {
    SearchResults {
        results: Vec<Drug>,
        request_id: u64,
    },
    Details {
        details: Box<DrugDetails>,
        request_id: u64,
    },
    /// Generic failure; the UI shows one notification, no per-endpoint detail
    Error {
        message: String,
        request_id: u64,
    },
}

impl ApiResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            ApiResponse::SearchResults { request_id, .. }
            | ApiResponse::Details { request_id, .. }
            | ApiResponse::Error { request_id, .. } => *request_id,
        }
    }
}

/// Spawn the API worker thread
///
/// Creates a background thread that owns a current-thread tokio runtime and
/// processes requests until the request channel is closed.
pub fn spawn_worker(
    base_url: &str,
    timeout: Duration,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    let client = ApiClient::new(base_url, timeout);

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::debug!("failed to build worker runtime: {}", e);
                return;
            }
        };

        worker_loop(&runtime, &client, request_rx, &response_tx);
        log::debug!("API worker thread shutting down");
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    runtime: &tokio::runtime::Runtime,
    client: &ApiClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: &Sender<ApiResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let response = match request {
            ApiRequest::Search { query, request_id } => {
                match runtime.block_on(client.search(&query)) {
                    Ok(body) => ApiResponse::SearchResults {
                        results: body.results,
                        request_id,
                    },
                    Err(e) => {
                        log::debug!("search request {} failed: {}", request_id, e);
                        ApiResponse::Error {
                            message: "Search failed. Check your connection and try again."
                                .to_string(),
                            request_id,
                        }
                    }
                }
            }
            ApiRequest::Details {
                drug_name,
                request_id,
            } => match runtime.block_on(client.fetch_details(&drug_name)) {
                Ok(details) => ApiResponse::Details {
                    details: Box::new(details),
                    request_id,
                },
                Err(e) => {
                    log::debug!("details request {} failed: {}", request_id, e);
                    ApiResponse::Error {
                        message: "Failed to fetch drug details.".to_string(),
                        request_id,
                    }
                }
            },
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected, stop processing
            return;
        }
    }
}
