//! Draining of API worker responses
//!
//! Called once per event-loop iteration. Responses are matched against the
//! pending request id for their kind; anything tagged with a superseded id
//! is discarded so a late response can never clobber a newer search or
//! selection.

use std::sync::mpsc::TryRecvError;

use crate::api::ApiResponse;

use super::state::App;

impl App {
    /// Drain all queued worker responses without blocking
    pub fn drain_responses(&mut self) {
        loop {
            let response = match &self.response_rx {
                Some(rx) => match rx.try_recv() {
                    Ok(response) => response,
                    Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return,
                },
                None => return,
            };
            self.apply_response(response);
        }
    }

    fn apply_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::SearchResults { results, request_id } => {
                if self.pending_search_id != Some(request_id) {
                    log::debug!("discarding stale search response {}", request_id);
                    return;
                }
                self.pending_search_id = None;
                self.search_results = results;
                self.result_cursor = 0;
            }
            ApiResponse::Details { details, request_id } => {
                if self.pending_details_id != Some(request_id) {
                    log::debug!("discarding stale details response {}", request_id);
                    return;
                }
                self.pending_details_id = None;
                self.details = Some(*details);
            }
            ApiResponse::Error { message, request_id } => {
                // The failure notice is generic; prior state stays as-is
                if self.pending_search_id == Some(request_id) {
                    self.pending_search_id = None;
                } else if self.pending_details_id == Some(request_id) {
                    self.pending_details_id = None;
                } else {
                    log::debug!("discarding stale error response {}", request_id);
                    return;
                }
                self.notification.show(message);
            }
        }
    }
}
