//! Fetch orchestration: turning intents into requests and completions into actions.
//!
//! The orchestrator owns the [`QueryLog`]. Every search-triggering intent
//! appends one endpoint to it and yields exactly one [`FetchRequest`]. The
//! plugin shim issues the request; when Zellij reports the result,
//! [`FetchOrchestrator::complete`] converts it into a reducer action.
//!
//! # Overlapping requests
//!
//! Nothing is cancelled. If a second request is issued before the first
//! resolves, both completions are dispatched in the order they arrive. The
//! reducer's merge rule then decides what is visible, so a slow page-0 response
//! can overwrite a newer one. Request ids are carried through for logging and
//! are deliberately not used to discard stale completions.

use crate::api::{build_query, decode_response, extract_term};
use crate::app::history::QueryLog;
use crate::app::reducer::StoriesAction;
use serde::{Deserialize, Serialize};

/// One outbound GET to the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    /// Monotonic id, unique within the session.
    pub request_id: u64,
    /// Full query endpoint to GET.
    pub url: String,
    /// Page number encoded in `url`.
    pub page: u32,
}

/// Issues search requests and records them in the query log.
#[derive(Debug, Clone)]
pub struct FetchOrchestrator {
    api_base: String,
    query_log: QueryLog,
    next_request_id: u64,
}

impl FetchOrchestrator {
    /// Creates an orchestrator whose log is seeded with page 0 of `initial_term`.
    ///
    /// # Parameters
    ///
    /// * `api_base` - Search API base URL without a trailing slash
    /// * `initial_term` - Term loaded from storage (or the configured default)
    ///
    /// # Example
    ///
    /// ```
    /// use hackerstories::app::FetchOrchestrator;
    ///
    /// let orchestrator = FetchOrchestrator::new("http://hn.test", "rust");
    /// assert_eq!(orchestrator.query_log().last(), Some("http://hn.test/search?query=rust&page=0"));
    /// ```
    #[must_use]
    pub fn new(api_base: impl Into<String>, initial_term: &str) -> Self {
        let api_base = api_base.into();
        let query_log = QueryLog::seeded(build_query(&api_base, initial_term, 0));
        Self {
            api_base,
            query_log,
            next_request_id: 1,
        }
    }

    /// Requests the most recently logged endpoint without appending to the log.
    ///
    /// Called once when the session starts.
    pub fn start(&mut self) -> Option<FetchRequest> {
        let url = self.query_log.last()?.to_string();
        Some(self.issue(url, 0))
    }

    /// Logs the endpoint for `term` and `page` and requests it.
    ///
    /// # Parameters
    ///
    /// * `term` - Raw search term, inserted into the URL unencoded
    /// * `page` - Zero-based result page
    ///
    /// # Returns
    ///
    /// The request to issue. Its `request_id` is one greater than the
    /// previous request's.
    pub fn search(&mut self, term: &str, page: u32) -> FetchRequest {
        let url = build_query(&self.api_base, term, page);
        self.query_log.push(url.clone());
        self.issue(url, page)
    }

    /// Requests the page after `current_page` for the most recently logged term.
    ///
    /// The term comes from the log, not from whatever is currently typed in the
    /// search bar.
    pub fn load_more(&mut self, current_page: u32) -> FetchRequest {
        let term = self.query_log.last().map(extract_term).unwrap_or_default();
        self.search(&term, current_page.saturating_add(1))
    }

    /// Converts a completed request into the action to dispatch.
    ///
    /// # Parameters
    ///
    /// * `request_id` - Id of the finished request, used for logging only
    /// * `status` - HTTP status reported by Zellij
    /// * `body` - Raw response body
    ///
    /// # Returns
    ///
    /// `FetchSucceeded` for a 2xx status with a decodable body, otherwise
    /// `FetchFailed`. A completion for an older request is converted like
    /// any other.
    #[must_use]
    pub fn complete(&self, request_id: u64, status: u16, body: &[u8]) -> StoriesAction {
        match decode_response(status, body) {
            Ok(response) => {
                tracing::debug!(
                    request_id,
                    page = response.page,
                    hit_count = response.hits.len(),
                    "fetch succeeded"
                );
                StoriesAction::FetchSucceeded {
                    items: response.hits,
                    page: response.page,
                }
            }
            Err(e) => {
                tracing::warn!(request_id, status, error = %e, "fetch failed");
                StoriesAction::FetchFailed
            }
        }
    }

    /// The append-only log of issued endpoints.
    #[must_use]
    pub const fn query_log(&self) -> &QueryLog {
        &self.query_log
    }

    /// Recent search terms with adjacent duplicates collapsed.
    #[must_use]
    pub fn recent_terms(&self) -> Vec<String> {
        self.query_log.recent_terms()
    }

    fn issue(&mut self, url: String, page: u32) -> FetchRequest {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        tracing::debug!(request_id, url = %url, page, "issuing fetch");
        FetchRequest {
            request_id,
            url,
            page,
        }
    }
}
