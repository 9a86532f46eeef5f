//! Decoding of search endpoint responses.

use crate::domain::error::{HackerStoriesError, Result};
use crate::domain::Story;
use serde::{Deserialize, Serialize};

/// The subset of a search response the plugin relies on.
///
/// Any extra fields the index sends (`nbHits`, `hitsPerPage`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Stories on this page, in ranking order.
    pub hits: Vec<Story>,
    /// Zero-based page number this response represents.
    pub page: u32,
}

/// Decodes a completed request into a [`SearchResponse`].
///
/// Any status outside `200..300` is a failure, whatever the body says. A
/// success status with a body that is not a search document is a decode failure.
///
/// # Errors
///
/// Returns [`HackerStoriesError::Http`] for a non-success status and
/// [`HackerStoriesError::Decode`] for an unparseable body.
pub fn decode_response(status: u16, body: &[u8]) -> Result<SearchResponse> {
    if !(200..300).contains(&status) {
        return Err(HackerStoriesError::Http { status });
    }

    serde_json::from_slice(body).map_err(|e| HackerStoriesError::Decode(e.to_string()))
}
