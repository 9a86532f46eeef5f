//! Search endpoint plumbing.
//!
//! - [`query`]: building query endpoint strings and extracting terms from them
//! - [`response`]: decoding completed requests into search results
//!
//! Requests themselves are issued by the plugin shim through Zellij's
//! `web_request`; this module only deals with the strings and bytes on either
//! side of that call.

pub mod query;
pub mod response;

pub use query::{build_query, extract_term, DEFAULT_API_BASE};
pub use response::{decode_response, SearchResponse};
