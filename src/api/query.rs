//! Query endpoint construction for the search index.
//!
//! A query endpoint string encodes both the search term and the page number.
//! The term is inserted verbatim: no percent-encoding is applied. Terms that
//! contain `&`, `?` or whitespace therefore produce endpoints that may be
//! rejected by the server or that [`extract_term`] cannot round-trip.

/// Base URL of the public Hacker News search API.
pub const DEFAULT_API_BASE: &str = "https://hn.algolia.com/api/v1";

/// Path of the search resource below the API base.
pub const API_SEARCH: &str = "/search";

/// Query parameter prefix carrying the search term.
pub const PARAM_SEARCH: &str = "query=";

/// Query parameter prefix carrying the page number.
pub const PARAM_PAGE: &str = "page=";

/// Builds the query endpoint for `term` and `page`.
///
/// An empty term is legal and yields an empty `query=` parameter.
///
/// # Examples
///
/// ```
/// use hackerstories::api::{build_query, DEFAULT_API_BASE};
///
/// assert_eq!(
///     build_query(DEFAULT_API_BASE, "React", 2),
///     "https://hn.algolia.com/api/v1/search?query=React&page=2"
/// );
/// ```
#[must_use]
pub fn build_query(base: &str, term: &str, page: u32) -> String {
    format!("{base}{API_SEARCH}?{PARAM_SEARCH}{term}&{PARAM_PAGE}{page}")
}

/// Extracts the search term back out of a query endpoint.
///
/// Takes the text between the first `?` and the last `&`, then drops the
/// first `query=` occurrence. Only well-defined for strings produced by
/// [`build_query`]; other input yields unspecified text but never panics.
///
/// # Examples
///
/// ```
/// use hackerstories::api::extract_term;
///
/// assert_eq!(extract_term("?query=rust&page=0"), "rust");
/// ```
#[must_use]
pub fn extract_term(query: &str) -> String {
    let start = query.find('?').map_or(0, |idx| idx + 1);
    let end = match query.rfind('&') {
        Some(idx) if idx >= start => idx,
        _ => query.len(),
    };

    query[start..end].replacen(PARAM_SEARCH, "", 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn builds_endpoint_from_base_term_and_page() {
        assert_eq!(
            build_query("http://localhost:9000", "zellij", 0),
            "http://localhost:9000/search?query=zellij&page=0"
        );
    }

    #[test]
    fn empty_term_is_legal() {
        let query = build_query(DEFAULT_API_BASE, "", 3);
        assert_eq!(query, "https://hn.algolia.com/api/v1/search?query=&page=3");
        assert_eq!(extract_term(&query), "");
    }

    #[test]
    fn term_is_not_encoded() {
        let query = build_query(DEFAULT_API_BASE, "rust lang", 0);
        assert!(query.contains("query=rust lang&"));
    }

    #[test]
    fn question_mark_in_term_survives_round_trip() {
        let query = build_query(DEFAULT_API_BASE, "why?", 1);
        assert_eq!(extract_term(&query), "why?");
    }

    #[test]
    fn ampersand_in_term_reaches_the_server_unencoded() {
        let query = build_query(DEFAULT_API_BASE, "a&b", 0);
        assert!(query.ends_with("?query=a&b&page=0"));
        assert_eq!(extract_term(&query), "a&b");
    }

    #[test]
    fn base_with_query_string_breaks_extraction() {
        let query = build_query("http://proxy?key=1", "rust", 0);
        assert_ne!(extract_term(&query), "rust");
    }

    #[test]
    fn malformed_input_does_not_panic() {
        for input in ["", "?", "&", "&?", "no-delimiters", "x&y?query=z"] {
            let _ = extract_term(input);
        }
    }

    proptest! {
        #[test]
        fn round_trips_any_term(
            term in "\\PC{0,40}",
            page in 0u32..10_000,
        ) {
            let query = build_query(DEFAULT_API_BASE, &term, page);
            prop_assert_eq!(extract_term(&query), term);
        }
    }
}
