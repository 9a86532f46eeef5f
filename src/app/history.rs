//! Query log and the recent-searches view derived from it.

use crate::api::extract_term;

/// Append-only log of issued query endpoints, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryLog {
    entries: Vec<String>,
}

impl QueryLog {
    /// Creates a log seeded with a single query.
    #[must_use]
    pub fn seeded(query: String) -> Self {
        Self {
            entries: vec![query],
        }
    }

    /// Appends a query to the log.
    pub fn push(&mut self, query: String) {
        self.entries.push(query);
    }

    /// Most recently issued query, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// All queries in issue order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recent search terms, recomputed from the full log.
    #[must_use]
    pub fn recent_terms(&self) -> Vec<String> {
        derive_recent_terms(&self.entries)
    }
}

/// Collapses a query log into its sequence of search terms.
///
/// A term is dropped only when it equals the term kept immediately before it,
/// so paging through one search shows up once while returning to an earlier
/// term later shows up again.
///
/// # Examples
///
/// ```
/// use hackerstories::app::history::derive_recent_terms;
///
/// let log = vec![
///     "?query=A&page=0".to_string(),
///     "?query=A&page=1".to_string(),
///     "?query=B&page=0".to_string(),
///     "?query=A&page=0".to_string(),
/// ];
/// assert_eq!(derive_recent_terms(&log), vec!["A", "B", "A"]);
/// ```
#[must_use]
pub fn derive_recent_terms(log: &[String]) -> Vec<String> {
    log.iter().fold(Vec::new(), |mut terms: Vec<String>, query| {
        let term = extract_term(query);
        if terms.last() != Some(&term) {
            terms.push(term);
        }
        terms
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(entries: &[&str]) -> Vec<String> {
        entries.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn adjacent_duplicates_collapse() {
        let entries = log(&["?query=A&page=0", "?query=A&page=1", "?query=B&page=0"]);
        assert_eq!(derive_recent_terms(&entries), vec!["A", "B"]);
    }

    #[test]
    fn non_adjacent_repeats_are_kept() {
        let entries = log(&["?query=A&page=0", "?query=B&page=0", "?query=A&page=0"]);
        assert_eq!(derive_recent_terms(&entries), vec!["A", "B", "A"]);
    }

    #[test]
    fn empty_log_has_no_terms() {
        assert!(derive_recent_terms(&[]).is_empty());
    }

    #[test]
    fn first_entry_is_always_kept_even_when_empty() {
        let entries = log(&["?query=&page=0", "?query=&page=1"]);
        assert_eq!(derive_recent_terms(&entries), vec![""]);
    }

    #[test]
    fn query_log_appends_in_order() {
        let mut query_log = QueryLog::seeded("?query=A&page=0".into());
        query_log.push("?query=B&page=0".into());

        assert_eq!(query_log.len(), 2);
        assert_eq!(query_log.last(), Some("?query=B&page=0"));
        assert_eq!(query_log.recent_terms(), vec!["A", "B"]);
    }
}
