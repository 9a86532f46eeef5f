//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags only, so the
//! renderer never has to look at stories, sort state or the query log.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Headline with the comment total.
    pub header: HeaderInfo,

    /// Search input box. Always drawn.
    pub search_bar: SearchBarInfo,

    /// Recently issued search terms, oldest first.
    pub recent_searches: Vec<RecentSearch>,

    /// Shown above the list when the last fetch failed.
    pub error_message: Option<String>,

    /// A fetch is in flight; the table is replaced by a loading line.
    pub loading: bool,

    /// Column headings with the active sort marker.
    pub columns: Vec<ColumnHeader>,

    /// Rows in the visible window, in display order.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Message drawn instead of the table when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// One story row in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Title, truncated to the title column.
    pub title: String,
    pub author: String,
    /// Relative age such as "3h ago", empty when unknown.
    pub age: String,
    pub comments: String,
    pub points: String,
    /// Link target, shown in the footer area for the selected row.
    pub url: Option<String>,
    pub is_selected: bool,
}

/// Table column heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub label: String,
    /// `Some("▲")` or `Some("▼")` on the active sort column.
    pub sort_marker: Option<&'static str>,
    pub width: usize,
}

/// Entry in the recent searches row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentSearch {
    /// 1-based number that selects this term.
    pub index: usize,
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Shown when a fetch finished without anything to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search input state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search term.
    pub query: String,
    /// The term is being edited; the box is highlighted.
    pub is_editing: bool,
}
