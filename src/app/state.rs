//! Application state and view model computation.
//!
//! [`AppState`] is the single owner of everything the plugin knows: the
//! fetched result list, the fetch orchestrator with its query log, the
//! persisted search term, and the transient UI state (sort, selection, input
//! mode). The result list only changes through [`AppState::dispatch`], which
//! runs the reducer.
//!
//! # Example
//!
//! ```
//! use hackerstories::app::persisted::PersistedTerm;
//! use hackerstories::app::AppState;
//! use hackerstories::storage::MemoryStorage;
//! use hackerstories::ui::Theme;
//!
//! let term = PersistedTerm::init(&MemoryStorage::default(), "search", "React");
//! let state = AppState::new(term, "https://hn.algolia.com/api/v1", Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.header.title, "My Hacker Stories with 0 comments");
//! ```

use super::modes::InputMode;
use super::orchestrator::{FetchOrchestrator, FetchRequest};
use super::persisted::PersistedTerm;
use super::reducer::{reduce, ResultState, StoriesAction};
use super::sort::{SortKey, SortState};
use crate::domain::{sum_comments, Story};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ColumnHeader, DisplayItem, EmptyState, FooterInfo, HeaderInfo, RecentSearch, SearchBarInfo,
    UIViewModel,
};

/// Rows taken by everything except table rows: nine above the table (blank
/// line, header, border, search box, recent searches, error line, column
/// headings) and four below it (link, border, footer, last line).
const CHROME_ROWS: usize = 13;

/// Minimum title column width; the renderer widens it to fill the pane.
const TITLE_WIDTH: usize = 40;
const AUTHOR_WIDTH: usize = 18;
const AGE_WIDTH: usize = 9;
const COMMENTS_WIDTH: usize = 11;
const POINTS_WIDTH: usize = 8;

/// Recent searches shown and selectable with the single keys `1`-`9`.
pub const RECENT_SEARCH_LIMIT: usize = 9;

/// Central application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Fetched stories and fetch status. Changed only by [`Self::dispatch`].
    pub stories: ResultState,

    /// Issues requests and owns the query log.
    pub orchestrator: FetchOrchestrator,

    /// Term shown in the search bar, written back to storage after renders.
    pub search_term: PersistedTerm,

    /// Active sort column for the table.
    pub sort: SortState,

    pub input_mode: InputMode,

    /// Index into the sorted view, not into `stories.items`.
    pub selected_index: usize,

    pub theme: Theme,
}

impl AppState {
    /// Creates the state for a new session.
    ///
    /// The query log is seeded with the loaded search term, so the first fetch
    /// requests page 0 of whatever was searched last time.
    #[must_use]
    pub fn new(search_term: PersistedTerm, api_base: &str, theme: Theme) -> Self {
        let orchestrator = FetchOrchestrator::new(api_base, search_term.value());
        Self {
            stories: ResultState::default(),
            orchestrator,
            search_term,
            sort: SortState::default(),
            input_mode: InputMode::Normal,
            selected_index: 0,
            theme,
        }
    }

    /// Runs the reducer and stores the result. Returns `true` if anything changed.
    pub fn dispatch(&mut self, action: StoriesAction) -> bool {
        let next = reduce(&self.stories, action);
        let changed = next != self.stories;
        self.stories = next;
        self.clamp_selection();
        changed
    }

    /// Stories in display order.
    #[must_use]
    pub fn visible_stories(&self) -> Vec<&Story> {
        self.sort.apply(&self.stories.items)
    }

    #[must_use]
    pub fn selected_story(&self) -> Option<&Story> {
        self.visible_stories().get(self.selected_index).copied()
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.stories.items.len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.stories.items.len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Switches sort column or direction and resets the cursor to the top.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
        self.selected_index = 0;
        tracing::debug!(key = ?self.sort.key, is_reverse = self.sort.is_reverse, "sort changed");
    }

    /// The newest recent terms, oldest first, at most [`RECENT_SEARCH_LIMIT`].
    ///
    /// Entry `n - 1` of this list is what `1`-based recent search `n` refers
    /// to, both in the view model and when reselecting.
    #[must_use]
    pub fn recent_searches(&self) -> Vec<String> {
        let mut terms = self.orchestrator.recent_terms();
        let skip = terms.len().saturating_sub(RECENT_SEARCH_LIMIT);
        terms.drain(..skip);
        terms
    }

    /// Makes `term` the current term and requests page 0 for it.
    pub fn reselect(&mut self, term: &str) -> FetchRequest {
        self.search_term.set(term);
        self.orchestrator.search(term, 0)
    }

    fn clamp_selection(&mut self) {
        let len = self.stories.items.len();
        if len == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(len - 1);
        }
    }

    /// Computes a renderable view model for a pane of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let now = chrono::Utc::now().timestamp();
        self.compute_viewmodel_at(rows, cols, now)
    }

    /// Same as [`Self::compute_viewmodel`] with an explicit clock.
    ///
    /// # Parameters
    ///
    /// * `rows` - Pane height; rows left after the fixed chrome become table rows
    /// * `cols` - Pane width; below 100 columns the footer is abbreviated
    /// * `now` - Current time in Unix seconds, used for story ages
    ///
    /// The table shows a window of the sorted stories centred on the cursor.
    /// While a fetch is in flight the window is empty and the UI shows
    /// `Loading ...` instead.
    #[must_use]
    pub fn compute_viewmodel_at(&self, rows: usize, cols: usize, now: i64) -> UIViewModel {
        let visible = self.visible_stories();
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(visible.len());
        if visible_end - visible_start < available_rows && visible.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items = if self.stories.is_loading {
            vec![]
        } else {
            visible[visible_start..visible_end]
                .iter()
                .enumerate()
                .map(|(offset, story)| {
                    Self::compute_display_item(story, visible_start + offset == self.selected_index, now)
                })
                .collect()
        };

        let empty_state = (!self.stories.is_loading && visible.is_empty()).then(|| self.compute_empty_state());

        UIViewModel {
            header: HeaderInfo {
                title: format!("My Hacker Stories with {} comments", sum_comments(&self.stories.items)),
            },
            search_bar: SearchBarInfo {
                query: self.search_term.value().to_string(),
                is_editing: self.input_mode == InputMode::Search,
            },
            recent_searches: self
                .recent_searches()
                .into_iter()
                .enumerate()
                .map(|(i, term)| RecentSearch { index: i + 1, term })
                .collect(),
            error_message: self.stories.is_error.then(|| "Something went wrong ...".to_string()),
            loading: self.stories.is_loading,
            columns: self.compute_columns(),
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            footer: self.compute_footer(cols),
            empty_state,
        }
    }

    fn compute_display_item(story: &Story, is_selected: bool, now: i64) -> DisplayItem {
        DisplayItem {
            title: story.title.clone(),
            author: story.author.clone(),
            age: story.age(now),
            comments: story.num_comments.to_string(),
            points: story.points.to_string(),
            url: story.url.clone(),
            is_selected,
        }
    }

    fn compute_columns(&self) -> Vec<ColumnHeader> {
        let marker = if self.sort.is_ascending() { "▲" } else { "▼" };
        [
            ("Title", SortKey::Title, TITLE_WIDTH),
            ("Author", SortKey::Author, AUTHOR_WIDTH),
            ("Age", SortKey::None, AGE_WIDTH),
            ("Comments", SortKey::Comments, COMMENTS_WIDTH),
            ("Points", SortKey::Points, POINTS_WIDTH),
        ]
        .into_iter()
        .map(|(label, key, width)| ColumnHeader {
            label: label.to_string(),
            sort_marker: (key != SortKey::None && key == self.sort.key).then_some(marker),
            width,
        })
        .collect()
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.stories.is_error {
            EmptyState {
                message: "No stories to show".to_string(),
                subtitle: "Press m to retry the last search, or / to edit the term".to_string(),
            }
        } else {
            EmptyState {
                message: format!("No stories for \"{}\"", self.search_term.value()),
                subtitle: "Press / to search for something else".to_string(),
            }
        }
    }

    fn compute_footer(&self, cols: usize) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search => "Enter: search  ESC: cancel  Type to edit the term".to_string(),
            InputMode::Normal if cols < 100 => {
                "j/k: move  /: search  x: dismiss  m: more  t/a/c/p: sort  q: quit".to_string()
            }
            InputMode::Normal => {
                "j/k: navigate  /: search  x: dismiss  m: more  t/a/c/p: sort  1-9: recent search  q: quit"
                    .to_string()
            }
        };
        FooterInfo { keybindings }
    }
}
