//! Event handling and state transitions.
//!
//! The plugin runtime translates Zellij events into [`Event`]s and feeds them
//! to [`handle_event`], which mutates [`AppState`] and returns the side effects
//! to run. Every fetch cycle goes through the same path: dispatch
//! `FetchStarted`, emit [`Action::Fetch`], and later receive
//! [`Event::FetchCompleted`].
//!
//! # Example
//!
//! ```
//! use hackerstories::app::persisted::PersistedTerm;
//! use hackerstories::app::{handle_event, Action, AppState, Event};
//! use hackerstories::storage::MemoryStorage;
//! use hackerstories::ui::Theme;
//!
//! let term = PersistedTerm::init(&MemoryStorage::default(), "search", "React");
//! let mut state = AppState::new(term, "https://hn.algolia.com/api/v1", Theme::default());
//!
//! let (render, actions) = handle_event(&mut state, &Event::Start)?;
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), hackerstories::HackerStoriesError>(())
//! ```

use crate::app::modes::InputMode;
use crate::app::orchestrator::FetchRequest;
use crate::app::reducer::StoriesAction;
use crate::app::sort::SortKey;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down one story (wraps to the top).
    KeyDown,
    /// Moves the cursor up one story (wraps to the bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Starts editing the search term.
    SearchMode,
    /// Appends a character to the term while editing.
    Char(char),
    /// Removes the last character of the term while editing.
    Backspace,
    /// Stops editing and searches page 0 for the term.
    SubmitSearch,
    /// Stops editing without searching. The edited term is kept.
    ExitSearch,

    /// Removes the story under the cursor from the list.
    DismissSelected,
    /// Requests the next page of the most recent search.
    LoadMore,
    /// Sorts by a column, or flips the direction if it is already active.
    Sort(SortKey),
    /// Searches again for the n-th (1-based) term of
    /// [`AppState::recent_searches`].
    ReselectRecent(usize),

    /// Issues the initial fetch. Sent once, after permissions are granted.
    Start,
    /// Sent after every frame; drives persistence of the term.
    Rendered,

    /// A web request finished.
    FetchCompleted {
        request_id: u64,
        /// Page the request asked for, as echoed through the request context.
        page: u32,
        status: u16,
        body: Vec<u8>,
    },

    /// Reply from the storage worker.
    WorkerResponse(WorkerResponse),
}

/// Records the fetch as started and wraps the request in an action.
fn begin_fetch(state: &mut AppState, request: FetchRequest) -> Action {
    state.dispatch(StoriesAction::FetchStarted { page: request.page });
    Action::Fetch(request)
}

/// Processes `event`, mutating `state`.
///
/// Returns whether the UI should re-render, plus the actions for the runtime
/// to execute in order.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for events whose handling
/// can fail without changing the runtime contract.
#[allow(clippy::unnecessary_wraps, clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::SearchMode => {
            tracing::debug!(term = %state.search_term.value(), "editing search term");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut term = state.search_term.value().to_string();
            term.push(*c);
            tracing::trace!(term = %term, char = %c, "search term updated");
            state.search_term.set(term);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut term = state.search_term.value().to_string();
            term.pop();
            state.search_term.set(term);
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            state.input_mode = InputMode::Normal;
            let term = state.search_term.value().to_string();
            if term.is_empty() {
                tracing::debug!("empty search term, not submitting");
                return Ok((true, vec![]));
            }
            tracing::debug!(term = %term, "search submitted");
            let request = state.orchestrator.search(&term, 0);
            Ok((true, vec![begin_fetch(state, request)]))
        }
        Event::ExitSearch => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }

        Event::DismissSelected => {
            let Some(story) = state.selected_story().cloned() else {
                tracing::debug!("no story selected to dismiss");
                return Ok((false, vec![]));
            };
            tracing::debug!(object_id = %story.object_id, title = %story.title, "dismissing story");
            let changed = state.dispatch(StoriesAction::ItemRemoved { story });
            Ok((changed, vec![]))
        }
        Event::LoadMore => {
            let request = state.orchestrator.load_more(state.stories.page);
            Ok((true, vec![begin_fetch(state, request)]))
        }
        Event::Sort(key) => {
            state.toggle_sort(*key);
            Ok((true, vec![]))
        }
        Event::ReselectRecent(n) => {
            let terms = state.recent_searches();
            let Some(term) = n.checked_sub(1).and_then(|i| terms.get(i)) else {
                tracing::debug!(n, available = terms.len(), "no recent search at index");
                return Ok((false, vec![]));
            };
            tracing::debug!(term = %term, "reselecting recent search");
            let request = state.reselect(term);
            Ok((true, vec![begin_fetch(state, request)]))
        }

        Event::Start => match state.orchestrator.start() {
            Some(request) => Ok((true, vec![begin_fetch(state, request)])),
            None => Ok((false, vec![])),
        },
        Event::Rendered => {
            let Some(value) = state.search_term.after_render() else {
                return Ok((false, vec![]));
            };
            let key = state.search_term.key().to_string();
            Ok((false, vec![Action::PostToWorker(WorkerMessage::persist_term(key, value))]))
        }
        Event::FetchCompleted {
            request_id,
            page,
            status,
            body,
        } => {
            tracing::debug!(request_id, page, status, bytes = body.len(), "fetch completed");
            let action = state.orchestrator.complete(*request_id, *status, body);
            let changed = state.dispatch(action);
            Ok((changed, vec![]))
        }
        Event::WorkerResponse(response) => {
            match response {
                WorkerResponse::TermPersisted { key } => tracing::debug!(key = %key, "term persisted"),
                WorkerResponse::Error { message } => tracing::warn!(error = %message, "worker error"),
            }
            Ok((false, vec![]))
        }
    }
}
