//! Application layer: state, events and the actions they produce.
//!
//! ```text
//! Key / web result / worker reply → Event → handle_event → AppState → Actions
//!                                                 │
//!                                   reduce(ResultState, StoriesAction)
//! ```
//!
//! - [`actions`]: side effects returned to the plugin runtime
//! - [`handler`]: event processing
//! - [`history`]: the query log and recent search terms
//! - [`modes`]: input mode
//! - [`orchestrator`]: builds requests and turns completions into reducer actions
//! - [`persisted`]: the search term that survives restarts
//! - [`reducer`]: result list transitions
//! - [`sort`]: table ordering
//! - [`state`]: the state container and view model computation

pub mod actions;
pub mod handler;
pub mod history;
pub mod modes;
pub mod orchestrator;
pub mod persisted;
pub mod reducer;
pub mod sort;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use orchestrator::{FetchOrchestrator, FetchRequest};
pub use reducer::{reduce, ResultState, StoriesAction};
pub use sort::{SortKey, SortState};
pub use state::AppState;
