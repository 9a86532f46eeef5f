//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never talks to Zellij directly.
//! It returns a `Vec<Action>` and the plugin runtime executes the actions in
//! order after the state change.

use crate::app::orchestrator::FetchRequest;
use crate::worker::WorkerMessage;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Issues an HTTP GET for a search page.
    ///
    /// The runtime passes `request_id` and `page` through the web request
    /// context so the completion can be matched back to this request.
    Fetch(FetchRequest),

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),
}
