//! Zellij plugin wrapper and entry point.
//!
//! A thin layer between the hackerstories library and the Zellij plugin
//! system. Zellij events are mapped to library [`Event`]s, and the returned
//! [`Action`]s are executed here through the Zellij API.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │      web_request
//! │  │  State (plugin)  │───┼──────────────────▶ search API
//! │  └──────────────────┘   │◀─ WebRequestResult
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │HackerStoriesWorker│  │  ← term writes to /data
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: move down / up
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: move
//! - `/`: edit the search term
//! - `x`: dismiss the selected story
//! - `m`: load the next page
//! - `t`, `a`, `c`, `p`: sort by title, author, comments, points
//! - `1`-`9`: search a recent term again
//! - `q`: close
//!
//! Search mode:
//! - characters and `Backspace`: edit the term
//! - `Enter`: search
//! - `Esc`: stop editing

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use hackerstories::app::{FetchRequest, SortKey};
use hackerstories::infrastructure::paths;
use hackerstories::storage::{JsonStorage, MemoryStorage, Storage};
use hackerstories::worker::{HackerStoriesWorker, WorkerMessage, WorkerResponse};
use hackerstories::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);
register_worker!(HackerStoriesWorker, hackerstories_worker, HACKERSTORIES_WORKER);

/// Name of the worker and of the messages exchanged with it.
const WORKER_NAME: &str = "hackerstories";

const CONTEXT_REQUEST_ID: &str = "request_id";
const CONTEXT_PAGE: &str = "page";

/// Plugin state wrapper.
struct State {
    app: hackerstories::AppState,

    /// Set once the initial fetch has been issued.
    started: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: hackerstories::initialize(&Config::default(), &MemoryStorage::default()),
            started: false,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, loads the stored term, requests permissions and
    /// subscribes to events. The first fetch waits for the permission result.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        hackerstories::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        let store = Self::open_storage();
        self.app = hackerstories::initialize(&config, store.as_ref());
        tracing::debug!(term = %self.app.search_term.value(), "app state initialized");

        request_permission(&[PermissionType::WebAccess, PermissionType::ReadApplicationState]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Maps the Zellij event, runs the handler and executes its actions.
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match self.map_permission_result(permissions) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Draws the frame, then lets the handler persist whatever it showed.
    fn render(&mut self, rows: usize, cols: usize) {
        hackerstories::ui::render(&self.app, rows, cols);
        self.dispatch(&Event::Rendered);
    }
}

impl State {
    /// Opens the data file for the one read at load, falling back to an empty
    /// in-memory store.
    fn open_storage() -> Box<dyn Storage> {
        match JsonStorage::new(paths::storage_file()) {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                tracing::warn!(error = %e, "failed to open storage, starting without a stored term");
                Box::new(MemoryStorage::default())
            }
        }
    }

    /// Runs the handler and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        match self.app.input_mode {
            InputMode::Search => Some(match key.bare_key {
                BareKey::Enter => Event::SubmitSearch,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Normal => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Char('x') => Event::DismissSelected,
                BareKey::Char('m') => Event::LoadMore,
                BareKey::Char('t') => Event::Sort(SortKey::Title),
                BareKey::Char('a') => Event::Sort(SortKey::Author),
                BareKey::Char('c') => Event::Sort(SortKey::Comments),
                BareKey::Char('p') => Event::Sort(SortKey::Points),
                BareKey::Char(c @ '1'..='9') => Event::ReselectRecent(c.to_digit(10)? as usize),
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            }),
        }
    }

    /// Issues the initial fetch the first time permissions are granted.
    fn map_permission_result(&mut self, permissions: PermissionStatus) -> Option<Event> {
        match permissions {
            PermissionStatus::Granted if !self.started => {
                tracing::debug!("permissions granted - starting first search");
                self.started = true;
                Some(Event::Start)
            }
            PermissionStatus::Granted => None,
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - searches cannot be issued");
                None
            }
        }
    }

    /// Recovers the request id and page from the web request context.
    fn map_web_request_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        let request_id = context.get(CONTEXT_REQUEST_ID).and_then(|s| s.parse().ok());
        let page = context.get(CONTEXT_PAGE).and_then(|s| s.parse().ok());

        match (request_id, page) {
            (Some(request_id), Some(page)) => Some(Event::FetchCompleted {
                request_id,
                page,
                status,
                body,
            }),
            _ => {
                tracing::warn!(status, context = ?context, "web request result without a fetch context");
                None
            }
        }
    }

    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn issue_fetch(request: &FetchRequest) {
        let context = BTreeMap::from([
            (CONTEXT_REQUEST_ID.to_string(), request.request_id.to_string()),
            (CONTEXT_PAGE.to_string(), request.page.to_string()),
        ]);

        tracing::debug!(request_id = request.request_id, url = %request.url, "issuing web request");
        web_request(&request.url, HttpVerb::Get, BTreeMap::new(), vec![], context);
    }

    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(WORKER_NAME.to_string()),
                    name: WORKER_NAME.to_string(),
                    payload,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::Fetch(request) => Self::issue_fetch(request),
            Action::PostToWorker(message) => Self::post_worker_message(message),
        }
    }
}
