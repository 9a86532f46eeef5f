//! hackerstories: a Hacker News search client running as a Zellij plugin.
//!
//! The plugin searches the public Hacker News index, shows the hits as a
//! sortable table, lets you dismiss stories, load further pages and jump back
//! to recent searches. The last search term is remembered across restarts.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← keys, web requests
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, reducer, fetch orchestration     │
//! │  - Query log, persisted term, sorting               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON file   │   │ - Term writes │
//! │ - Theming     │   │ - In-memory   │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  API (api/), Domain (domain/), Paths (infrastructure/) │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing + OpenTelemetry, OTLP/JSON file export   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/hackerstories.wasm" {
//!         default_term "React"
//!         storage_key "search"
//!         api_base "https://hn.algolia.com/api/v1"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use hackerstories::storage::MemoryStorage;
//! use hackerstories::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default(), &MemoryStorage::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::Start)?;
//! let Some(Action::Fetch(request)) = actions.first() else { unreachable!() };
//! assert_eq!(request.url, "https://hn.algolia.com/api/v1/search?query=React&page=0");
//! # Ok::<(), hackerstories::HackerStoriesError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{HackerStoriesError, Result, Story, StoryId};
pub use ui::Theme;

use app::persisted::PersistedTerm;
use std::collections::BTreeMap;
use storage::Storage;

/// Search term used when nothing has been stored yet.
pub const DEFAULT_TERM: &str = "React";

/// Storage key the search term is kept under.
pub const DEFAULT_STORAGE_KEY: &str = "search";

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Term searched on first launch. Default: `React`.
    pub default_term: String,

    /// Storage key for the last search term. Default: `search`.
    pub storage_key: String,

    /// Base URL of the search API, without a trailing slash.
    pub api_base: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file, with `~` already expanded.
    pub theme_file: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn` or `error`. Default: `info`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_term: DEFAULT_TERM.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            api_base: api::DEFAULT_API_BASE.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij hands to `load`.
    ///
    /// Unknown keys are ignored. Blank values fall back to the defaults, and a
    /// trailing slash on `api_base` is dropped.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use hackerstories::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("default_term".to_string(), "rust".to_string());
    /// map.insert("theme_file".to_string(), "~/theme.toml".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.default_term, "rust");
    /// assert_eq!(config.storage_key, "search");
    /// assert_eq!(config.theme_file.as_deref(), Some("/host/theme.toml"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            default_term: value("default_term").unwrap_or(defaults.default_term),
            storage_key: value("storage_key").unwrap_or(defaults.storage_key),
            api_base: value("api_base")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            theme_name: value("theme"),
            theme_file: value("theme_file").map(|path| infrastructure::expand_tilde(&path)),
            trace_level: value("trace_level"),
        }
    }

    fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial application state.
///
/// Reads the stored search term from `store` once and seeds the query log with
/// page 0 of it. No request is issued until [`Event::Start`] is handled.
pub fn initialize(config: &Config, store: &dyn Storage) -> AppState {
    tracing::debug!(api_base = %config.api_base, storage_key = %config.storage_key, "initializing hackerstories");

    let search_term = PersistedTerm::init(store, config.storage_key.clone(), &config.default_term);
    AppState::new(search_term, &config.api_base, config.theme())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn blank_values_fall_back_and_base_is_normalized() {
        let config = Config::from_zellij(&map(&[
            ("default_term", "  "),
            ("api_base", "http://localhost:8080/api/"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.default_term, DEFAULT_TERM);
        assert_eq!(config.api_base, "http://localhost:8080/api");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn initialize_prefers_stored_term() {
        let mut store = MemoryStorage::default();
        store.set("last", "Redux").unwrap();
        let config = Config::from_zellij(&map(&[("storage_key", "last")]));

        let state = initialize(&config, &store);

        assert_eq!(state.search_term.value(), "Redux");
        assert_eq!(
            state.orchestrator.query_log().last(),
            Some("https://hn.algolia.com/api/v1/search?query=Redux&page=0")
        );
    }

    #[test]
    fn unknown_theme_or_missing_file_uses_default() {
        let by_name = Config {
            theme_name: Some("solarized".into()),
            ..Config::default()
        };
        let by_file = Config {
            theme_file: Some("/nonexistent/theme.toml".into()),
            theme_name: Some("catppuccin-latte".into()),
            ..Config::default()
        };

        assert_eq!(by_name.theme(), Theme::default());
        assert_eq!(by_file.theme(), Theme::default());
    }
}
