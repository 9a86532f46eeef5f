//! Storage worker running on its own Zellij worker thread.
//!
//! Writes to the data file happen here so that a slow disk never stalls
//! rendering. The storage backend is opened lazily on the first message.

use crate::domain::error::{HackerStoriesError, Result};
use crate::infrastructure::paths;
use crate::storage::{JsonStorage, Storage};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker state. Zellij constructs it with `Default`.
#[derive(Serialize, Deserialize, Default)]
pub struct HackerStoriesWorker {
    #[serde(skip)]
    storage: Option<Box<dyn Storage>>,
}

impl HackerStoriesWorker {
    /// Creates a worker backed by `storage` instead of the data file.
    #[must_use]
    pub fn with_storage(storage: Box<dyn Storage>) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    /// Opens the JSON document the worker writes to.
    ///
    /// A file that is not valid JSON is treated as empty, so the first
    /// persisted term replaces it instead of every write failing for the rest
    /// of the session.
    ///
    /// # Parameters
    ///
    /// * `path` - Storage file, normally [`paths::storage_file`]
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or has a newer version.
    pub fn open_storage(path: PathBuf) -> Result<Box<dyn Storage>> {
        Ok(Box::new(JsonStorage::open_or_reset(path)?))
    }

    fn storage(&mut self) -> Result<&mut Box<dyn Storage>> {
        if self.storage.is_none() {
            self.storage = Some(Self::open_storage(paths::storage_file())?);
        }
        self.storage
            .as_mut()
            .ok_or_else(|| HackerStoriesError::Worker("storage not initialized".to_string()))
    }

    fn handle_persist_term(&mut self, key: String, value: &str) -> WorkerResponse {
        match self.storage().and_then(|storage| storage.set(&key, value)) {
            Ok(()) => {
                tracing::debug!(key = %key, value = %value, "search term persisted");
                WorkerResponse::TermPersisted { key }
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to persist search term");
                WorkerResponse::Error {
                    message: format!("persist {key}: {e}"),
                }
            }
        }
    }

    /// Re-enters the sender's trace so spans created here link to it.
    ///
    /// The returned guard must be held while the message is processed.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    /// Processes one request and returns the reply to post back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::PersistTerm { key, value, .. } => self.handle_persist_term(key, &value),
        }
    }
}

static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

fn post_response(name: String, response: &WorkerResponse) {
    match serde_json::to_string(response) {
        Ok(payload) => post_message_to_plugin(PluginMessage {
            name,
            payload,
            worker_name: None,
        }),
        Err(e) => tracing::warn!(error = %e, "failed to serialize worker response"),
    }
}

impl ZellijWorker<'_> for HackerStoriesWorker {
    /// Entry point for messages posted by the plugin.
    ///
    /// `message` is echoed back as the response name; `payload` is a JSON
    /// [`WorkerMessage`].
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker message");
                post_response(
                    message,
                    &WorkerResponse::Error {
                        message: format!("malformed worker message: {e}"),
                    },
                );
                return;
            }
        };

        let response = self.handle_message(worker_message);
        post_response(message, &response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use tempfile::TempDir;

    fn persist(key: &str, value: &str) -> WorkerMessage {
        WorkerMessage::PersistTerm {
            key: key.into(),
            value: value.into(),
            trace_context: None,
        }
    }

    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(HackerStoriesError::Storage("read-only".into()))
        }
    }

    #[test]
    fn persist_term_acknowledges_key() {
        let mut worker = HackerStoriesWorker::with_storage(Box::new(MemoryStorage::default()));

        let response = worker.handle_message(persist("search", "rust"));

        assert_eq!(response, WorkerResponse::TermPersisted { key: "search".into() });
    }

    #[test]
    fn persisted_term_reaches_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        let storage = JsonStorage::new(path.clone()).unwrap();
        let mut worker = HackerStoriesWorker::with_storage(Box::new(storage));

        worker.handle_message(persist("search", "Redux"));

        let reopened = JsonStorage::new(path).unwrap();
        assert_eq!(reopened.get("search").unwrap(), Some("Redux".to_string()));
    }

    #[test]
    fn corrupt_data_file_is_replaced_by_the_next_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hackerstories.json");
        std::fs::write(&path, "\u{0}garbage").unwrap();
        let mut worker = HackerStoriesWorker::with_storage(HackerStoriesWorker::open_storage(path.clone()).unwrap());

        let response = worker.handle_message(persist("search", "Redux"));

        assert_eq!(response, WorkerResponse::TermPersisted { key: "search".into() });
        let reopened = JsonStorage::new(path).unwrap();
        assert_eq!(reopened.get("search").unwrap(), Some("Redux".to_string()));
    }

    #[test]
    fn storage_failure_becomes_error_response() {
        let mut worker = HackerStoriesWorker::with_storage(Box::new(ReadOnlyStorage));

        let response = worker.handle_message(persist("search", "rust"));

        assert!(matches!(response, WorkerResponse::Error { ref message } if message.contains("read-only")));
    }

    #[test]
    fn malformed_trace_context_is_ignored() {
        let mut worker = HackerStoriesWorker::with_storage(Box::new(MemoryStorage::default()));
        let message = WorkerMessage::PersistTerm {
            key: "search".into(),
            value: "rust".into(),
            trace_context: Some(crate::worker::TraceContext {
                trace_id: "not-hex".into(),
                parent_span_id: "nope".into(),
            }),
        };

        assert_eq!(
            worker.handle_message(message),
            WorkerResponse::TermPersisted { key: "search".into() }
        );
    }
}
