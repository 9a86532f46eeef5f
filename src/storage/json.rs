//! JSON file-based storage backend.
//!
//! The whole document is kept in memory and rewritten on every change using
//! an atomic write (write to a sibling temp file, then rename), so a crash
//! never leaves a half-written file behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "updated_at": "2026-10-19T08:12:44Z",
//!   "entries": {
//!     "search": "rust"
//!   }
//! }
//! ```

use crate::domain::error::{HackerStoriesError, Result};
use crate::storage::backend::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const STORAGE_VERSION: u32 = 1;

/// Top-level document written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    entries: HashMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: STORAGE_VERSION,
            updated_at: None,
            entries: HashMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// `Send` but not `Sync`: owned by the worker thread for writes, or opened
/// read-only-in-practice by the plugin thread at load.
pub struct JsonStorage {
    file_path: PathBuf,
    data: StorageData,
    dirty: bool,
}

impl JsonStorage {
    /// Opens the storage file, creating parent directories as needed.
    ///
    /// A missing file starts an empty document; nothing is written until the
    /// first [`Storage::set`].
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// exists but cannot be read or parsed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hackerstories::storage::{JsonStorage, Storage};
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/data/hackerstories.json"))?;
    /// let term = storage.get("search")?;
    /// # Ok::<(), hackerstories::HackerStoriesError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        Self::open(file_path, false)
    }

    /// Opens the storage file like [`JsonStorage::new`], but treats a file
    /// that is not valid JSON as empty.
    ///
    /// The bad file is left on disk until the first [`Storage::set`], which
    /// replaces it. Used by the worker, which must keep persisting even when a
    /// previous session left a damaged file behind.
    ///
    /// # Parameters
    ///
    /// * `file_path` - Location of the JSON document
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, the file
    /// cannot be read, or it declares a newer storage version.
    pub fn open_or_reset(file_path: PathBuf) -> Result<Self> {
        Self::open(file_path, true)
    }

    fn open(file_path: PathBuf, reset_corrupt: bool) -> Result<Self> {
        let _span = tracing::debug_span!("json_storage_open", path = ?file_path, reset_corrupt).entered();

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path, reset_corrupt)?
        } else {
            tracing::debug!("no storage file yet, starting empty");
            StorageData::default()
        };

        tracing::debug!(version = data.version, entry_count = data.entries.len(), "storage opened");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Reads and validates the document at `path`.
    ///
    /// # Parameters
    ///
    /// * `path` - File to read
    /// * `reset_corrupt` - Return an empty document instead of failing when
    ///   the file is not valid JSON
    fn load_from_file(path: &Path, reset_corrupt: bool) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = match serde_json::from_str(&contents) {
            Ok(data) => data,
            Err(e) if reset_corrupt => {
                tracing::warn!(path = ?path, error = %e, "storage file is not valid JSON, starting empty");
                return Ok(StorageData::default());
            }
            Err(e) => return Err(HackerStoriesError::Storage(format!("failed to parse JSON: {e}"))),
        };

        if data.version > STORAGE_VERSION {
            return Err(HackerStoriesError::Storage(format!(
                "unsupported storage version {} (expected {STORAGE_VERSION})",
                data.version
            )));
        }

        Ok(data)
    }

    /// Writes the document if it has unsaved changes.
    ///
    /// The JSON goes to `<file>.tmp` first and is then renamed over the real
    /// file, so readers see either the old or the new document. `updated_at`
    /// is refreshed on every write.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temp write or the rename fails.
    /// The document stays dirty in that case and is retried on drop.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        self.data.updated_at = Some(Utc::now());

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| HackerStoriesError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "storage saved");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.data.entries.get(key).cloned();
        tracing::trace!(key = %key, found = value.is_some(), "storage lookup");
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_storage_set", key = %key).entered();

        if self.data.entries.get(key).map(String::as_str) == Some(value) {
            tracing::trace!("value unchanged");
            return Ok(());
        }

        self.data.entries.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonStorage {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
