//! Storage backend abstraction.
//!
//! The trait is deliberately small: the plugin stores a handful of string
//! values under fixed keys and never needs to enumerate them.

use crate::domain::error::Result;

/// A string key-value store.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes
/// - [`MemoryStorage`](crate::storage::MemoryStorage): process memory only
///
/// # Examples
///
/// ```
/// use hackerstories::storage::{MemoryStorage, Storage};
///
/// let mut store = MemoryStorage::default();
/// store.set("search", "rust")?;
/// assert_eq!(store.get("search")?, Some("rust".to_string()));
/// # Ok::<(), hackerstories::HackerStoriesError>(())
/// ```
pub trait Storage: Send {
    /// Returns the value stored under `key`, or `Ok(None)` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// Backends that persist to disk have written the value by the time this
    /// returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
