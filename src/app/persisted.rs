//! Search term that survives plugin restarts.
//!
//! The term is read from storage once, when the plugin loads. Changes are kept
//! in memory immediately and written back after the render pass that shows
//! them. The very first render pass never writes: at that point the value is
//! the one just loaded (or the default) and writing it back would be redundant.

use crate::storage::Storage;

/// A string value backed by a single storage key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTerm {
    key: String,
    value: String,
    mounted: bool,
    dirty: bool,
}

impl PersistedTerm {
    /// Loads the value for `key`, falling back to `default`.
    ///
    /// A missing, empty or unreadable stored value all fall back to `default`.
    #[must_use]
    pub fn init(store: &dyn Storage, key: impl Into<String>, default: &str) -> Self {
        let key = key.into();
        let value = match store.get(&key) {
            Ok(Some(stored)) if !stored.is_empty() => stored,
            Ok(_) => default.to_string(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to read persisted term, using default");
                default.to_string()
            }
        };

        tracing::debug!(key = %key, value = %value, "persisted term loaded");

        Self {
            key,
            value,
            mounted: false,
            dirty: false,
        }
    }

    /// Current in-memory value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Storage key this value is written under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replaces the value. Setting the same value is a no-op.
    pub fn set(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value != self.value {
            self.value = value;
            self.dirty = true;
        }
    }

    /// Marks the end of a render pass and returns the value to write, if any.
    ///
    /// The first call only records that the first pass happened.
    pub fn after_render(&mut self) -> Option<String> {
        if !self.mounted {
            self.mounted = true;
            self.dirty = false;
            return None;
        }

        if self.dirty {
            self.dirty = false;
            Some(self.value.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{HackerStoriesError, Result};
    use crate::storage::MemoryStorage;

    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(HackerStoriesError::Storage("unreadable".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(HackerStoriesError::Storage("unwritable".into()))
        }
    }

    #[test]
    fn loads_stored_value() {
        let mut store = MemoryStorage::default();
        store.set("search", "rust").unwrap();

        let term = PersistedTerm::init(&store, "search", "React");

        assert_eq!(term.value(), "rust");
        assert_eq!(term.key(), "search");
    }

    #[test]
    fn falls_back_to_default_when_missing_empty_or_unreadable() {
        let mut store = MemoryStorage::default();
        assert_eq!(PersistedTerm::init(&store, "search", "React").value(), "React");

        store.set("search", "").unwrap();
        assert_eq!(PersistedTerm::init(&store, "search", "React").value(), "React");

        assert_eq!(PersistedTerm::init(&BrokenStorage, "search", "React").value(), "React");
    }

    #[test]
    fn first_render_never_writes() {
        let store = MemoryStorage::default();
        let mut term = PersistedTerm::init(&store, "search", "React");

        assert_eq!(term.after_render(), None);
        assert_eq!(term.after_render(), None);
    }

    #[test]
    fn change_after_first_render_is_written_once() {
        let store = MemoryStorage::default();
        let mut term = PersistedTerm::init(&store, "search", "React");
        term.after_render();

        term.set("Redux");

        assert_eq!(term.value(), "Redux");
        assert_eq!(term.after_render(), Some("Redux".to_string()));
        assert_eq!(term.after_render(), None);
    }

    #[test]
    fn setting_the_same_value_does_not_write() {
        let store = MemoryStorage::default();
        let mut term = PersistedTerm::init(&store, "search", "React");
        term.after_render();

        term.set("React");

        assert_eq!(term.after_render(), None);
    }

    #[test]
    fn change_before_first_render_is_not_written() {
        let store = MemoryStorage::default();
        let mut term = PersistedTerm::init(&store, "search", "React");

        term.set("Redux");

        assert_eq!(term.after_render(), None);
        assert_eq!(term.value(), "Redux");
    }
}
