//! Well-known paths inside the Zellij plugin sandbox.

use std::path::PathBuf;

/// File name of the key-value store holding the persisted search term.
const STORAGE_FILE_NAME: &str = "hackerstories.json";

/// File name of the OTLP trace export.
const TRACE_FILE_NAME: &str = "hackerstories-otlp.json";

/// Returns the plugin's data directory.
///
/// Zellij mounts a per-plugin directory at `/data` that survives restarts of
/// the plugin and of Zellij itself.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/data")
}

/// Location of the JSON key-value store.
///
/// ```
/// use hackerstories::infrastructure::storage_file;
///
/// assert_eq!(storage_file().to_str(), Some("/data/hackerstories.json"));
/// ```
#[must_use]
pub fn storage_file() -> PathBuf {
    get_data_dir().join(STORAGE_FILE_NAME)
}

/// Location of the trace export file.
#[must_use]
pub fn trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Expands a leading `~` to the sandbox's `/host` mount.
///
/// # Examples
///
/// ```
/// use hackerstories::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_files_live_in_the_data_dir() {
        assert!(storage_file().starts_with(get_data_dir()));
        assert!(trace_file().starts_with(get_data_dir()));
        assert_ne!(storage_file(), trace_file());
    }

    #[test]
    fn tilde_only_expands_at_the_start() {
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
        assert_eq!(expand_tilde("~user/x"), "~user/x");
    }
}
