//! Error types for the hackerstories plugin.
//!
//! This module defines the centralized error type [`HackerStoriesError`] and a type
//! alias [`Result`] used throughout the plugin. All errors are implemented with
//! `thiserror`.

use thiserror::Error;

/// The main error type for plugin operations.
///
/// Fetch failures never escape the fetch orchestrator: [`HackerStoriesError::Http`]
/// and [`HackerStoriesError::Decode`] are folded into a failed fetch there. The
/// remaining variants surface from storage, theme and worker code.
///
/// # Examples
///
/// ```
/// use hackerstories::HackerStoriesError;
///
/// let err = HackerStoriesError::Http { status: 503 };
/// assert_eq!(err.to_string(), "HTTP request failed with status 503");
/// ```
#[derive(Debug, Error)]
pub enum HackerStoriesError {
    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the storage backend fails.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// The search endpoint answered with a non-success status.
    ///
    /// Zellij also reports transport failures (DNS, refused connection) as a
    /// non-success status, so this covers both.
    #[error("HTTP request failed with status {status}")]
    Http {
        /// Status code reported for the request.
        status: u16,
    },

    /// The response body was not a valid search result document.
    #[error("Failed to decode search response: {0}")]
    Decode(String),
}

/// A specialized `Result` type for plugin operations.
pub type Result<T> = std::result::Result<T, HackerStoriesError>;
