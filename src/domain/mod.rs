//! Domain layer for the hackerstories plugin.
//!
//! Core types that are independent of Zellij and of the storage or network
//! plumbing.
//!
//! - [`error`]: Error types and result aliases
//! - [`story`]: Story model and identity

pub mod error;
pub mod story;

pub use error::{HackerStoriesError, Result};
pub use story::{sum_comments, Story, StoryId};
