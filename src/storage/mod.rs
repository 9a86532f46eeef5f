//! Key-value persistence for plugin settings that outlive a session.
//!
//! Only the last search term is stored today. It is written by the background
//! worker and read once by the plugin thread when it loads.
//!
//! # Modules
//!
//! - `backend`: [`Storage`] trait shared by all backends
//! - `json`: JSON file backend with atomic writes
//! - `memory`: in-memory backend used when the data file is unavailable

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::Storage;
pub use json::JsonStorage;
pub use memory::MemoryStorage;
