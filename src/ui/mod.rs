//! Terminal user interface.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI output
//! ```
//!
//! - [`viewmodel`]: display-ready data computed from state
//! - [`renderer`]: entry point called from the plugin's `render`
//! - [`components`]: one renderer per screen region
//! - [`helpers`]: cursor positioning and column fitting
//! - [`theme`]: color palettes and escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ColumnHeader, DisplayItem, EmptyState, FooterInfo, HeaderInfo, RecentSearch, SearchBarInfo, UIViewModel,
};
