//! Input mode state for the application.
//!
//! The plugin is either in **Normal** mode, where single keys trigger commands
//! (dismiss, load more, sort, reselect), or in **Search** mode, where keys edit
//! the search term.

/// Current input handling mode.
///
/// Controls which keybindings are active and how the search bar and footer
/// are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and command keys.
    ///
    /// j/k (navigate), / (edit search), x (dismiss), m (more), t/a/c/p (sort),
    /// 1-9 (recent search), q (quit).
    #[default]
    Normal,

    /// Editing the search term.
    ///
    /// Characters and backspace edit the term, Enter submits, Esc returns to
    /// Normal mode without searching.
    Search,
}
