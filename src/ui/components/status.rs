//! Error line and loading indicator.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Draws the error message, if any, on `row`. Always consumes the row.
pub fn render_error_line(row: usize, message: Option<&str>, theme: &Theme) -> usize {
    if let Some(message) = message {
        position_cursor(row, 1);
        print!("{}{}  {message}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg), Theme::reset());
    }
    row + 1
}

/// Draws the loading line shown in place of the table.
pub fn render_loading(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}  Loading ...{}", Theme::fg(&theme.colors.loading_fg), Theme::reset());
    row + 1
}
