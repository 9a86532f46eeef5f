//! Search term input box.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 2;

/// Draws the 3-line search box and returns the row after it.
///
/// The border switches to the active color while the term is being edited,
/// and a block cursor follows the term.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);
    let border = if search.is_editing {
        &theme.colors.search_bar_active
    } else {
        &theme.colors.search_bar_border
    };
    let margin = " ".repeat(SEARCH_BOX_MARGIN);

    position_cursor(row, 1);
    print!("{margin}{}┌{}┐{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    let cursor = if search.is_editing { "█" } else { "" };
    let text = format!(" Search: {}{cursor}", search.query);

    position_cursor(row + 1, 1);
    print!("{margin}{}│", Theme::fg(border));
    print!("{}{}", Theme::fg(&theme.colors.text_normal), fit(&text, inner_width));
    print!("{}│{}", Theme::fg(border), Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{}└{}┘{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    row + 3
}
