//! Empty state message.

use crate::ui::helpers::{center_offset, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Draws the two-line centered message starting at `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_padding = center_offset(empty.message.chars().count(), cols);
    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}{}", " ".repeat(msg_padding), empty.message);
    print!("{}", Theme::reset());

    let sub_padding = center_offset(empty.subtitle.chars().count(), cols);
    position_cursor(row + 2, 1);
    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print!("{}{}", " ".repeat(sub_padding), empty.subtitle);
    print!("{}", Theme::reset());

    row + 3
}
