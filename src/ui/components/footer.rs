//! Footer with keybinding hints.

use crate::ui::helpers::{center_offset, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Draws the centered, dimmed keybinding line.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let text_len = footer.keybindings.chars().count().min(cols);
    let padding = center_offset(text_len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{}", fit(&footer.keybindings, cols.saturating_sub(padding)));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws the selected story's link, dimmed, on the line above the footer.
pub fn render_link(row: usize, url: &str, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}{}  {}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim), fit(url, cols.saturating_sub(2)), Theme::reset());
}
