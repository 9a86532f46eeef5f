//! UI components, one per screen region.
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search box, 3 lines]
//! [Recent searches]
//! [Error line]
//! [Column headings | Loading ... | empty state]
//! [Table rows]
//! ...
//! [Selected story link]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod recent;
mod search;
mod status;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::{render_footer, render_link};
use header::render_header;
use recent::render_recent_searches;
use search::render_search_bar;
use status::{render_error_line, render_loading};
use table::{render_table_headers, render_table_rows};

/// Draws a horizontal rule and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
    row + 1
}

/// Draws a full frame for `vm`.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut row = 2;

    row = render_header(row, &vm.header, theme, cols);
    row = render_border(row, &theme.colors.border, cols);
    row = render_search_bar(row, &vm.search_bar, theme, cols);
    row = render_recent_searches(row, &vm.recent_searches, theme, cols);
    row = render_error_line(row, vm.error_message.as_deref(), theme);

    if vm.loading {
        render_loading(row, theme);
    } else if let Some(empty) = &vm.empty_state {
        render_empty_state(row, empty, theme, cols);
    } else {
        row = render_table_headers(row, &vm.columns, theme, cols);
        render_table_rows(row, &vm.display_items, &vm.columns, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);

    if let Some(url) = vm.display_items.get(vm.selected_index).and_then(|item| item.url.as_deref()) {
        render_link(border_row.saturating_sub(1), url, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
