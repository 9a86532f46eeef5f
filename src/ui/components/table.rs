//! Story table.
//!
//! Columns are laid out left to right using the widths carried by the view
//! model's column headers. The title column absorbs any extra width.

use crate::ui::helpers::{fit, fit_right, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnHeader, DisplayItem};

/// Width of the title column once the fixed columns are placed.
fn title_width(columns: &[ColumnHeader], cols: usize) -> usize {
    let fixed: usize = columns.iter().skip(1).map(|c| c.width).sum();
    let preferred = columns.first().map_or(0, |c| c.width);
    cols.saturating_sub(fixed + 2).max(preferred.min(cols))
}

/// Draws the column headings with the sort marker and returns the next row.
pub fn render_table_headers(row: usize, columns: &[ColumnHeader], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}  ", Theme::bold(), Theme::fg(&theme.colors.text_dim));

    for (i, column) in columns.iter().enumerate() {
        let width = if i == 0 { title_width(columns, cols) } else { column.width };
        let label = match column.sort_marker {
            Some(marker) => {
                print!("{}", Theme::fg(&theme.colors.sort_marker_fg));
                format!("{} {marker}", column.label)
            }
            None => {
                print!("{}", Theme::fg(&theme.colors.text_dim));
                column.label.clone()
            }
        };
        print!("{}", fit(&label, width));
    }

    print!("{}", Theme::reset());
    row + 1
}

/// Draws every row and returns the row after the last one.
pub fn render_table_rows(
    row: usize,
    items: &[DisplayItem],
    columns: &[ColumnHeader],
    theme: &Theme,
    cols: usize,
) -> usize {
    items
        .iter()
        .fold(row, |current, item| render_table_row(current, item, columns, theme, cols))
}

fn render_table_row(row: usize, item: &DisplayItem, columns: &[ColumnHeader], theme: &Theme, cols: usize) -> usize {
    let width = |i: usize| columns.get(i).map_or(0, |c| c.width);

    let line = format!(
        "  {}{}{}{}{}",
        fit(&item.title, title_width(columns, cols)),
        fit(&item.author, width(1)),
        fit(&item.age, width(2)),
        fit_right(&item.comments, width(3).saturating_sub(2)),
        fit_right(&item.points, width(4)),
    );

    position_cursor(row, 1);
    if item.is_selected {
        print!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{}", fit(&line, cols));
    print!("{}", Theme::reset());
    row + 1
}
