//! Recent searches row.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::RecentSearch;

const LABEL: &str = "  Recent:";

fn chip(entry: &RecentSearch) -> String {
    format!("  [{}] {}", entry.index, entry.term)
}

/// Index of the first entry that still fits when the newest entries are kept.
fn first_fitting(recent: &[RecentSearch], cols: usize) -> usize {
    let mut used = LABEL.len();
    let mut start = recent.len();
    for (i, entry) in recent.iter().enumerate().rev() {
        used += chip(entry).chars().count();
        if used > cols {
            break;
        }
        start = i;
    }
    start
}

/// Draws `Recent: [1] React  [2] rust ...` on one line.
///
/// When the row is too narrow the oldest terms are dropped, so the newest
/// search is always visible.
pub fn render_recent_searches(row: usize, recent: &[RecentSearch], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{LABEL}", Theme::fg(&theme.colors.text_dim));

    print!("{}", Theme::fg(&theme.colors.recent_search_fg));
    for entry in &recent[first_fitting(recent, cols)..] {
        print!("{}", chip(entry));
    }

    print!("{}", Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(terms: &[&str]) -> Vec<RecentSearch> {
        terms
            .iter()
            .enumerate()
            .map(|(i, term)| RecentSearch {
                index: i + 1,
                term: (*term).to_string(),
            })
            .collect()
    }

    #[test]
    fn everything_fits_on_a_wide_row() {
        assert_eq!(first_fitting(&entries(&["React", "rust", "zellij"]), 120), 0);
    }

    #[test]
    fn narrow_row_keeps_the_newest_terms() {
        let recent = entries(&["React", "rust", "zellij"]);

        // label (9) + "  [3] zellij" (12) + "  [2] rust" (10)
        assert_eq!(first_fitting(&recent, 31), 1);
        assert_eq!(first_fitting(&recent, 21), 2);
        assert_eq!(first_fitting(&recent, 5), 3);
    }
}
