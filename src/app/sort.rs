//! Column sorting for the result table.
//!
//! Sorting only affects what is displayed. The underlying [`ResultState`]
//! keeps stories in merge order.
//!
//! [`ResultState`]: crate::app::reducer::ResultState

use crate::domain::Story;

/// Column the table is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Merge order, as returned by the API.
    #[default]
    None,
    Title,
    Author,
    Comments,
    Points,
}

impl SortKey {
    /// Whether this key naturally sorts largest first.
    const fn descending_by_default(self) -> bool {
        matches!(self, Self::Comments | Self::Points)
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub is_reverse: bool,
}

impl SortState {
    /// Selects `key`. Selecting the active key again flips the direction;
    /// selecting any other key resets it.
    pub fn toggle(&mut self, key: SortKey) {
        self.is_reverse = key == self.key && !self.is_reverse;
        self.key = key;
    }

    /// Whether the displayed order is ascending for the active key.
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        self.key.descending_by_default() == self.is_reverse
    }

    /// Returns `stories` in display order.
    ///
    /// Ties keep their merge order, since both sorts used here are stable.
    #[must_use]
    pub fn apply<'a>(&self, stories: &'a [Story]) -> Vec<&'a Story> {
        let mut sorted: Vec<&Story> = stories.iter().collect();

        match self.key {
            SortKey::None => {}
            SortKey::Title => sorted.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::Author => sorted.sort_by(|a, b| a.author.cmp(&b.author)),
            SortKey::Comments => {
                sorted.sort_by_key(|s| s.num_comments);
                sorted.reverse();
            }
            SortKey::Points => {
                sorted.sort_by_key(|s| s.points);
                sorted.reverse();
            }
        }

        if self.is_reverse {
            sorted.reverse();
        }

        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str, title: &str, author: &str, comments: u64, points: i64) -> Story {
        let mut story = Story::new(id, title);
        story.author = author.into();
        story.num_comments = comments;
        story.points = points;
        story
    }

    fn stories() -> Vec<Story> {
        vec![
            story("1", "Rust 2.0", "carol", 10, 50),
            story("2", "Async woes", "alice", 30, 5),
            story("3", "Zig vs C", "bob", 20, 100),
        ]
    }

    fn titles(sorted: &[&Story]) -> Vec<String> {
        sorted.iter().map(|s| s.title.clone()).collect()
    }

    #[test]
    fn none_keeps_merge_order() {
        let items = stories();
        let sorted = SortState::default().apply(&items);
        assert_eq!(titles(&sorted), vec!["Rust 2.0", "Async woes", "Zig vs C"]);
    }

    #[test]
    fn title_and_author_sort_ascending() {
        let items = stories();

        let by_title = SortState { key: SortKey::Title, is_reverse: false };
        assert_eq!(titles(&by_title.apply(&items)), vec!["Async woes", "Rust 2.0", "Zig vs C"]);

        let by_author = SortState { key: SortKey::Author, is_reverse: false };
        assert_eq!(titles(&by_author.apply(&items)), vec!["Async woes", "Zig vs C", "Rust 2.0"]);
    }

    #[test]
    fn comments_and_points_sort_descending() {
        let items = stories();

        let by_comments = SortState { key: SortKey::Comments, is_reverse: false };
        assert_eq!(titles(&by_comments.apply(&items)), vec!["Async woes", "Zig vs C", "Rust 2.0"]);

        let by_points = SortState { key: SortKey::Points, is_reverse: false };
        assert_eq!(titles(&by_points.apply(&items)), vec!["Zig vs C", "Rust 2.0", "Async woes"]);
    }

    #[test]
    fn toggling_same_key_reverses_and_other_key_resets() {
        let mut sort = SortState::default();

        sort.toggle(SortKey::Points);
        assert_eq!(sort, SortState { key: SortKey::Points, is_reverse: false });
        assert!(!sort.is_ascending());

        sort.toggle(SortKey::Points);
        assert!(sort.is_reverse);
        assert!(sort.is_ascending());

        sort.toggle(SortKey::Points);
        assert!(!sort.is_reverse);

        sort.toggle(SortKey::Points);
        sort.toggle(SortKey::Title);
        assert_eq!(sort, SortState { key: SortKey::Title, is_reverse: false });
    }

    #[test]
    fn reversed_points_are_ascending() {
        let items = stories();
        let sort = SortState { key: SortKey::Points, is_reverse: true };
        assert_eq!(titles(&sort.apply(&items)), vec!["Async woes", "Rust 2.0", "Zig vs C"]);
    }

    #[test]
    fn sorting_leaves_input_untouched() {
        let items = stories();
        let before = items.clone();
        let _ = SortState { key: SortKey::Title, is_reverse: true }.apply(&items);
        assert_eq!(items, before);
    }
}
