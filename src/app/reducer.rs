//! Result state and the reducer that folds fetch and removal actions into it.
//!
//! [`reduce`] is the only place the result list changes. It takes the current
//! state by reference and always builds a new value, so callers can detect
//! changes by comparing the old and new states.
//!
//! # Transitions
//!
//! | Action           | Effect                                                         |
//! |------------------|----------------------------------------------------------------|
//! | `FetchStarted`   | loading on, error off; items and page untouched                |
//! | `FetchSucceeded` | loading and error off; page 0 replaces items, later pages append; page recorded |
//! | `FetchFailed`    | loading off, error on; items and page untouched                |
//! | `ItemRemoved`    | drops every item sharing the story's identity                  |

use crate::domain::Story;

/// Snapshot of the fetched result list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultState {
    /// Stories in merge order (pages appended as they arrive).
    pub items: Vec<Story>,
    /// Page number of the last page merged in.
    pub page: u32,
    /// A fetch is outstanding.
    pub is_loading: bool,
    /// The most recent fetch failed.
    pub is_error: bool,
}

/// The closed set of transitions accepted by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    /// A fetch for `page` was issued.
    FetchStarted {
        /// Page being requested.
        page: u32,
    },
    /// A fetch completed with a page of results.
    FetchSucceeded {
        /// Stories on the fetched page.
        items: Vec<Story>,
        /// Page number reported by the response.
        page: u32,
    },
    /// A fetch failed in transport or decoding.
    FetchFailed,
    /// The user dismissed a story.
    ItemRemoved {
        /// Story to drop, matched by identity.
        story: Story,
    },
}

/// Computes the next result state.
///
/// # Examples
///
/// ```
/// use hackerstories::app::reducer::{reduce, ResultState, StoriesAction};
///
/// let state = ResultState::default();
/// let next = reduce(&state, StoriesAction::FetchStarted { page: 0 });
/// assert!(next.is_loading);
/// assert!(!state.is_loading);
/// ```
#[must_use]
pub fn reduce(state: &ResultState, action: StoriesAction) -> ResultState {
    match action {
        StoriesAction::FetchStarted { .. } => ResultState {
            is_loading: true,
            is_error: false,
            ..state.clone()
        },
        StoriesAction::FetchSucceeded { items, page } => {
            let items = if page == 0 {
                items
            } else {
                let mut merged = Vec::with_capacity(state.items.len() + items.len());
                merged.extend(state.items.iter().cloned());
                merged.extend(items);
                merged
            };

            ResultState {
                items,
                page,
                is_loading: false,
                is_error: false,
            }
        }
        StoriesAction::FetchFailed => ResultState {
            is_loading: false,
            is_error: true,
            ..state.clone()
        },
        StoriesAction::ItemRemoved { story } => ResultState {
            items: state
                .items
                .iter()
                .filter(|item| !item.same_identity(&story))
                .cloned()
                .collect(),
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story_one() -> Story {
        let mut story = Story::new("0", "React");
        story.url = Some("https://reactjs.org/".into());
        story.author = "Jordan Walke".into();
        story.num_comments = 3;
        story.points = 4;
        story
    }

    fn story_two() -> Story {
        let mut story = Story::new(1_i64, "Redux");
        story.url = Some("https://redux.js.org/".into());
        story.author = "Dan Abramov, Andrew Clark".into();
        story.num_comments = 2;
        story.points = 5;
        story
    }

    fn loaded() -> ResultState {
        ResultState {
            items: vec![story_one(), story_two()],
            page: 0,
            is_loading: false,
            is_error: false,
        }
    }

    #[test]
    fn removes_a_story_from_all_stories() {
        let state = loaded();

        let next = reduce(&state, StoriesAction::ItemRemoved { story: story_one() });

        assert_eq!(
            next,
            ResultState {
                items: vec![story_two()],
                ..loaded()
            }
        );
        assert_eq!(state, loaded());
    }

    #[test]
    fn removing_an_absent_story_changes_nothing() {
        let state = loaded();
        let stranger = Story::new("999", "Not here");

        assert_eq!(reduce(&state, StoriesAction::ItemRemoved { story: stranger }), state);
    }

    #[test]
    fn removal_uses_strict_identity() {
        let state = loaded();
        // "1" (text) is not the same identity as 1 (number).
        let lookalike = Story::new("1", "Redux");

        assert_eq!(reduce(&state, StoriesAction::ItemRemoved { story: lookalike }), state);
    }

    #[test]
    fn fetch_started_keeps_items_and_clears_error() {
        let state = ResultState {
            is_error: true,
            page: 2,
            ..loaded()
        };

        let next = reduce(&state, StoriesAction::FetchStarted { page: 3 });

        assert!(next.is_loading);
        assert!(!next.is_error);
        assert_eq!(next.items, state.items);
        assert_eq!(next.page, 2);
    }

    #[test]
    fn first_page_replaces_and_later_pages_append() {
        let fresh = reduce(
            &loaded(),
            StoriesAction::FetchSucceeded {
                items: vec![story_two()],
                page: 0,
            },
        );
        assert_eq!(fresh.items, vec![story_two()]);
        assert_eq!(fresh.page, 0);

        let appended = reduce(
            &fresh,
            StoriesAction::FetchSucceeded {
                items: vec![story_one()],
                page: 1,
            },
        );
        assert_eq!(appended.items, vec![story_two(), story_one()]);
        assert_eq!(appended.page, 1);
        assert!(!appended.is_loading);
        assert!(!appended.is_error);
    }

    #[test]
    fn failure_keeps_items_and_page() {
        let state = ResultState {
            is_loading: true,
            page: 4,
            ..loaded()
        };

        let next = reduce(&state, StoriesAction::FetchFailed);

        assert!(!next.is_loading);
        assert!(next.is_error);
        assert_eq!(next.items, state.items);
        assert_eq!(next.page, 4);
    }

    #[test]
    fn success_after_failure_clears_error() {
        let failed = reduce(&loaded(), StoriesAction::FetchFailed);
        let next = reduce(
            &failed,
            StoriesAction::FetchSucceeded {
                items: vec![],
                page: 0,
            },
        );

        assert!(!next.is_error);
        assert!(next.items.is_empty());
    }
}
