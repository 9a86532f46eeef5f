//! Story domain model.
//!
//! A [`Story`] is one hit returned by the Hacker News search index. Stories are
//! immutable once fetched and are identified by their [`StoryId`].

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Identity of a story in the search index.
///
/// The index reports `objectID` as a string, but hand-built fixtures and older
/// payloads use integers. Equality is strict: `Text("0")` and `Number(0)` are
/// different stories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoryId {
    /// String identifier, as sent by the live API.
    Text(String),
    /// Numeric identifier.
    Number(i64),
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for StoryId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for StoryId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// A single search hit.
///
/// Field names follow the wire format. Nullable fields from the index decode
/// to their defaults so that a sparse hit never fails the whole page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(rename = "objectID")]
    pub object_id: StoryId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_comments: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: i64,
    /// Creation time in Unix seconds.
    #[serde(default)]
    pub created_at_i: Option<i64>,
}

impl Story {
    /// Creates a story with the given identity and title and zeroed counters.
    ///
    /// # Examples
    ///
    /// ```
    /// use hackerstories::domain::{Story, StoryId};
    ///
    /// let story = Story::new("42", "Show HN: a thing");
    /// assert_eq!(story.object_id, StoryId::Text("42".to_string()));
    /// assert_eq!(story.num_comments, 0);
    /// ```
    #[must_use]
    pub fn new(object_id: impl Into<StoryId>, title: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            title: title.into(),
            url: None,
            author: String::new(),
            num_comments: 0,
            points: 0,
            created_at_i: None,
        }
    }

    /// Returns `true` if both stories share the same identity.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        self.object_id == other.object_id
    }

    /// Returns a short human-readable age relative to `now` (Unix seconds).
    ///
    /// - Unknown creation time: empty string
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - Otherwise: "Xd ago"
    #[must_use]
    pub fn age(&self, now: i64) -> String {
        let Some(created) = self.created_at_i else {
            return String::new();
        };
        let diff = now - created;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        }
    }
}

/// Sums `num_comments` across all stories.
#[must_use]
pub fn sum_comments(stories: &[Story]) -> u64 {
    stories.iter().map(|s| s.num_comments).sum()
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_string_and_numeric_ids_without_conflating_them() {
        let text: Story = serde_json::from_str(r#"{"objectID":"0","title":"React"}"#).unwrap();
        let number: Story = serde_json::from_str(r#"{"objectID":0,"title":"React"}"#).unwrap();

        assert_eq!(text.object_id, StoryId::Text("0".into()));
        assert_eq!(number.object_id, StoryId::Number(0));
        assert!(!text.same_identity(&number));
    }

    #[test]
    fn null_fields_decode_to_defaults() {
        let story: Story = serde_json::from_str(
            r#"{"objectID":"7","title":null,"url":null,"author":"pg","num_comments":null,"points":null}"#,
        )
        .unwrap();

        assert_eq!(story.title, "");
        assert_eq!(story.url, None);
        assert_eq!(story.num_comments, 0);
        assert_eq!(story.points, 0);
        assert_eq!(story.created_at_i, None);
    }

    #[test]
    fn age_buckets() {
        let mut story = Story::new("1", "t");
        assert_eq!(story.age(1_000), "");

        story.created_at_i = Some(1_000);
        assert_eq!(story.age(1_030), "just now");
        assert_eq!(story.age(1_000 + 5 * 60), "5m ago");
        assert_eq!(story.age(1_000 + 3 * 3600), "3h ago");
        assert_eq!(story.age(1_000 + 7 * 86400), "7d ago");
    }

    #[test]
    fn sums_comments() {
        let mut a = Story::new("a", "A");
        a.num_comments = 3;
        let mut b = Story::new("b", "B");
        b.num_comments = 2;

        assert_eq!(sum_comments(&[a, b]), 5);
        assert_eq!(sum_comments(&[]), 0);
    }
}
