//! Normalized tag type for labelling profile notes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A normalized tag attached to a profile note.
///
/// Tags are flat labels used to filter notes. They are normalized on
/// construction, which makes `Recruiter`, ` recruiter ` and `RECRUITER`
/// the same tag.
///
/// # Normalization
/// - Surrounding whitespace is trimmed
/// - Converted to lowercase
/// - Every run of inner whitespace becomes a single `-`
///
/// # Examples
///
/// ```
/// use linknotes::domain::Tag;
///
/// let tag = Tag::new("  Old Colleague  ").unwrap();
/// assert_eq!(tag.as_str(), "old-colleague");
///
/// // Equality is on the normalized form
/// assert_eq!(tag, Tag::new("OLD   colleague").unwrap());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String); // Always stored normalized

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new Tag from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the tag is empty or whitespace-only.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let normalized = s
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");

        if normalized.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized tag value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
