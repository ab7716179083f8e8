//! Profile identifier extracted from LinkedIn profile URLs.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static PROFILE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"linkedin\.com/in/([^/?#]+)").expect("valid profile pattern"));

/// The path segment that uniquely names a LinkedIn profile.
///
/// For `https://www.linkedin.com/in/jane-doe-42/?trk=x` the identifier is
/// `jane-doe-42`. It is used verbatim to derive storage keys, so it never
/// contains `/`, `?`, `#` or whitespace.
///
/// # Examples
///
/// ```
/// use linknotes::domain::{ProfileId, extract_profile_id};
///
/// let id = extract_profile_id("https://www.linkedin.com/in/alice/").unwrap();
/// assert_eq!(id.as_str(), "alice");
///
/// // Bare identifiers and URLs both resolve
/// assert_eq!(ProfileId::resolve("alice").unwrap(), id);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProfileId(String);

/// Error returned when parsing an invalid profile identifier.
#[derive(Debug, Clone)]
pub struct ParseProfileIdError(String);

impl fmt::Display for ParseProfileIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseProfileIdError {}

/// Extracts the profile identifier from a LinkedIn profile URL.
///
/// Returns the segment following `linkedin.com/in/` up to the next `/`, `?`
/// or `#`, or `None` when the URL is not a profile URL.
pub fn extract_profile_id(url: &str) -> Option<ProfileId> {
    PROFILE_URL_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .and_then(|m| ProfileId::new(m.as_str()).ok())
}

impl ProfileId {
    /// Creates a ProfileId from a bare identifier.
    ///
    /// # Errors
    ///
    /// Returns `ParseProfileIdError` if the identifier is empty or contains
    /// `/`, `?`, `#` or whitespace.
    pub fn new(s: &str) -> Result<Self, ParseProfileIdError> {
        if s.is_empty() {
            return Err(ParseProfileIdError(
                "profile id cannot be empty".to_string(),
            ));
        }

        if s
            .chars()
            .any(|c| c == '/' || c == '?' || c == '#' || c.is_whitespace())
        {
            return Err(ParseProfileIdError(format!(
                "invalid profile id '{}': must not contain '/', '?', '#' or whitespace",
                s
            )));
        }

        Ok(Self(s.to_string()))
    }

    /// Resolves user input that is either a profile URL or a bare identifier.
    pub fn resolve(input: &str) -> Result<Self, ParseProfileIdError> {
        let input = input.trim();
        if input.contains("/in/") {
            return extract_profile_id(input).ok_or_else(|| {
                ParseProfileIdError(format!("not a LinkedIn profile URL: {}", input))
            });
        }
        Self::new(input)
    }

    /// Returns the canonical profile URL for this identifier.
    pub fn canonical_url(&self) -> String {
        format!("https://www.linkedin.com/in/{}/", self.0)
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProfileId(\"{}\")", self.0)
    }
}

impl FromStr for ProfileId {
    type Err = ParseProfileIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ProfileId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProfileId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
