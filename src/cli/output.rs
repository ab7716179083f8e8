//! Output format types for CLI commands.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A tag with optional count.
#[derive(Debug, Serialize)]
pub struct TagListing {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// Formats how long ago `then` was, relative to `now`.
///
/// Uses the largest whole unit: `2mo ago`, `1w ago`, `3d ago`, `5h ago`,
/// `12m ago`, or `just now` under a minute. Months are 30 days. Timestamps
/// in the future read as `just now`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if days >= 30 {
        format!("{}mo ago", days / 30)
    } else if days >= 7 {
        format!("{}w ago", days / 7)
    } else if days >= 1 {
        format!("{}d ago", days)
    } else if hours >= 1 {
        format!("{}h ago", hours)
    } else if minutes >= 1 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn ago(d: Duration) -> String {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        time_ago(now - d, now)
    }

    #[test]
    fn under_a_minute_is_just_now() {
        assert_eq!(ago(Duration::seconds(0)), "just now");
        assert_eq!(ago(Duration::seconds(59)), "just now");
    }

    #[test]
    fn picks_largest_whole_unit() {
        assert_eq!(ago(Duration::minutes(5)), "5m ago");
        assert_eq!(ago(Duration::minutes(59)), "59m ago");
        assert_eq!(ago(Duration::hours(3)), "3h ago");
        assert_eq!(ago(Duration::days(2)), "2d ago");
        assert_eq!(ago(Duration::days(13)), "1w ago");
        assert_eq!(ago(Duration::days(65)), "2mo ago");
    }

    #[test]
    fn future_timestamps_are_just_now() {
        assert_eq!(ago(Duration::minutes(-10)), "just now");
    }

    #[test]
    fn tag_listing_omits_missing_count() {
        let listing = TagListing {
            name: "recruiter".to_string(),
            count: None,
        };
        assert_eq!(
            serde_json::to_string(&listing).unwrap(),
            r#"{"name":"recruiter"}"#
        );
    }
}
