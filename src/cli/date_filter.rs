//! `--modified` filter parsing.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Lower bound on a note's `updatedAt`, parsed from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFilter {
    threshold: DateTime<Utc>,
}

impl DateFilter {
    /// Parses a filter relative to `now`.
    ///
    /// Accepts:
    /// - Relative: "7d", "30d" (days before `now`)
    /// - Absolute: "2024-01-15" (midnight UTC of that day)
    pub fn parse(s: &str, now: DateTime<Utc>) -> Result<Self, String> {
        let s = s.trim();

        if let Some(days_str) = s.strip_suffix('d') {
            let days: i64 = days_str
                .parse()
                .map_err(|_| format!("invalid relative date: {}", s))?;
            if days < 0 {
                return Err(format!("days must be non-negative: {}", s));
            }
            return Ok(Self {
                threshold: now - Duration::days(days),
            });
        }

        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| format!("invalid date format (expected YYYY-MM-DD or Nd): {}", s))?;

        Ok(Self {
            threshold: date.and_time(NaiveTime::MIN).and_utc(),
        })
    }

    /// Returns the earliest timestamp that passes the filter.
    pub fn threshold(&self) -> DateTime<Utc> {
        self.threshold
    }
}
