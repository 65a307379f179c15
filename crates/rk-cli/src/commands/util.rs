//! Shared utilities for CLI commands.

use std::fmt::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rk_core::{Miles, Post};

use crate::Config;
use crate::config::DEFAULT_DATE_FORMAT;

/// Shown in place of a date when a post's timestamp could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Loads posts from the configured data file.
///
/// An empty file is not an error; a notice is printed to stderr.
pub fn load_posts(config: &Config) -> Result<Vec<Post>> {
    let posts = rk_core::load_posts(&config.data_path)
        .with_context(|| format!("failed to load posts from {}", config.data_path.display()))?;
    if posts.is_empty() {
        tracing::warn!(path = ?config.data_path, "no posts returned");
        eprintln!("No posts returned from {}.", config.data_path.display());
    }
    Ok(posts)
}

/// Formats a date with a user-supplied `strftime` format.
///
/// Falls back to the default format if `format` is not a valid format string.
pub fn format_date(time: DateTime<Utc>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(format)).is_err() {
        tracing::debug!(format, "invalid date format, using default");
        return time.format(DEFAULT_DATE_FORMAT).to_string();
    }
    out
}

/// Formats a post timestamp, marking the invalid sentinel.
pub fn format_post_date(time: Option<DateTime<Utc>>, format: &str) -> String {
    time.map_or_else(|| INVALID_DATE.to_string(), |t| format_date(t, format))
}

/// Formats a distance, or `N/A` when there is none.
pub fn format_distance(miles: Miles) -> String {
    if miles.is_zero() {
        "N/A".to_string()
    } else {
        format!("{miles} mi")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    fn sample_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2018, 9, 2, 19, 40, 5).unwrap()
    }

    #[test]
    fn formats_us_dates_by_default() {
        assert_eq!(format_date(sample_time(), DEFAULT_DATE_FORMAT), "9/2/2018");
        assert_eq!(format_date(sample_time(), "%Y-%m-%d"), "2018-09-02");
    }

    #[test]
    fn invalid_format_falls_back() {
        assert_eq!(format_date(sample_time(), "%Q"), "9/2/2018");
    }

    #[test]
    fn invalid_timestamp_is_marked() {
        assert_eq!(format_post_date(None, DEFAULT_DATE_FORMAT), INVALID_DATE);
    }

    #[test]
    fn distances() {
        assert_eq!(format_distance(Miles::ZERO), "N/A");
        assert_eq!(format_distance(Miles::new(3.1)), "3.10 mi");
    }
}
