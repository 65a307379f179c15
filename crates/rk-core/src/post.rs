//! The post model: raw text plus a timestamp, with every other field
//! derived from the text on demand.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

use crate::activity::ActivityType;
use crate::category::Category;
use crate::types::Miles;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

// Digits and unit letters are ASCII only; `\s` still accepts Unicode spaces.
static DISTANCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+\.?[0-9]*)\s*(?i-u:(km|mi|miles?))").unwrap());

/// `created_at` format used by Twitter exports, e.g. `Sat Sep 29 19:40:05 +0000 2018`.
const TWITTER_TIME_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// A single social-media post about an exercise activity.
///
/// Immutable once constructed. Derived fields are recomputed from `text`
/// on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    text: String,
    time: Option<DateTime<Utc>>,
}

impl Post {
    /// Wraps raw text and a raw timestamp. Never fails: an unparseable
    /// timestamp is stored as `None`.
    pub fn new(text: impl Into<String>, created_at: &str) -> Self {
        Self {
            text: text.into(),
            time: parse_timestamp(created_at),
        }
    }

    /// The raw post body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// When the post was created, or `None` if the timestamp was invalid.
    pub const fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    pub fn category(&self) -> Category {
        Category::from_text(&self.text)
    }

    pub fn has_commentary(&self) -> bool {
        has_commentary(&self.text)
    }

    pub fn commentary_text(&self) -> String {
        commentary_text(&self.text)
    }

    pub fn activity_type(&self) -> ActivityType {
        ActivityType::from_text(&self.text, self.category())
    }

    pub fn distance_miles(&self) -> Miles {
        distance_miles(&self.text, self.category())
    }

    pub fn activity_link(&self) -> Option<&str> {
        activity_link(&self.text)
    }

    /// Case-insensitive search over the text and the commentary.
    ///
    /// A blank query matches every post.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.text.to_lowercase().contains(&query)
            || self.commentary_text().to_lowercase().contains(&query)
    }
}

/// Parses a raw post timestamp.
///
/// Accepts the Twitter export format, RFC 3339, RFC 2822, and bare
/// `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DateTime::parse_from_str(raw, TWITTER_TIME_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
}

/// Whether the text carries author-written commentary after the template.
///
/// Commentary follows a hyphen or a colon.
pub fn has_commentary(text: &str) -> bool {
    text.contains('-') || text.contains(':')
}

/// Extracts the author's commentary.
///
/// Takes everything after the first hyphen (or the first colon when there
/// is no hyphen), trims it, and drops any URLs.
pub fn commentary_text(text: &str) -> String {
    let rest = match text.split_once('-').or_else(|| text.split_once(':')) {
        Some((_, rest)) => rest,
        None => return String::new(),
    };

    URL_RE.replace_all(rest.trim(), "").trim().to_string()
}

/// Infers the distance of a completed event, normalized to miles.
pub fn distance_miles(text: &str, category: Category) -> Miles {
    if category != Category::CompletedEvent {
        return Miles::ZERO;
    }

    let Some(caps) = DISTANCE_RE.captures(text) else {
        return Miles::ZERO;
    };

    let value: f64 = caps[1].parse().unwrap_or(0.0);
    if caps[2].to_ascii_lowercase().starts_with("km") {
        Miles::from_km(value)
    } else {
        Miles::new(value)
    }
}

/// First `http(s)://` URL in the text.
pub fn activity_link(text: &str) -> Option<&str> {
    URL_RE.find(text).map(|m| m.as_str())
}
