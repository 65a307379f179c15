//! Post category as the single source of truth for category strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::UnknownLabel;

/// Coarse classification of what a post is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    CompletedEvent,
    LiveEvent,
    Achievement,
    Miscellaneous,
}

impl Category {
    /// Every category, in decision order.
    pub const ALL: [Self; 4] = [
        Self::CompletedEvent,
        Self::LiveEvent,
        Self::Achievement,
        Self::Miscellaneous,
    ];

    /// Classifies post text. The first matching rule wins.
    pub fn from_text(text: &str) -> Self {
        if text.starts_with("Just completed") || text.starts_with("Just posted") {
            Self::CompletedEvent
        } else if text.contains("right now") || text.starts_with("Watch my live") {
            Self::LiveEvent
        } else if text.contains("Achievement") || text.contains("achievement") {
            Self::Achievement
        } else {
            Self::Miscellaneous
        }
    }

    /// String representation used in output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CompletedEvent => "completed_event",
            Self::LiveEvent => "live_event",
            Self::Achievement => "achievement",
            Self::Miscellaneous => "miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownLabel::new("category", s))
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
