//! Activity type inference from post keywords.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::category::Category;
use crate::types::UnknownLabel;

/// Kind of exercise a completed-event post describes.
///
/// Variant order is the keyword priority order and is used to break ties
/// when ranking activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActivityType {
    Run,
    Walk,
    Bike,
    Hike,
    Swim,
    Workout,
    Other,
    Unknown,
}

/// Keyword groups checked in order against the lower-cased text.
///
/// `swam` is listed separately since it does not contain `swim`.
const KEYWORDS: &[(ActivityType, &[&str])] = &[
    (ActivityType::Run, &["run", "ran"]),
    (ActivityType::Walk, &["walk", "walked"]),
    (ActivityType::Bike, &["bike", "ride", "cycle"]),
    (ActivityType::Hike, &["hike"]),
    (ActivityType::Swim, &["swim", "swam"]),
    (ActivityType::Workout, &["workout", "fitness"]),
];

impl ActivityType {
    /// Every activity type, in priority order.
    pub const ALL: [Self; 8] = [
        Self::Run,
        Self::Walk,
        Self::Bike,
        Self::Hike,
        Self::Swim,
        Self::Workout,
        Self::Other,
        Self::Unknown,
    ];

    /// Infers the activity type of a post.
    ///
    /// Only completed events have an activity; everything else is `Unknown`.
    /// Matching is substring-based, so "running" counts as a run.
    pub fn from_text(text: &str, category: Category) -> Self {
        if category != Category::CompletedEvent {
            return Self::Unknown;
        }

        let text = text.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| text.contains(w)))
            .map_or(Self::Other, |(activity, _)| *activity)
    }

    /// String representation used in output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Run => "run",
            Self::Walk => "walk",
            Self::Bike => "bike",
            Self::Hike => "hike",
            Self::Swim => "swim",
            Self::Workout => "workout",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }

    /// Whether an activity was inferred.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownLabel::new("activity type", s))
    }
}

impl Serialize for ActivityType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ActivityType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
