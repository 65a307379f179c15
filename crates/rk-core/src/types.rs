//! Core value types shared by the classifier and the aggregations.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a label string names no known variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownLabel {
    /// What was being parsed (e.g. "category").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownLabel {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Miles per kilometer.
pub const KM_TO_MILES: f64 = 0.621_371;

/// A non-negative distance in miles, rounded to two decimal places.
///
/// Construction never fails: NaN, infinite, and negative inputs become zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Miles(f64);

impl Miles {
    /// Zero distance.
    pub const ZERO: Self = Self(0.0);

    /// Creates a distance, rounding half away from zero to two decimals.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self::ZERO;
        }
        let rounded = (value * 100.0).round() / 100.0;
        if rounded.is_finite() {
            Self(rounded)
        } else {
            Self::ZERO
        }
    }

    /// Converts kilometers to miles.
    #[must_use]
    pub fn from_km(km: f64) -> Self {
        Self::new(km * KM_TO_MILES)
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether the distance is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 <= 0.0
    }
}

impl fmt::Display for Miles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Miles> for f64 {
    fn from(m: Miles) -> Self {
        m.0
    }
}

impl Serialize for Miles {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Miles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Self::new(value))
    }
}
