//! Score value object (closeness to the ideal best, 0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A TOPSIS performance score between 0.0 and 1.0 inclusive.
///
/// 1.0 means the alternative coincides with the ideal best point,
/// 0.0 with the ideal worst.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Zero closeness.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new Score, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
