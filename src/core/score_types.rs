//! Type-safe 0-100 score scale used across the engine.
//!
//! Completeness percentages, variant scores, shopping-option similarity,
//! and swap compatibility all share the same integer 0-100 scale. Encoding
//! the scale in a newtype keeps raw integers from leaking across API
//! boundaries and makes out-of-range values unrepresentable.
//!
//! # Examples
//!
//! ```rust
//! use stylemap::core::Score;
//!
//! // Construction clamps to the valid range
//! let score = Score::new(85);
//! assert_eq!(score.value(), 85);
//! assert_eq!(Score::new(250).value(), 100);
//!
//! // Ratios in [0, 1] round to the nearest point
//! assert_eq!(Score::from_ratio(0.555).value(), 56);
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Score on the integer 0-100 scale.
///
/// Construction clamps; deserialization accepts any JSON number and clamps
/// the same way, so malformed fixture data cannot smuggle an out-of-range
/// score into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const ZERO: Score = Score(0);
    pub const MAX: Score = Score(100);

    /// Create a score, clamping to [0, 100].
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Create a score from a float, rounding to the nearest point.
    ///
    /// Non-finite input maps to zero.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0).round() as u8)
    }

    /// Create a score from a ratio in [0, 1].
    ///
    /// ```rust
    /// # use stylemap::core::Score;
    /// assert_eq!(Score::from_ratio(5.0 / 9.0).value(), 56);
    /// ```
    pub fn from_ratio(ratio: f64) -> Self {
        Self::from_f64(ratio * 100.0)
    }

    /// Get the raw score value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Ok(Score::from_f64(raw))
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
