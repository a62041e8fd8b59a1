//! Likert answer value object (1 to 5 scale, 3 = neutral).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A five-point Likert answer: 1 (strongly disagree) to 5 (strongly agree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct LikertValue(u8);

impl LikertValue {
    /// Lowest point on the scale.
    pub const MIN: Self = Self(1);

    /// Neutral midpoint.
    pub const NEUTRAL: Self = Self(3);

    /// Highest point on the scale.
    pub const MAX: Self = Self(5);

    /// Creates a LikertValue, clamping into 1..=5.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(1, 5) as u8)
    }

    /// Creates a LikertValue, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::out_of_range(
                "likert",
                1,
                5,
                value.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the raw scale value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Maps the answer onto `[-1, 1]`: 1 → -1, 3 → 0, 5 → 1.
    pub fn normalized(&self) -> f64 {
        ((f64::from(self.0) - 3.0) / 2.0).clamp(-1.0, 1.0)
    }
}

impl Default for LikertValue {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<i64> for LikertValue {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<LikertValue> for u8 {
    fn from(value: LikertValue) -> Self {
        value.0
    }
}

impl fmt::Display for LikertValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
