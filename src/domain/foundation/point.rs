//! Points in the bounded trait plane `[-1, 1]²`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of every trait coordinate.
pub const UNIT_MIN: f64 = -1.0;

/// Upper bound of every trait coordinate.
pub const UNIT_MAX: f64 = 1.0;

/// Clamps a value into `[-1, 1]`. NaN collapses to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(UNIT_MIN, UNIT_MAX)
}

/// A location in the 2D trait plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinatePoint {
    pub x: f64,
    pub y: f64,
}

impl CoordinatePoint {
    /// The origin, where a respondent with no weighted answers lands.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point, clamping both coordinates into `[-1, 1]`.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
        }
    }

    /// Returns this point clamped into `[-1, 1]²`.
    pub fn clamped(&self) -> Self {
        Self::new(self.x, self.y)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &CoordinatePoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True if both coordinates differ from `other` by less than `epsilon`.
    pub fn is_within(&self, other: &CoordinatePoint, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl fmt::Display for CoordinatePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
