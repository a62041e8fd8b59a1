//! Bipolar trait axes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AxisKey;

/// One bipolar trait dimension, e.g. "assertive ↔ cautious".
///
/// The `id` is the axis key referenced by question weight maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub id: AxisKey,
    pub name: String,
    pub positive_name: String,
    pub negative_name: String,
}

impl Axis {
    /// Creates a new axis.
    pub fn new(
        id: impl Into<AxisKey>,
        name: impl Into<String>,
        positive_name: impl Into<String>,
        negative_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            positive_name: positive_name.into(),
            negative_name: negative_name.into(),
        }
    }

    /// Returns the pole label a coordinate leans toward.
    ///
    /// Zero is reported as the positive pole.
    pub fn pole_for(&self, coordinate: f64) -> &str {
        if coordinate < 0.0 {
            &self.negative_name
        } else {
            &self.positive_name
        }
    }
}

/// Default axis keys of the 2D plane when no axes are configured.
pub fn default_plane_keys() -> [AxisKey; 2] {
    [AxisKey::from("x"), AxisKey::from("y")]
}

/// Axis keys spanning the 2D plane: the first two axes.
///
/// A single axis takes x and the other default key fills y. No axes gives `x`/`y`.
pub fn plane_keys(axes: &[Axis]) -> [AxisKey; 2] {
    match axes {
        [first, second, ..] => [first.id.clone(), second.id.clone()],
        [only] => {
            let [x, y] = default_plane_keys();
            let other = if only.id == y { x } else { y };
            [only.id.clone(), other]
        }
        [] => default_plane_keys(),
    }
}
