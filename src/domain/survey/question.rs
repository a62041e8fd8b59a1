//! Survey questions and their axis weights.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{clamp_unit, AxisKey, QuestionId};

/// A Likert question contributing to one or more trait axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    #[serde(default)]
    pub text: String,
    /// Signed contribution per axis key. Missing keys weigh 0.
    #[serde(default)]
    pub axis_weights: BTreeMap<AxisKey, f64>,
}

impl Question {
    /// Creates a question without any axis weights.
    pub fn new(id: impl Into<QuestionId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            axis_weights: BTreeMap::new(),
        }
    }

    /// Adds a weight for an axis, clamped into `[-1, 1]`.
    pub fn with_weight(mut self, axis: impl Into<AxisKey>, weight: f64) -> Self {
        self.axis_weights.insert(axis.into(), clamp_unit(weight));
        self
    }

    /// Returns the clamped weight for an axis, or 0 when absent.
    pub fn weight_for(&self, axis: &AxisKey) -> f64 {
        self.axis_weights
            .get(axis)
            .copied()
            .map(clamp_unit)
            .unwrap_or(0.0)
    }
}
