//! Diagnosis result templates: labeled anchor points in trait space.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::{clamp_unit, CoordinatePoint, TemplateId};

/// A named, author-placed anchor representing one possible diagnosis outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResultTemplate {
    pub id: TemplateId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_unit")]
    pub x: f64,
    #[serde(deserialize_with = "deserialize_unit")]
    pub y: f64,
}

fn deserialize_unit<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(clamp_unit)
}

impl DiagnosisResultTemplate {
    /// Creates a template at a position clamped into `[-1, 1]²`.
    pub fn new(id: impl Into<TemplateId>, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            x: clamp_unit(x),
            y: clamp_unit(y),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The template's anchor position.
    pub fn position(&self) -> CoordinatePoint {
        CoordinatePoint::new(self.x, self.y)
    }

    /// Moves the template, clamping into `[-1, 1]²`.
    pub fn move_to(&mut self, point: CoordinatePoint) {
        let point = point.clamped();
        self.x = point.x;
        self.y = point.y;
    }
}
