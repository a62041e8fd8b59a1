//! Survey module - the authored survey content and collected responses.
//!
//! # Components
//!
//! - `Axis` - Bipolar trait dimension
//! - `Question` - Likert question with signed per-axis weights
//! - `Response` - A respondent's answers, demographics and timing
//! - `DiagnosisResultTemplate` - Labeled anchor point used for classification
//! - `SurveyDefinition` / `SurveyBundle` - Interchange records for stores and the CLI

mod axis;
mod question;
mod response;
mod template;

pub use axis::{default_plane_keys, plane_keys, Axis};
pub use question::Question;
pub use response::{Answer, Demographics, Response};
pub use template::DiagnosisResultTemplate;

use serde::{Deserialize, Serialize};

/// Authored survey content: axes, questions and result templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDefinition {
    #[serde(default)]
    pub axes: Vec<Axis>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub templates: Vec<DiagnosisResultTemplate>,
}

/// A survey together with its collected responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyBundle {
    pub survey: SurveyDefinition,
    #[serde(default)]
    pub responses: Vec<Response>,
}
