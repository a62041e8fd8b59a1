//! Submitted responses, answers and respondent demographics.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LikertValue, QuestionId, ResponseId, Timestamp};

/// One answer to one question. A missing value means the question was skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: QuestionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<LikertValue>,
}

impl Answer {
    /// Creates an answer with a value, clamped onto the Likert scale.
    pub fn new(question_id: impl Into<QuestionId>, value: i64) -> Self {
        Self {
            question_id: question_id.into(),
            value: Some(LikertValue::new(value)),
        }
    }

    /// Creates a skipped answer.
    pub fn skipped(question_id: impl Into<QuestionId>) -> Self {
        Self {
            question_id: question_id.into(),
            value: None,
        }
    }
}

/// Optional demographic fields collected alongside a response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A respondent's full submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: ResponseId,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographics: Option<Demographics>,
    pub created_at: Timestamp,
    /// Seconds spent completing the survey, when the collector measured it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time_seconds: Option<u32>,
}

impl Response {
    /// Creates a response without demographics.
    pub fn new(id: impl Into<ResponseId>, answers: Vec<Answer>, created_at: Timestamp) -> Self {
        Self {
            id: id.into(),
            answers,
            demographics: None,
            created_at,
            response_time_seconds: None,
        }
    }

    /// Attaches demographics.
    pub fn with_demographics(mut self, demographics: Demographics) -> Self {
        self.demographics = Some(demographics);
        self
    }

    /// Attaches a measured completion time.
    pub fn with_response_time(mut self, seconds: u32) -> Self {
        self.response_time_seconds = Some(seconds);
        self
    }

    /// Respondent age, if collected.
    pub fn age(&self) -> Option<u32> {
        self.demographics.as_ref().and_then(|d| d.age)
    }

    /// Respondent gender, if collected.
    pub fn gender(&self) -> Option<&str> {
        self.demographics.as_ref().and_then(|d| d.gender.as_deref())
    }

    /// Respondent location, if collected.
    pub fn location(&self) -> Option<&str> {
        self.demographics.as_ref().and_then(|d| d.location.as_deref())
    }

    /// The answered value for a question. The first answer wins on duplicates.
    pub fn value_for(&self, question_id: &QuestionId) -> Option<LikertValue> {
        self.answers
            .iter()
            .find(|a| &a.question_id == question_id)
            .and_then(|a| a.value)
    }
}
