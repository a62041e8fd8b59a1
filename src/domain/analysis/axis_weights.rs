//! Axis Weight Model - Per-question signed contribution to each trait axis.

use std::collections::HashMap;

use crate::domain::foundation::{clamp_unit, AxisKey, QuestionId};
use crate::domain::survey::Question;

/// Lookup of clamped axis weights keyed by question.
///
/// Built once per batch so projection does not rescan the question list for
/// every answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisWeightModel {
    weights: HashMap<QuestionId, HashMap<AxisKey, f64>>,
}

impl AxisWeightModel {
    /// Builds the model from survey questions.
    ///
    /// Duplicate question ids keep the first definition.
    pub fn from_questions(questions: &[Question]) -> Self {
        let mut weights: HashMap<QuestionId, HashMap<AxisKey, f64>> = HashMap::new();
        for question in questions {
            weights.entry(question.id.clone()).or_insert_with(|| {
                question
                    .axis_weights
                    .iter()
                    .map(|(axis, w)| (axis.clone(), clamp_unit(*w)))
                    .collect()
            });
        }
        Self { weights }
    }

    /// Returns true if the question exists in the model.
    pub fn contains(&self, question_id: &QuestionId) -> bool {
        self.weights.contains_key(question_id)
    }

    /// Weight of a question on an axis; 0 when either is unknown.
    pub fn weight(&self, question_id: &QuestionId, axis: &AxisKey) -> f64 {
        self.weights
            .get(question_id)
            .and_then(|axes| axes.get(axis))
            .copied()
            .unwrap_or(0.0)
    }

    /// Number of questions in the model.
    pub fn question_count(&self) -> usize {
        self.weights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<Question> {
        vec![
            Question::new("q1", "").with_weight("x", 1.0).with_weight("y", -0.5),
            Question::new("q2", "").with_weight("y", 0.75),
            Question::new("q1", "duplicate").with_weight("x", -1.0),
        ]
    }

    #[test]
    fn weight_lookup() {
        let model = AxisWeightModel::from_questions(&questions());
        assert_eq!(model.weight(&"q1".into(), &"x".into()), 1.0);
        assert_eq!(model.weight(&"q1".into(), &"y".into()), -0.5);
        assert_eq!(model.weight(&"q2".into(), &"x".into()), 0.0);
    }

    #[test]
    fn unknown_question_weighs_zero() {
        let model = AxisWeightModel::from_questions(&questions());
        assert!(!model.contains(&"q9".into()));
        assert_eq!(model.weight(&"q9".into(), &"x".into()), 0.0);
    }

    #[test]
    fn first_definition_wins_on_duplicates() {
        let model = AxisWeightModel::from_questions(&questions());
        assert_eq!(model.question_count(), 2);
        assert_eq!(model.weight(&"q1".into(), &"x".into()), 1.0);
    }

    #[test]
    fn raw_out_of_range_weights_are_clamped() {
        let mut q = Question::new("q1", "");
        q.axis_weights.insert("x".into(), 4.0);
        let model = AxisWeightModel::from_questions(&[q]);
        assert_eq!(model.weight(&"q1".into(), &"x".into()), 1.0);
    }
}
