//! Coordinate Projector - Maps a respondent's answers into trait space.

use serde::{Deserialize, Serialize};

use super::AxisWeightModel;
use crate::domain::foundation::{clamp_unit, AxisKey, CoordinatePoint, ResponseId};
use crate::domain::survey::{default_plane_keys, Answer, Question, Response};

/// A respondent's projected location, keyed back to the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondentPoint {
    pub response_id: ResponseId,
    #[serde(flatten)]
    pub point: CoordinatePoint,
}

/// Projection functions from answers to coordinates.
pub struct CoordinateProjector;

impl CoordinateProjector {
    /// Projects answers onto the default `x`/`y` plane.
    ///
    /// # Algorithm
    /// For each answer with a known question and a value:
    /// `normalized = (value - 3) / 2`, added as `normalized * weight` to every
    /// axis total. Each such answer counts once toward a shared divisor, so
    /// `coordinate = total / contributing`.
    ///
    /// # Edge Cases
    /// - Empty answers: origin
    /// - Unknown question ids: ignored
    /// - Skipped answers (no value): ignored
    pub fn project(answers: &[Answer], questions: &[Question]) -> CoordinatePoint {
        let [x_key, y_key] = default_plane_keys();
        Self::project_plane(answers, questions, &x_key, &y_key)
    }

    /// Projects answers onto the plane spanned by two named axes.
    pub fn project_plane(
        answers: &[Answer],
        questions: &[Question],
        x_axis: &AxisKey,
        y_axis: &AxisKey,
    ) -> CoordinatePoint {
        let model = AxisWeightModel::from_questions(questions);
        Self::project_with_model(answers, &model, x_axis, y_axis)
    }

    /// Projects onto two axes using a prebuilt weight model.
    pub fn project_with_model(
        answers: &[Answer],
        model: &AxisWeightModel,
        x_axis: &AxisKey,
        y_axis: &AxisKey,
    ) -> CoordinatePoint {
        let coords = Self::project_axes(answers, model, &[x_axis.clone(), y_axis.clone()]);
        CoordinatePoint::new(coords[0], coords[1])
    }

    /// Projects onto any number of axes, returning one coordinate per key.
    pub fn project_axes(answers: &[Answer], model: &AxisWeightModel, axes: &[AxisKey]) -> Vec<f64> {
        let mut totals = vec![0.0; axes.len()];
        let mut contributing = 0usize;

        for answer in answers {
            let Some(value) = answer.value else {
                continue;
            };
            if !model.contains(&answer.question_id) {
                continue;
            }

            let normalized = value.normalized();
            for (total, axis) in totals.iter_mut().zip(axes) {
                *total += normalized * model.weight(&answer.question_id, axis);
            }
            contributing += 1;
        }

        if contributing == 0 {
            return vec![0.0; axes.len()];
        }

        totals
            .into_iter()
            .map(|total| clamp_unit(total / contributing as f64))
            .collect()
    }

    /// Projects every response, preserving input order.
    pub fn project_all<'a, I>(
        responses: I,
        model: &AxisWeightModel,
        x_axis: &AxisKey,
        y_axis: &AxisKey,
    ) -> Vec<RespondentPoint>
    where
        I: IntoIterator<Item = &'a Response>,
    {
        responses
            .into_iter()
            .map(|response| RespondentPoint {
                response_id: response.id.clone(),
                point: Self::project_with_model(&response.answers, model, x_axis, y_axis),
            })
            .collect()
    }
}
