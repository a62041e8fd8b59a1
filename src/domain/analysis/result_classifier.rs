//! Result Classifier - Nearest-template matching and outcome counting.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use super::{AnalysisError, AxisWeightModel, CoordinateProjector};
use crate::domain::foundation::{AxisKey, CoordinatePoint};
use crate::domain::survey::{default_plane_keys, DiagnosisResultTemplate, Question, Response};

/// Batch size above which classification fans out across threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// Number of responses assigned to one result name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationOutcome {
    pub result_name: String,
    pub count: usize,
}

/// Tuning for batch classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierOptions {
    /// Classify in parallel when the batch has at least this many responses.
    pub parallel_threshold: usize,
    /// Allow the parallel path at all.
    pub parallel: bool,
    pub x_axis: AxisKey,
    pub y_axis: AxisKey,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        let [x_axis, y_axis] = default_plane_keys();
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            parallel: true,
            x_axis,
            y_axis,
        }
    }
}

impl ClassifierOptions {
    /// Uses the given plane axes.
    pub fn with_plane(mut self, x_axis: AxisKey, y_axis: AxisKey) -> Self {
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self
    }

    /// Sets the parallel threshold; `None` disables the parallel path.
    pub fn with_parallel_threshold(mut self, threshold: Option<usize>) -> Self {
        match threshold {
            Some(t) => {
                self.parallel = true;
                self.parallel_threshold = t.max(1);
            }
            None => self.parallel = false,
        }
        self
    }
}

/// Classification functions.
pub struct ResultClassifier;

impl ResultClassifier {
    /// Returns the template closest to `point`.
    ///
    /// Ties go to the template that appears first in `templates`.
    pub fn classify<'a>(
        point: &CoordinatePoint,
        templates: &'a [DiagnosisResultTemplate],
    ) -> Result<&'a DiagnosisResultTemplate, AnalysisError> {
        Self::nearest_index(point, templates).map(|index| &templates[index])
    }

    /// Index of the nearest template, first occurrence on ties.
    pub fn nearest_index(
        point: &CoordinatePoint,
        templates: &[DiagnosisResultTemplate],
    ) -> Result<usize, AnalysisError> {
        let mut best: Option<(usize, f64)> = None;
        for (index, template) in templates.iter().enumerate() {
            let distance = point.distance_to(&template.position());
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((index, distance)),
            }
        }
        best.map(|(index, _)| index).ok_or(AnalysisError::NoTemplates)
    }

    /// Projects and classifies every response, counting results by name.
    ///
    /// # Edge Cases
    /// - Empty templates: `AnalysisError::NoTemplates`, even with no responses
    /// - Empty responses: empty Vec
    /// - Templates sharing a name: counts merge
    pub fn classify_all(
        responses: &[Response],
        questions: &[Question],
        templates: &[DiagnosisResultTemplate],
    ) -> Result<Vec<ClassificationOutcome>, AnalysisError> {
        Self::classify_all_with(responses, questions, templates, &ClassifierOptions::default())
    }

    /// [`classify_all`](Self::classify_all) with explicit options.
    pub fn classify_all_with(
        responses: &[Response],
        questions: &[Question],
        templates: &[DiagnosisResultTemplate],
        options: &ClassifierOptions,
    ) -> Result<Vec<ClassificationOutcome>, AnalysisError> {
        let model = AxisWeightModel::from_questions(questions);
        let refs: Vec<&Response> = responses.iter().collect();
        let assignments = Self::assign(&refs, &model, templates, options)?;
        Ok(Self::tally(assignments.iter().map(|&i| &templates[i])))
    }

    /// Nearest-template index for each response, in input order.
    pub fn assign(
        responses: &[&Response],
        model: &AxisWeightModel,
        templates: &[DiagnosisResultTemplate],
        options: &ClassifierOptions,
    ) -> Result<Vec<usize>, AnalysisError> {
        if templates.is_empty() {
            return Err(AnalysisError::NoTemplates);
        }

        let nearest = |response: &&Response| {
            let point = CoordinateProjector::project_with_model(
                &response.answers,
                model,
                &options.x_axis,
                &options.y_axis,
            );
            Self::nearest_index(&point, templates)
        };

        if options.parallel && responses.len() >= options.parallel_threshold {
            debug!(responses = responses.len(), "Classifying batch in parallel");
            // Indexed collect keeps input order regardless of completion order.
            responses.par_iter().map(nearest).collect()
        } else {
            responses.iter().map(nearest).collect()
        }
    }

    /// Folds classified templates into per-name counts.
    ///
    /// Sorted by count descending; equal counts keep first-seen order.
    pub fn tally<'a, I>(classified: I) -> Vec<ClassificationOutcome>
    where
        I: IntoIterator<Item = &'a DiagnosisResultTemplate>,
    {
        let (mut outcomes, _) = classified.into_iter().fold(
            (Vec::<ClassificationOutcome>::new(), HashMap::<String, usize>::new()),
            |(mut outcomes, mut positions), template| {
                match positions.get(&template.name) {
                    Some(&pos) => outcomes[pos].count += 1,
                    None => {
                        positions.insert(template.name.clone(), outcomes.len());
                        outcomes.push(ClassificationOutcome {
                            result_name: template.name.clone(),
                            count: 1,
                        });
                    }
                }
                (outcomes, positions)
            },
        );

        // Stable sort keeps first-seen order among equal counts.
        outcomes.sort_by(|a, b| b.count.cmp(&a.count));
        outcomes
    }
}
