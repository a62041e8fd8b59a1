use serde::{Deserialize, Serialize};

use crate::domain::analysis::{
    AnalysisError, AxisWeightModel, ClassificationOutcome, ClassifierOptions, CohortFilter,
    CoordinateProjector, HigherOrderSummary, ReliabilityEstimator, ReliabilitySummary,
    ResultClassifier, StatisticsAggregator, DEFAULT_PARALLEL_THRESHOLD,
};
use crate::domain::foundation::{AxisKey, QuestionId, ResponseId};
use crate::domain::survey::{plane_keys, Axis, Response, SurveyDefinition};

/// Knobs for building a cohort report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Batch size at which classification fans out; `None` keeps it sequential.
    pub parallel_threshold: Option<usize>,
    pub include_response_time: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: Some(DEFAULT_PARALLEL_THRESHOLD),
            include_response_time: true,
        }
    }
}

/// Everything the analytics dashboard shows for one filtered cohort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortReport {
    /// Responses before filtering
    pub total_responses: usize,
    /// Responses admitted by the filter
    pub cohort_size: usize,

    pub filter: CohortFilter,

    /// One projected point per cohort member, in input order
    pub points: Vec<CohortPoint>,

    /// Result counts, most frequent first
    pub classification: Vec<ClassificationOutcome>,

    pub axes: Vec<AxisSummary>,
    pub questions: Vec<QuestionSummary>,
    pub reliability: ReliabilitySummary,

    /// Only present when at least one response carries a real timing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<HigherOrderSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortPoint {
    pub response_id: ResponseId,
    pub x: f64,
    pub y: f64,
    pub result_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSummary {
    #[serde(flatten)]
    pub axis: Axis,
    /// Pole label the cohort mean leans toward
    pub leaning: String,
    pub stats: HigherOrderSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
    pub question_id: QuestionId,
    pub text: String,
    /// Respondents with a value for this question
    pub answered: usize,
    /// Raw Likert values, 1..=5
    pub stats: HigherOrderSummary,
    /// Counts per Likert point, index 0 = 1
    pub distribution: [usize; 5],
}

impl CohortReport {
    /// Filters `responses` and summarizes the cohort.
    ///
    /// # Edge Cases
    /// - Empty cohort: zero summaries, no points, empty classification
    /// - No templates: `AnalysisError::NoTemplates`
    pub fn build(
        survey: &SurveyDefinition,
        responses: &[Response],
        filter: &CohortFilter,
        options: &ReportOptions,
    ) -> Result<Self, AnalysisError> {
        let cohort = filter.apply(responses);
        let model = AxisWeightModel::from_questions(&survey.questions);
        let [x_axis, y_axis] = plane_keys(&survey.axes);

        let classifier = ClassifierOptions::default()
            .with_plane(x_axis.clone(), y_axis.clone())
            .with_parallel_threshold(options.parallel_threshold);
        let assignments = ResultClassifier::assign(&cohort, &model, &survey.templates, &classifier)?;

        let points = CoordinateProjector::project_all(cohort.iter().copied(), &model, &x_axis, &y_axis)
            .into_iter()
            .zip(&assignments)
            .map(|(projected, &index)| CohortPoint {
                response_id: projected.response_id,
                x: projected.point.x,
                y: projected.point.y,
                result_name: survey.templates[index].name.clone(),
            })
            .collect();

        let classification =
            ResultClassifier::tally(assignments.iter().map(|&index| &survey.templates[index]));

        let response_time = if options.include_response_time {
            Self::response_time(&cohort)
        } else {
            None
        };

        Ok(Self {
            total_responses: responses.len(),
            cohort_size: cohort.len(),
            filter: filter.clone(),
            points,
            classification,
            axes: Self::axis_summaries(&survey.axes, &cohort, &model),
            questions: Self::question_summaries(survey, &cohort),
            reliability: ReliabilityEstimator::summarize(cohort.iter().copied(), &survey.questions),
            response_time,
        })
    }

    fn axis_summaries(axes: &[Axis], cohort: &[&Response], model: &AxisWeightModel) -> Vec<AxisSummary> {
        let keys: Vec<AxisKey> = axes.iter().map(|a| a.id.clone()).collect();
        let coordinates: Vec<Vec<f64>> = cohort
            .iter()
            .map(|r| CoordinateProjector::project_axes(&r.answers, model, &keys))
            .collect();

        axes.iter()
            .enumerate()
            .map(|(i, axis)| {
                let column: Vec<f64> = coordinates.iter().map(|row| row[i]).collect();
                let stats = StatisticsAggregator::summarize(&column);
                AxisSummary {
                    axis: axis.clone(),
                    leaning: axis.pole_for(stats.summary.mean).to_string(),
                    stats,
                }
            })
            .collect()
    }

    fn question_summaries(survey: &SurveyDefinition, cohort: &[&Response]) -> Vec<QuestionSummary> {
        survey
            .questions
            .iter()
            .map(|question| {
                let values: Vec<f64> = cohort
                    .iter()
                    .filter_map(|r| r.value_for(&question.id))
                    .map(|v| f64::from(v.value()))
                    .collect();
                QuestionSummary {
                    question_id: question.id.clone(),
                    text: question.text.clone(),
                    answered: values.len(),
                    stats: StatisticsAggregator::summarize(&values),
                    distribution: StatisticsAggregator::likert_distribution(&values),
                }
            })
            .collect()
    }

    fn response_time(cohort: &[&Response]) -> Option<HigherOrderSummary> {
        let seconds: Vec<f64> = cohort
            .iter()
            .filter_map(|r| r.response_time_seconds)
            .map(f64::from)
            .collect();
        if seconds.is_empty() {
            None
        } else {
            Some(StatisticsAggregator::summarize(&seconds))
        }
    }
}

#[cfg(test)]
#[path = "cohort_report_test.rs"]
mod cohort_report_test;
