//! Reliability Estimator - Cronbach's alpha internal consistency.

use serde::{Deserialize, Serialize};

use super::StatisticsAggregator;
use crate::domain::survey::{Question, Response};

/// Internal-consistency estimate for a set of items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliabilitySummary {
    pub cronbach_alpha: f64,
    pub item_count: usize,
    /// Respondents that answered every item and entered the estimate.
    pub complete_responses: usize,
}

/// Reliability functions.
pub struct ReliabilityEstimator;

impl ReliabilityEstimator {
    /// Computes Cronbach's alpha over per-item value arrays.
    ///
    /// # Algorithm
    /// `alpha = k/(k-1) * (1 - Σ var(item) / var(total))` with population
    /// variances. Respondent `i`'s total is the sum of `items[j][i]` over every
    /// item that has an `i`-th value.
    ///
    /// # Edge Cases
    /// - Fewer than 2 items: 0
    /// - Zero variance of totals: 0
    pub fn cronbach_alpha(items: &[Vec<f64>]) -> f64 {
        let k = items.len();
        if k < 2 {
            return 0.0;
        }

        let item_variance_sum: f64 = items
            .iter()
            .map(|values| StatisticsAggregator::compute(values).variance)
            .sum();

        let respondents = items.iter().map(Vec::len).max().unwrap_or(0);
        let totals: Vec<f64> = (0..respondents)
            .map(|i| items.iter().filter_map(|values| values.get(i)).sum())
            .collect();
        let total_variance = StatisticsAggregator::compute(&totals).variance;

        if total_variance == 0.0 {
            return 0.0;
        }

        let k = k as f64;
        (k / (k - 1.0)) * (1.0 - item_variance_sum / total_variance)
    }

    /// Builds aligned item arrays from responses that answered every question.
    ///
    /// Returns one array per question (in question order) and the number of
    /// complete responses used.
    pub fn item_matrix<'a, I>(responses: I, questions: &[Question]) -> (Vec<Vec<f64>>, usize)
    where
        I: IntoIterator<Item = &'a Response>,
    {
        let mut items: Vec<Vec<f64>> = vec![Vec::new(); questions.len()];
        let mut complete = 0;

        for response in responses {
            let row: Option<Vec<f64>> = questions
                .iter()
                .map(|q| response.value_for(&q.id).map(|v| f64::from(v.value())))
                .collect();
            if let Some(row) = row {
                for (item, value) in items.iter_mut().zip(row) {
                    item.push(value);
                }
                complete += 1;
            }
        }

        (items, complete)
    }

    /// Alpha over the survey questions, using complete responses only.
    pub fn summarize<'a, I>(responses: I, questions: &[Question]) -> ReliabilitySummary
    where
        I: IntoIterator<Item = &'a Response>,
    {
        let (items, complete_responses) = Self::item_matrix(responses, questions);
        ReliabilitySummary {
            cronbach_alpha: Self::cronbach_alpha(&items),
            item_count: items.len(),
            complete_responses,
        }
    }
}
