//! Statistics Aggregator - Moment-based descriptive statistics over a sample.
//!
//! All moments use the population divisor `n`, never `n - 1`.

use serde::{Deserialize, Serialize};

/// Mean, spread and center of a numeric sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub mean: f64,
    pub std: f64,
    pub median: f64,
    pub variance: f64,
}

/// Shape of a distribution relative to the normal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HigherMoments {
    pub skewness: f64,
    /// Excess kurtosis (normal = 0).
    pub kurtosis: f64,
}

/// Summary statistics extended with the third and fourth moments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HigherOrderSummary {
    #[serde(flatten)]
    pub summary: StatisticsSummary,
    #[serde(flatten)]
    pub moments: HigherMoments,
    /// Number of finite values the summary was computed over.
    pub count: usize,
}

/// Descriptive statistics functions.
pub struct StatisticsAggregator;

impl StatisticsAggregator {
    /// Computes mean, population variance, standard deviation and median.
    ///
    /// # Edge Cases
    /// - Empty sample: all fields are 0
    /// - Even length: median is the mean of the two middle values
    /// - Constant sample: variance and std are exactly 0
    /// - Non-finite values are ignored
    pub fn compute(values: &[f64]) -> StatisticsSummary {
        let sample = Self::finite(values);
        if sample.is_empty() {
            return StatisticsSummary::default();
        }

        let n = sample.len() as f64;
        let mean = sample.iter().sum::<f64>() / n;
        // Rounding in the mean leaves a residue on constant samples.
        let variance = if sample.iter().all(|v| *v == sample[0]) {
            0.0
        } else {
            sample.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
        };

        StatisticsSummary {
            mean,
            std: variance.sqrt(),
            median: Self::median_of(sample),
            variance,
        }
    }

    /// Computes skewness and excess kurtosis from standardized values.
    ///
    /// # Edge Cases
    /// - Empty or constant sample: both are 0
    pub fn higher_moments(values: &[f64]) -> HigherMoments {
        let sample = Self::finite(values);
        let summary = Self::compute(&sample);
        if sample.is_empty() || summary.std == 0.0 {
            return HigherMoments::default();
        }

        let n = sample.len() as f64;
        let (cubes, fourths) = sample.iter().fold((0.0, 0.0), |(c, f), v| {
            let z = (v - summary.mean) / summary.std;
            (c + z.powi(3), f + z.powi(4))
        });

        HigherMoments {
            skewness: cubes / n,
            kurtosis: fourths / n - 3.0,
        }
    }

    /// Computes the full higher-order summary in one call.
    pub fn summarize(values: &[f64]) -> HigherOrderSummary {
        let sample = Self::finite(values);
        HigherOrderSummary {
            summary: Self::compute(&sample),
            moments: Self::higher_moments(&sample),
            count: sample.len(),
        }
    }

    /// Counts answers per Likert point. Index 0 holds the 1s, index 4 the 5s.
    ///
    /// Values are rounded to the nearest point; anything off the scale is dropped.
    pub fn likert_distribution(values: &[f64]) -> [usize; 5] {
        let mut counts = [0usize; 5];
        for v in values.iter().filter(|v| v.is_finite()) {
            let point = v.round();
            if (1.0..=5.0).contains(&point) {
                counts[point as usize - 1] += 1;
            }
        }
        counts
    }

    fn finite(values: &[f64]) -> Vec<f64> {
        values.iter().copied().filter(|v| v.is_finite()).collect()
    }

    fn median_of(mut sample: Vec<f64>) -> f64 {
        sample.sort_by(|a, b| a.total_cmp(b));
        let mid = sample.len() / 2;
        if sample.len() % 2 == 0 {
            (sample[mid - 1] + sample[mid]) / 2.0
        } else {
            sample[mid]
        }
    }
}
