//! Analysis Module - Pure domain services for diagnosis scoring and cohort analytics.
//!
//! This module contains stateless functions that turn survey content and
//! responses into coordinates, classifications and summary statistics.
//!
//! # Components
//!
//! - `StatisticsAggregator` - Population mean/variance/median plus skewness and kurtosis
//! - `CohortFilter` - Demographic and time-window subsetting ("missing data passes")
//! - `AxisWeightModel` - Per-question signed weights per axis
//! - `CoordinateProjector` - Likert answers → point in `[-1, 1]²` (or N-D)
//! - `ResultClassifier` - Nearest template and per-result counts
//! - `ReliabilityEstimator` - Cronbach's alpha
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Degenerate inputs
//! (empty samples, zero variance, unknown questions) produce well-defined
//! zero or neutral values; only caller-configuration mistakes are errors.

mod axis_weights;
mod cohort_filter;
mod coordinate_projector;
mod errors;
mod reliability;
mod result_classifier;
mod statistics;

pub use axis_weights::AxisWeightModel;
pub use cohort_filter::{AgeRange, CohortFilter, DemographicMatch, MATCH_ALL};
pub use coordinate_projector::{CoordinateProjector, RespondentPoint};
pub use errors::AnalysisError;
pub use reliability::{ReliabilityEstimator, ReliabilitySummary};
pub use result_classifier::{
    ClassificationOutcome, ClassifierOptions, ResultClassifier, DEFAULT_PARALLEL_THRESHOLD,
};
pub use statistics::{HigherMoments, HigherOrderSummary, StatisticsAggregator, StatisticsSummary};
