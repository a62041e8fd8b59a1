//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::DEFAULT_PARALLEL_THRESHOLD;

/// Tuning for cohort analysis
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Batch size at which classification fans out across threads
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,

    /// Summarize `responseTimeSeconds` when responses carry it
    #[serde(default = "default_include_response_time")]
    pub include_response_time: bool,
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.parallel_threshold == 0 {
            return Err(ValidationError::InvalidParallelThreshold);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: default_parallel_threshold(),
            include_response_time: default_include_response_time(),
        }
    }
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

fn default_include_response_time() -> bool {
    true
}
