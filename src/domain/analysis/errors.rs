//! Analysis error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Caller-configuration errors raised by the analysis functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Cannot classify responses without any result templates")]
    NoTemplates,
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::NoTemplates => DomainError::new(ErrorCode::NoTemplates, err.to_string()),
        }
    }
}
