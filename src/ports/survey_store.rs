//! Survey Store Ports - Read access to authored surveys and collected responses.
//!
//! The analysis core never performs I/O; handlers obtain fully materialized
//! inputs through these ports and pass them to the domain services.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::survey::{Response, SurveyDefinition};

/// Errors that can occur while reading from a survey store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Survey not found: {0}")]
    NotFound(String),

    #[error("Failed to deserialize bundle: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported bundle format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        let code = match &err {
            StoreError::NotFound(_) => ErrorCode::SurveyNotFound,
            _ => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Read-only port for the authored survey (axes, questions, templates)
#[async_trait]
pub trait SurveyReader: Send + Sync {
    /// Loads the survey definition.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if the store holds no survey
    async fn load_survey(&self) -> Result<SurveyDefinition, StoreError>;
}

/// Read-only port for collected responses
#[async_trait]
pub trait ResponseReader: Send + Sync {
    /// Lists every stored response in submission order.
    async fn list_responses(&self) -> Result<Vec<Response>, StoreError>;
}
