//! Placement error types.

use thiserror::Error;

use super::PlacementMode;
use crate::domain::foundation::{DomainError, ErrorCode, TemplateId, ValidationError};

/// Caller-configuration errors raised by the placement engine.
///
/// "No free slot" on drop is not an error; it yields a revert outcome.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    #[error("Placement mode {mode} holds at most {capacity} results")]
    CapacityExceeded { mode: PlacementMode, capacity: usize },

    #[error("Result template not found: {0}")]
    ResultNotFound(TemplateId),

    #[error("Invalid drag transition: {0}")]
    InvalidTransition(#[from] ValidationError),
}

impl From<PlacementError> for DomainError {
    fn from(err: PlacementError) -> Self {
        let message = err.to_string();
        match err {
            PlacementError::CapacityExceeded { mode, capacity } => {
                DomainError::new(ErrorCode::CapacityExceeded, message)
                    .with_detail("mode", mode.as_str())
                    .with_detail("capacity", capacity.to_string())
            }
            PlacementError::ResultNotFound(id) => {
                DomainError::new(ErrorCode::ResultNotFound, message).with_detail("id", id.as_str())
            }
            PlacementError::InvalidTransition(_) => {
                DomainError::new(ErrorCode::InvalidStateTransition, message)
            }
        }
    }
}
