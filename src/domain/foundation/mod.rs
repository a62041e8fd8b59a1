//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the diagnosis engine.

mod errors;
mod ids;
mod likert;
mod point;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AxisKey, QuestionId, ResponseId, TemplateId};
pub use likert::LikertValue;
pub use point::{clamp_unit, CoordinatePoint, UNIT_MAX, UNIT_MIN};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
