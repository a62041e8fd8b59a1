//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `survey` - Axes, questions, responses and result templates
//! - `analysis` - Pure domain services for scoring and cohort analytics
//! - `placement` - Authoring-time layout of result templates on the plane
//! - `dashboard` - Read-model aggregates combining analysis outputs

pub mod analysis;
pub mod dashboard;
pub mod foundation;
pub mod placement;
pub mod survey;
