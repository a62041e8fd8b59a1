//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod placement;
pub mod report;

pub use placement::{LayoutError, LayoutResult, LayoutTemplatesCommand, LayoutTemplatesHandler};
pub use report::{GenerateCohortReportHandler, GenerateCohortReportQuery, ReportError};
