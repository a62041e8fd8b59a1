//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Query handlers (reports) are read-only; the layout command returns the
//! laid-out templates without writing them back.

pub mod handlers;

pub use handlers::{
    // Report handlers
    GenerateCohortReportHandler, GenerateCohortReportQuery, ReportError,
    // Placement handlers
    LayoutError, LayoutResult, LayoutTemplatesCommand, LayoutTemplatesHandler,
};
