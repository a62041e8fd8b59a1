//! Report handlers - cohort analytics queries.

mod generate_cohort_report;

pub use generate_cohort_report::{
    GenerateCohortReportHandler, GenerateCohortReportQuery, ReportError,
};
