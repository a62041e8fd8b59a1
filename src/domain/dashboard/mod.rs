pub mod cohort_report;

pub use cohort_report::{AxisSummary, CohortPoint, CohortReport, QuestionSummary, ReportOptions};
