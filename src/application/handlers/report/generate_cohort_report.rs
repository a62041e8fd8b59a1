//! GenerateCohortReportHandler - Query handler for cohort analytics.
//!
//! Loads the survey and its responses through the store ports, then builds
//! a `CohortReport` for the requested filter.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::domain::analysis::{AnalysisError, CohortFilter};
use crate::domain::dashboard::{CohortReport, ReportOptions};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ResponseReader, StoreError, SurveyReader};

/// Query to build a report over one cohort.
#[derive(Debug, Clone, Default)]
pub struct GenerateCohortReportQuery {
    /// Narrows the responses; the default admits everyone.
    pub filter: CohortFilter,
}

/// Errors from report generation.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Report task failed: {0}")]
    Internal(String),
}

impl From<ReportError> for DomainError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Store(e) => e.into(),
            ReportError::Analysis(e) => e.into(),
            ReportError::Internal(message) => DomainError::new(ErrorCode::InternalError, message),
        }
    }
}

/// Handler for generating cohort reports.
pub struct GenerateCohortReportHandler {
    surveys: Arc<dyn SurveyReader>,
    responses: Arc<dyn ResponseReader>,
    options: ReportOptions,
}

impl GenerateCohortReportHandler {
    pub fn new(surveys: Arc<dyn SurveyReader>, responses: Arc<dyn ResponseReader>) -> Self {
        Self {
            surveys,
            responses,
            options: ReportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn handle(&self, query: GenerateCohortReportQuery) -> Result<CohortReport, ReportError> {
        let (survey, responses) =
            futures::try_join!(self.surveys.load_survey(), self.responses.list_responses())?;

        debug!(
            questions = survey.questions.len(),
            templates = survey.templates.len(),
            responses = responses.len(),
            "Building cohort report"
        );

        let started = Instant::now();
        let options = self.options.clone();
        let filter = query.filter;

        // Classification may fan out on rayon; keep it off the async workers.
        let report = tokio::task::spawn_blocking(move || {
            CohortReport::build(&survey, &responses, &filter, &options)
        })
        .await
        .map_err(|e| ReportError::Internal(e.to_string()))??;

        info!(
            total = report.total_responses,
            cohort_size = report.cohort_size,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Cohort report generated"
        );

        Ok(report)
    }
}
