//! In-Memory Bundle Store Adapter
//!
//! Holds one survey bundle in memory. Useful for testing and embedding.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::survey::{Response, SurveyBundle, SurveyDefinition};
use crate::ports::{ResponseReader, StoreError, SurveyReader};

/// In-memory store for a single survey and its responses
#[derive(Debug, Clone, Default)]
pub struct InMemoryBundleStore {
    survey: Arc<RwLock<Option<SurveyDefinition>>>,
    responses: Arc<RwLock<Vec<Response>>>,
}

impl InMemoryBundleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a bundle
    pub fn from_bundle(bundle: SurveyBundle) -> Self {
        Self {
            survey: Arc::new(RwLock::new(Some(bundle.survey))),
            responses: Arc::new(RwLock::new(bundle.responses)),
        }
    }

    /// Replace the stored survey
    pub async fn put_survey(&self, survey: SurveyDefinition) {
        *self.survey.write().await = Some(survey);
    }

    /// Append a response
    pub async fn push_response(&self, response: Response) {
        self.responses.write().await.push(response);
    }

    /// Get the number of stored responses
    pub async fn response_count(&self) -> usize {
        self.responses.read().await.len()
    }
}

#[async_trait]
impl SurveyReader for InMemoryBundleStore {
    async fn load_survey(&self) -> Result<SurveyDefinition, StoreError> {
        self.survey
            .read()
            .await
            .clone()
            .ok_or_else(|| StoreError::NotFound("in-memory store".to_string()))
    }
}

#[async_trait]
impl ResponseReader for InMemoryBundleStore {
    async fn list_responses(&self) -> Result<Vec<Response>, StoreError> {
        Ok(self.responses.read().await.clone())
    }
}
