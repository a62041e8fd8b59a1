//! File-based Bundle Store Adapter
//!
//! Reads a `SurveyBundle` from a JSON or YAML file, chosen by extension.
//! `load_bundle` re-reads the file; the port readers share one snapshot per store.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::domain::survey::{Response, SurveyBundle, SurveyDefinition};
use crate::ports::{ResponseReader, StoreError, SurveyReader};

/// Serialization format of a document on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            _ => Err(StoreError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Deserializes `contents` in this format.
    pub fn parse<T: DeserializeOwned>(&self, contents: &str) -> Result<T, StoreError> {
        match self {
            DocumentFormat::Json => serde_json::from_str(contents)
                .map_err(|e| StoreError::DeserializationFailed(e.to_string())),
            DocumentFormat::Yaml => serde_yaml::from_str(contents)
                .map_err(|e| StoreError::DeserializationFailed(e.to_string())),
        }
    }
}

/// Reads and deserializes a JSON or YAML document.
pub async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let format = DocumentFormat::from_path(path)?;

    if !path.exists() {
        return Err(StoreError::NotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path)
        .await
        .map_err(|e| StoreError::IoError(e.to_string()))?;

    format.parse(&contents)
}

/// File-based store for a single survey bundle
///
/// The survey and response readers share one snapshot, parsed on first use,
/// so both always see the same version of the file.
#[derive(Debug, Clone)]
pub struct FileBundleStore {
    path: PathBuf,
    snapshot: Arc<OnceCell<SurveyBundle>>,
}

impl FileBundleStore {
    /// Create a store over a bundle file
    ///
    /// # Example
    /// ```ignore
    /// let store = FileBundleStore::new("./data/bundle.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            snapshot: Arc::new(OnceCell::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole bundle
    pub async fn load_bundle(&self) -> Result<SurveyBundle, StoreError> {
        let bundle: SurveyBundle = read_document(&self.path).await?;
        debug!(
            path = %self.path.display(),
            questions = bundle.survey.questions.len(),
            responses = bundle.responses.len(),
            "Loaded survey bundle"
        );
        Ok(bundle)
    }

    async fn snapshot(&self) -> Result<&SurveyBundle, StoreError> {
        self.snapshot.get_or_try_init(|| self.load_bundle()).await
    }
}

#[async_trait]
impl SurveyReader for FileBundleStore {
    async fn load_survey(&self) -> Result<SurveyDefinition, StoreError> {
        Ok(self.snapshot().await?.survey.clone())
    }
}

#[async_trait]
impl ResponseReader for FileBundleStore {
    async fn list_responses(&self) -> Result<Vec<Response>, StoreError> {
        Ok(self.snapshot().await?.responses.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const BUNDLE_JSON: &str = r#"{
        "survey": {
            "axes": [
                { "id": "x", "name": "Energy", "positiveName": "Outgoing", "negativeName": "Reserved" },
                { "id": "y", "name": "Focus", "positiveName": "Detail", "negativeName": "Big picture" }
            ],
            "questions": [
                { "id": "q1", "text": "I like parties", "axisWeights": { "x": 1.0 } }
            ],
            "templates": [
                { "id": "t1", "name": "Leader", "description": "", "x": 1.0, "y": 1.0 }
            ]
        },
        "responses": [
            { "id": "r1", "answers": [{ "questionId": "q1", "value": 5 }], "createdAt": "2024-03-01T12:00:00Z" }
        ]
    }"#;

    const BUNDLE_YAML: &str = r#"
survey:
  questions:
    - id: q1
      text: I like parties
      axisWeights:
        x: 1.5
  templates:
    - id: t1
      name: Leader
      description: ""
      x: 1.0
      y: 1.0
responses:
  - id: r1
    answers:
      - questionId: q1
        value: 9
      - questionId: q2
    createdAt: "2024-03-01T12:00:00Z"
    responseTimeSeconds: 95
"#;

    #[tokio::test]
    async fn reads_json_bundle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bundle.json");
        fs::write(&path, BUNDLE_JSON).await.unwrap();

        let store = FileBundleStore::new(&path);
        let survey = store.load_survey().await.unwrap();
        assert_eq!(survey.axes.len(), 2);
        assert_eq!(survey.templates[0].name, "Leader");

        let responses = store.list_responses().await.unwrap();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].id.as_str(), "r1");
    }

    #[tokio::test]
    async fn reads_yaml_bundle_and_clamps_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bundle.yml");
        fs::write(&path, BUNDLE_YAML).await.unwrap();

        let bundle = FileBundleStore::new(&path).load_bundle().await.unwrap();
        assert!(bundle.survey.axes.is_empty());

        let response = &bundle.responses[0];
        assert_eq!(response.answers[0].value.map(|v| v.value()), Some(5));
        assert!(response.answers[1].value.is_none());
        assert_eq!(response.response_time_seconds, Some(95));
    }

    #[tokio::test]
    async fn readers_share_one_snapshot_of_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bundle.json");
        fs::write(&path, BUNDLE_JSON).await.unwrap();

        let store = FileBundleStore::new(&path);
        let survey = store.load_survey().await.unwrap();
        assert_eq!(survey.questions.len(), 1);

        let rewritten = BUNDLE_JSON.replace(r#""id": "r1""#, r#""id": "r2""#);
        fs::write(&path, rewritten).await.unwrap();

        let responses = store.list_responses().await.unwrap();
        assert_eq!(responses[0].id.as_str(), "r1");

        let fresh = store.load_bundle().await.unwrap();
        assert_eq!(fresh.responses[0].id.as_str(), "r2");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = FileBundleStore::new(dir.path().join("absent.json"));
        assert!(matches!(store.load_survey().await, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn unknown_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bundle.toml");
        fs::write(&path, "").await.unwrap();
        assert!(matches!(
            FileBundleStore::new(&path).load_bundle().await,
            Err(StoreError::UnsupportedFormat(_))
        ));
    }

    #[tokio::test]
    async fn malformed_json_fails_to_deserialize() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bundle.json");
        fs::write(&path, "{ not json").await.unwrap();
        assert!(matches!(
            FileBundleStore::new(&path).load_bundle().await,
            Err(StoreError::DeserializationFailed(_))
        ));
    }
}
