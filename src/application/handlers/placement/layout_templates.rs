//! LayoutTemplatesHandler - Lays out a survey's result templates on a grid.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::placement::{PlacementError, PlacementMode, PlacementSlot, ResultPlacementEngine};
use crate::domain::survey::DiagnosisResultTemplate;
use crate::ports::{StoreError, SurveyReader};

/// Command to snap the stored templates into a placement mode.
#[derive(Debug, Clone, Copy)]
pub struct LayoutTemplatesCommand {
    pub mode: PlacementMode,
}

/// Templates after layout, with the grid they were laid out on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub mode: PlacementMode,
    /// Every slot of the mode; empty in free mode.
    pub slots: Vec<PlacementSlot>,
    pub templates: Vec<DiagnosisResultTemplate>,
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

impl From<LayoutError> for DomainError {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::Store(e) => e.into(),
            LayoutError::Placement(e) => e.into(),
        }
    }
}

/// Handler for laying out result templates.
pub struct LayoutTemplatesHandler {
    surveys: Arc<dyn SurveyReader>,
}

impl LayoutTemplatesHandler {
    pub fn new(surveys: Arc<dyn SurveyReader>) -> Self {
        Self { surveys }
    }

    pub async fn handle(&self, cmd: LayoutTemplatesCommand) -> Result<LayoutResult, LayoutError> {
        let survey = self.surveys.load_survey().await?;
        debug!(mode = %cmd.mode, templates = survey.templates.len(), "Laying out templates");

        let templates = ResultPlacementEngine::layout(cmd.mode, survey.templates)?;

        Ok(LayoutResult {
            mode: cmd.mode,
            slots: cmd.mode.slot_positions().to_vec(),
            templates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryBundleStore;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::survey::SurveyDefinition;

    fn store_with(templates: Vec<DiagnosisResultTemplate>) -> Arc<InMemoryBundleStore> {
        let store = InMemoryBundleStore::from_bundle(crate::domain::survey::SurveyBundle {
            survey: SurveyDefinition {
                templates,
                ..SurveyDefinition::default()
            },
            responses: vec![],
        });
        Arc::new(store)
    }

    #[tokio::test]
    async fn snaps_templates_onto_grid() {
        let store = store_with(vec![
            DiagnosisResultTemplate::new("a", "A", 0.9, 0.9),
            DiagnosisResultTemplate::new("b", "B", 0.8, 0.8),
        ]);
        let result = LayoutTemplatesHandler::new(store)
            .handle(LayoutTemplatesCommand {
                mode: PlacementMode::Template4,
            })
            .await
            .unwrap();

        assert_eq!(result.slots.len(), 4);
        assert_eq!(result.templates[0].position(), PlacementSlot { x: 0.5, y: 0.5 });
        assert_ne!(result.templates[1].position(), result.templates[0].position());
        assert!(result.slots.contains(&result.templates[1].position()));
    }

    #[tokio::test]
    async fn free_mode_keeps_positions() {
        let store = store_with(vec![DiagnosisResultTemplate::new("a", "A", 0.33, -0.2)]);
        let result = LayoutTemplatesHandler::new(store)
            .handle(LayoutTemplatesCommand {
                mode: PlacementMode::Free,
            })
            .await
            .unwrap();

        assert!(result.slots.is_empty());
        assert_eq!(result.templates[0].position(), PlacementSlot { x: 0.33, y: -0.2 });
    }

    #[tokio::test]
    async fn too_many_templates_for_grid_fails() {
        let templates = (0..5)
            .map(|i| DiagnosisResultTemplate::new(i.to_string(), format!("R{}", i), 0.0, 0.0))
            .collect();
        let err = LayoutTemplatesHandler::new(store_with(templates))
            .handle(LayoutTemplatesCommand {
                mode: PlacementMode::Template4,
            })
            .await
            .unwrap_err();

        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::CapacityExceeded);
    }
}
