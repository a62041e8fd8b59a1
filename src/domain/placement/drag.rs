//! Drag interaction lifecycle: `Idle → Dragging → Idle`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CoordinatePoint, StateMachine, TemplateId, ValidationError};

/// Phase of the authoring drag interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

impl StateMachine for DragPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DragPhase::*;
        matches!((self, target), (Idle, Dragging) | (Dragging, Idle))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DragPhase::*;
        match self {
            Idle => vec![Dragging],
            Dragging => vec![Idle],
        }
    }
}

/// The result currently being dragged and where it started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveDrag {
    pub result_id: TemplateId,
    pub origin: CoordinatePoint,
}

/// Drag state carried by the placement engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    phase: DragPhase,
    active: Option<ActiveDrag>,
}

impl DragState {
    /// Current phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// The in-flight drag, if any.
    pub fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    /// Enters `Dragging`, remembering the pre-drag position.
    pub(crate) fn begin(
        &mut self,
        result_id: TemplateId,
        origin: CoordinatePoint,
    ) -> Result<(), ValidationError> {
        self.phase = self.phase.transition_to(DragPhase::Dragging)?;
        self.active = Some(ActiveDrag { result_id, origin });
        Ok(())
    }

    /// Returns to `Idle`, yielding the drag that ended.
    pub(crate) fn finish(&mut self) -> Result<ActiveDrag, ValidationError> {
        self.phase = self.phase.transition_to(DragPhase::Idle)?;
        // Dragging always carries an active drag.
        self.active.take().ok_or_else(|| {
            ValidationError::invalid_format(
                "drag_state",
                "dragging without an active result",
            )
        })
    }
}
