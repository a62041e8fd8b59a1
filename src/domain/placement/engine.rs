//! Result Placement Engine - Authoring-time layout of result templates.

use tracing::debug;

use super::slots::{free_slots, nearest_free_slot, place_on_drop};
use super::{DragPhase, DragState, DropOutcome, PlacementError, PlacementMode, PlacementSlot};
use crate::domain::foundation::{CoordinatePoint, TemplateId, ValidationError};
use crate::domain::survey::DiagnosisResultTemplate;

/// Owns the editable result list of one editor session and its placement mode.
///
/// Invariants:
/// - a templated mode never holds more results than its capacity
/// - in a templated mode, committed positions are slots and no two results share one
#[derive(Debug, Clone, Default)]
pub struct ResultPlacementEngine {
    mode: PlacementMode,
    results: Vec<DiagnosisResultTemplate>,
    drag: DragState,
}

impl ResultPlacementEngine {
    /// Creates an empty engine.
    pub fn new(mode: PlacementMode) -> Self {
        Self {
            mode,
            results: Vec::new(),
            drag: DragState::default(),
        }
    }

    /// Creates an engine over an existing layout.
    ///
    /// Free mode keeps positions as authored. Templated modes snap each result,
    /// in list order, to its nearest slot not already taken.
    pub fn with_results(
        mode: PlacementMode,
        results: Vec<DiagnosisResultTemplate>,
    ) -> Result<Self, PlacementError> {
        let mut engine = Self {
            mode: PlacementMode::Free,
            results,
            drag: DragState::default(),
        };
        engine.set_mode(mode)?;
        Ok(engine)
    }

    /// Snaps an existing template list into `mode`, in list order.
    pub fn layout(
        mode: PlacementMode,
        results: Vec<DiagnosisResultTemplate>,
    ) -> Result<Vec<DiagnosisResultTemplate>, PlacementError> {
        Ok(Self::with_results(mode, results)?.into_results())
    }

    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    pub fn results(&self) -> &[DiagnosisResultTemplate] {
        &self.results
    }

    pub fn into_results(self) -> Vec<DiagnosisResultTemplate> {
        self.results
    }

    /// Candidate slots of the active mode.
    pub fn slots(&self) -> &'static [PlacementSlot] {
        self.mode.slot_positions()
    }

    /// Slots not occupied by any result.
    pub fn free_slots(&self) -> Vec<PlacementSlot> {
        free_slots(self.mode, &self.results, None)
    }

    /// True if a templated grid is at capacity. Free mode is never full.
    pub fn is_full(&self) -> bool {
        self.mode
            .capacity()
            .map_or(false, |capacity| self.results.len() >= capacity)
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    /// Adds a new result with a generated id.
    ///
    /// Templated modes place it on the first free slot; free mode at the origin.
    pub fn add_result(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<&DiagnosisResultTemplate, PlacementError> {
        let template = DiagnosisResultTemplate::new(TemplateId::generate(), name, 0.0, 0.0)
            .with_description(description);
        let position = if self.mode.is_templated() {
            self.free_slots().first().copied()
        } else {
            Some(CoordinatePoint::ORIGIN)
        };
        self.insert(template, position)
    }

    /// Adds a prepared template near its own position.
    ///
    /// Templated modes snap it to the nearest free slot; free mode clamps it.
    pub fn add_template(
        &mut self,
        template: DiagnosisResultTemplate,
    ) -> Result<&DiagnosisResultTemplate, PlacementError> {
        let position = if self.mode.is_templated() {
            nearest_free_slot(&template.position(), self.mode, &self.results, None)
        } else {
            Some(template.position())
        };
        self.insert(template, position)
    }

    fn insert(
        &mut self,
        mut template: DiagnosisResultTemplate,
        position: Option<CoordinatePoint>,
    ) -> Result<&DiagnosisResultTemplate, PlacementError> {
        Self::check_capacity(self.mode, self.results.len() + 1)?;
        let position = position.ok_or(PlacementError::CapacityExceeded {
            mode: self.mode,
            capacity: self.mode.capacity().unwrap_or(self.results.len()),
        })?;

        template.move_to(position);
        self.results.push(template);
        Ok(&self.results[self.results.len() - 1])
    }

    /// Removes a result. Removing the dragged result ends the drag.
    pub fn remove_result(&mut self, id: &TemplateId) -> Result<DiagnosisResultTemplate, PlacementError> {
        let index = self.index_of(id)?;
        if self.drag.active().map(|d| &d.result_id) == Some(id) {
            self.drag.finish()?;
        }
        Ok(self.results.remove(index))
    }

    /// Switches modes, re-snapping every result in list order.
    ///
    /// Fails without changes when there are more results than the new grid holds.
    pub fn set_mode(&mut self, mode: PlacementMode) -> Result<(), PlacementError> {
        Self::check_capacity(mode, self.results.len())?;
        if self.drag.phase() == DragPhase::Dragging {
            self.cancel_drag()?;
        }

        if mode.is_templated() {
            let mut placed: Vec<DiagnosisResultTemplate> = Vec::with_capacity(self.results.len());
            for result in &self.results {
                let slot = nearest_free_slot(&result.position(), mode, &placed, None).ok_or(
                    PlacementError::CapacityExceeded {
                        mode,
                        capacity: mode.slot_positions().len(),
                    },
                )?;
                let mut snapped = result.clone();
                snapped.move_to(slot);
                placed.push(snapped);
            }
            self.results = placed;
        }

        debug!(mode = %mode, results = self.results.len(), "Placement mode changed");
        self.mode = mode;
        Ok(())
    }

    /// Starts dragging a result (`Idle → Dragging`).
    pub fn begin_drag(&mut self, id: &TemplateId) -> Result<(), PlacementError> {
        let index = self.index_of(id)?;
        let origin = self.results[index].position();
        self.drag.begin(id.clone(), origin)?;
        Ok(())
    }

    /// Live position update while dragging; nothing is committed to a slot.
    pub fn drag_to(&mut self, point: CoordinatePoint) -> Result<CoordinatePoint, PlacementError> {
        let id = self.dragged_id()?;
        let index = self.index_of(&id)?;
        self.results[index].move_to(point);
        Ok(self.results[index].position())
    }

    /// Releases the drag (`Dragging → Idle`).
    ///
    /// `None` means the pointer left the grid and is treated as a cancel.
    pub fn release(&mut self, dropped: Option<CoordinatePoint>) -> Result<DropOutcome, PlacementError> {
        let drag = self.drag.finish()?;
        let index = self.index_of(&drag.result_id)?;

        let outcome = place_on_drop(&drag.result_id, drag.origin, dropped, self.mode, &self.results);
        if outcome.is_reverted() {
            debug!(result_id = %drag.result_id, "No free slot, reverting drop");
        }

        self.results[index].move_to(outcome.position());
        Ok(outcome)
    }

    /// Cancels the drag, restoring the pre-drag position.
    pub fn cancel_drag(&mut self) -> Result<DropOutcome, PlacementError> {
        self.release(None)
    }

    /// Full drag cycle in one call.
    pub fn drop_result(
        &mut self,
        id: &TemplateId,
        dropped: CoordinatePoint,
    ) -> Result<DropOutcome, PlacementError> {
        self.begin_drag(id)?;
        self.release(Some(dropped))
    }

    fn dragged_id(&self) -> Result<TemplateId, PlacementError> {
        self.drag
            .active()
            .map(|d| d.result_id.clone())
            .ok_or_else(|| {
                PlacementError::InvalidTransition(ValidationError::invalid_format(
                    "drag_state",
                    "no result is being dragged",
                ))
            })
    }

    fn index_of(&self, id: &TemplateId) -> Result<usize, PlacementError> {
        self.results
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| PlacementError::ResultNotFound(id.clone()))
    }

    fn check_capacity(mode: PlacementMode, count: usize) -> Result<(), PlacementError> {
        match mode.capacity() {
            Some(capacity) if count > capacity => {
                Err(PlacementError::CapacityExceeded { mode, capacity })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
