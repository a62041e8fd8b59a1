//! Slot occupancy and drop resolution over a result list.
//!
//! These functions are stateless; `ResultPlacementEngine` wraps them with the
//! owned result list and drag state.

use serde::{Deserialize, Serialize};

use super::{PlacementMode, PlacementSlot};
use crate::domain::foundation::{CoordinatePoint, TemplateId};
use crate::domain::survey::DiagnosisResultTemplate;

/// A result closer than this on both axes occupies a slot.
pub const OCCUPANCY_EPSILON: f64 = 0.15;

/// Where a dropped result ended up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum DropOutcome {
    /// Free mode: the clamped drop point was assigned directly.
    Placed { position: CoordinatePoint },
    /// Templated mode: snapped to the nearest unoccupied slot.
    Snapped { position: CoordinatePoint },
    /// No free slot (or the drag was cancelled): back to the pre-drag position.
    Reverted { position: CoordinatePoint },
}

impl DropOutcome {
    /// Final position of the result.
    pub fn position(&self) -> CoordinatePoint {
        match self {
            DropOutcome::Placed { position }
            | DropOutcome::Snapped { position }
            | DropOutcome::Reverted { position } => *position,
        }
    }

    /// True if the result did not move.
    pub fn is_reverted(&self) -> bool {
        matches!(self, DropOutcome::Reverted { .. })
    }
}

/// True if any result other than `excluding` sits on the slot.
pub fn is_occupied(
    slot: &PlacementSlot,
    results: &[DiagnosisResultTemplate],
    excluding: Option<&TemplateId>,
) -> bool {
    results
        .iter()
        .filter(|r| Some(&r.id) != excluding)
        .any(|r| r.position().is_within(slot, OCCUPANCY_EPSILON))
}

/// Slots of `mode` not occupied by any result other than `excluding`.
pub fn free_slots(
    mode: PlacementMode,
    results: &[DiagnosisResultTemplate],
    excluding: Option<&TemplateId>,
) -> Vec<PlacementSlot> {
    mode.slot_positions()
        .iter()
        .filter(|slot| !is_occupied(slot, results, excluding))
        .copied()
        .collect()
}

/// The free slot nearest to `point`; the earliest slot wins on ties.
pub fn nearest_free_slot(
    point: &CoordinatePoint,
    mode: PlacementMode,
    results: &[DiagnosisResultTemplate],
    excluding: Option<&TemplateId>,
) -> Option<PlacementSlot> {
    free_slots(mode, results, excluding)
        .into_iter()
        .fold(None, |best: Option<(PlacementSlot, f64)>, slot| {
            let distance = point.distance_to(&slot);
            match best {
                Some((_, best_distance)) if distance >= best_distance => best,
                _ => Some((slot, distance)),
            }
        })
        .map(|(slot, _)| slot)
}

/// Resolves where `result` lands when released at `dropped`.
///
/// `results` is the full list, which may include `result` itself; its own
/// position never blocks a slot. `previous` is the pre-drag position used
/// for reverts. A `None` drop point is a cancelled drag.
pub fn place_on_drop(
    result: &TemplateId,
    previous: CoordinatePoint,
    dropped: Option<CoordinatePoint>,
    mode: PlacementMode,
    results: &[DiagnosisResultTemplate],
) -> DropOutcome {
    let Some(dropped) = dropped else {
        return DropOutcome::Reverted { position: previous };
    };

    if !mode.is_templated() {
        return DropOutcome::Placed {
            position: dropped.clamped(),
        };
    }

    match nearest_free_slot(&dropped, mode, results, Some(result)) {
        Some(slot) => DropOutcome::Snapped { position: slot },
        None => DropOutcome::Reverted { position: previous },
    }
}
