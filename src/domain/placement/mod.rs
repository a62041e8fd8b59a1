//! Placement - Authoring-time layout of result templates on the plane.
//!
//! Templated modes offer a fixed slot grid; free mode accepts any clamped
//! position. Drops that find no free slot revert instead of failing.

mod drag;
mod engine;
mod errors;
mod mode;
mod slots;

pub use drag::{ActiveDrag, DragPhase, DragState};
pub use engine::ResultPlacementEngine;
pub use errors::PlacementError;
pub use mode::{PlacementMode, PlacementSlot};
pub use slots::{
    free_slots, is_occupied, nearest_free_slot, place_on_drop, DropOutcome, OCCUPANCY_EPSILON,
};
