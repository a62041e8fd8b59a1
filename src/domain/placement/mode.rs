//! Placement modes and their fixed slot grids.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{CoordinatePoint, ValidationError};

/// A candidate anchor position on a fixed grid.
pub type PlacementSlot = CoordinatePoint;

static TEMPLATE_4_SLOTS: Lazy<Vec<PlacementSlot>> = Lazy::new(|| {
    vec![
        PlacementSlot { x: 0.5, y: 0.5 },
        PlacementSlot { x: -0.5, y: 0.5 },
        PlacementSlot { x: 0.5, y: -0.5 },
        PlacementSlot { x: -0.5, y: -0.5 },
    ]
});

// Two per quadrant, stacked vertically at the quadrant's x center.
static TEMPLATE_8_SLOTS: Lazy<Vec<PlacementSlot>> = Lazy::new(|| {
    vec![
        PlacementSlot { x: 0.5, y: 0.75 },
        PlacementSlot { x: 0.5, y: 0.25 },
        PlacementSlot { x: -0.5, y: 0.75 },
        PlacementSlot { x: -0.5, y: 0.25 },
        PlacementSlot { x: 0.5, y: -0.25 },
        PlacementSlot { x: 0.5, y: -0.75 },
        PlacementSlot { x: -0.5, y: -0.25 },
        PlacementSlot { x: -0.5, y: -0.75 },
    ]
});

static TEMPLATE_16_SLOTS: Lazy<Vec<PlacementSlot>> = Lazy::new(|| {
    (0..4)
        .flat_map(|i| {
            (0..4).map(move |j| PlacementSlot {
                x: -0.75 + j as f64 * 0.5,
                y: 0.75 - i as f64 * 0.5,
            })
        })
        .collect()
});

/// How results are laid out on the authoring canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementMode {
    #[default]
    #[serde(rename = "free")]
    Free,
    #[serde(rename = "template-4")]
    Template4,
    #[serde(rename = "template-8")]
    Template8,
    #[serde(rename = "template-16")]
    Template16,
}

impl PlacementMode {
    /// All modes, free first.
    pub const ALL: [PlacementMode; 4] = [
        PlacementMode::Free,
        PlacementMode::Template4,
        PlacementMode::Template8,
        PlacementMode::Template16,
    ];

    /// Maximum number of results, or `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            PlacementMode::Free => None,
            PlacementMode::Template4 => Some(4),
            PlacementMode::Template8 => Some(8),
            PlacementMode::Template16 => Some(16),
        }
    }

    /// Candidate anchors for this mode; empty for free placement.
    pub fn slot_positions(&self) -> &'static [PlacementSlot] {
        match self {
            PlacementMode::Free => &[],
            PlacementMode::Template4 => TEMPLATE_4_SLOTS.as_slice(),
            PlacementMode::Template8 => TEMPLATE_8_SLOTS.as_slice(),
            PlacementMode::Template16 => TEMPLATE_16_SLOTS.as_slice(),
        }
    }

    /// True for the fixed-grid modes.
    pub fn is_templated(&self) -> bool {
        !matches!(self, PlacementMode::Free)
    }

    /// Wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementMode::Free => "free",
            PlacementMode::Template4 => "template-4",
            PlacementMode::Template8 => "template-8",
            PlacementMode::Template16 => "template-16",
        }
    }
}

impl fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlacementMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlacementMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "placement_mode",
                    format!("expected free, template-4, template-8 or template-16, got '{}'", s),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(slots: &[PlacementSlot], x: f64, y: f64) -> bool {
        slots.iter().any(|s| (s.x - x).abs() < 1e-12 && (s.y - y).abs() < 1e-12)
    }

    #[test]
    fn template_4_is_quadrant_centers() {
        let slots = PlacementMode::Template4.slot_positions();
        assert_eq!(slots.len(), 4);
        for (x, y) in [(0.5, 0.5), (-0.5, 0.5), (0.5, -0.5), (-0.5, -0.5)] {
            assert!(contains(slots, x, y), "missing ({}, {})", x, y);
        }
    }

    #[test]
    fn template_8_has_two_per_quadrant() {
        let slots = PlacementMode::Template8.slot_positions();
        assert_eq!(slots.len(), 8);
        for (sx, sy) in [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)] {
            let in_quadrant = slots
                .iter()
                .filter(|s| s.x * sx > 0.0 && s.y * sy > 0.0)
                .count();
            assert_eq!(in_quadrant, 2);
        }
        assert!(contains(slots, 0.5, 0.75));
        assert!(contains(slots, 0.5, 0.25));
    }

    #[test]
    fn template_16_is_row_major_grid() {
        let slots = PlacementMode::Template16.slot_positions();
        assert_eq!(slots.len(), 16);
        assert_eq!(slots[0], PlacementSlot { x: -0.75, y: 0.75 });
        assert_eq!(slots[1], PlacementSlot { x: -0.25, y: 0.75 });
        assert_eq!(slots[4], PlacementSlot { x: -0.75, y: 0.25 });
        assert_eq!(slots[15], PlacementSlot { x: 0.75, y: -0.75 });
    }

    #[test]
    fn free_has_no_slots_and_no_capacity() {
        assert!(PlacementMode::Free.slot_positions().is_empty());
        assert_eq!(PlacementMode::Free.capacity(), None);
        assert!(!PlacementMode::Free.is_templated());
    }

    #[test]
    fn capacity_matches_slot_count() {
        for mode in PlacementMode::ALL.into_iter().filter(PlacementMode::is_templated) {
            assert_eq!(mode.capacity(), Some(mode.slot_positions().len()));
        }
    }

    #[test]
    fn parses_and_serializes_wire_names() {
        assert_eq!("template-8".parse::<PlacementMode>().unwrap(), PlacementMode::Template8);
        assert!("grid".parse::<PlacementMode>().is_err());
        assert_eq!(
            serde_json::to_string(&PlacementMode::Template16).unwrap(),
            "\"template-16\""
        );
        let mode: PlacementMode = serde_json::from_str("\"free\"").unwrap();
        assert_eq!(mode, PlacementMode::Free);
    }
}
