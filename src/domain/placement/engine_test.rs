use crate::domain::foundation::{CoordinatePoint, TemplateId};
use crate::domain::placement::{
    DragPhase, DropOutcome, PlacementError, PlacementMode, PlacementSlot, ResultPlacementEngine,
};
use crate::domain::survey::DiagnosisResultTemplate;

fn template(id: &str, x: f64, y: f64) -> DiagnosisResultTemplate {
    DiagnosisResultTemplate::new(id, format!("Result {}", id), x, y)
}

fn full_template_4() -> ResultPlacementEngine {
    ResultPlacementEngine::with_results(
        PlacementMode::Template4,
        vec![
            template("a", 0.5, 0.5),
            template("b", -0.5, 0.5),
            template("c", 0.5, -0.5),
            template("d", -0.5, -0.5),
        ],
    )
    .unwrap()
}

fn position_of(engine: &ResultPlacementEngine, id: &str) -> CoordinatePoint {
    engine
        .results()
        .iter()
        .find(|r| r.id.as_str() == id)
        .map(|r| r.position())
        .unwrap()
}

#[test]
fn add_result_fills_slots_in_order_until_capacity() {
    let mut engine = ResultPlacementEngine::new(PlacementMode::Template4);
    for name in ["One", "Two", "Three", "Four"] {
        engine.add_result(name, "").unwrap();
    }
    let positions: Vec<_> = engine.results().iter().map(|r| r.position()).collect();
    assert_eq!(positions, PlacementMode::Template4.slot_positions().to_vec());
    assert!(engine.is_full());

    let err = engine.add_result("Five", "").unwrap_err();
    assert_eq!(
        err,
        PlacementError::CapacityExceeded {
            mode: PlacementMode::Template4,
            capacity: 4
        }
    );
    assert_eq!(engine.results().len(), 4);
}

#[test]
fn free_mode_is_unbounded() {
    let mut engine = ResultPlacementEngine::new(PlacementMode::Free);
    for i in 0..20 {
        engine.add_result(format!("R{}", i), "").unwrap();
    }
    assert_eq!(engine.results().len(), 20);
    assert!(!engine.is_full());
    assert!(engine.slots().is_empty());
}

#[test]
fn with_results_rejects_overfull_grid() {
    let results = (0..5).map(|i| template(&i.to_string(), 0.0, 0.0)).collect();
    assert!(matches!(
        ResultPlacementEngine::with_results(PlacementMode::Template4, results),
        Err(PlacementError::CapacityExceeded { capacity: 4, .. })
    ));
}

#[test]
fn with_results_separates_results_sharing_a_slot() {
    let engine = ResultPlacementEngine::with_results(
        PlacementMode::Template4,
        vec![template("a", 0.5, 0.5), template("b", 0.5, 0.5)],
    )
    .unwrap();

    assert_eq!(position_of(&engine, "a"), PlacementSlot { x: 0.5, y: 0.5 });
    // (-0.5, 0.5) and (0.5, -0.5) tie, the earlier slot wins.
    assert_eq!(position_of(&engine, "b"), PlacementSlot { x: -0.5, y: 0.5 });
    assert_eq!(engine.free_slots().len(), 2);
}

#[test]
fn with_results_keeps_results_already_on_distinct_slots() {
    let engine = full_template_4();
    assert_eq!(position_of(&engine, "a"), PlacementSlot { x: 0.5, y: 0.5 });
    assert_eq!(position_of(&engine, "b"), PlacementSlot { x: -0.5, y: 0.5 });
    assert_eq!(position_of(&engine, "c"), PlacementSlot { x: 0.5, y: -0.5 });
    assert_eq!(position_of(&engine, "d"), PlacementSlot { x: -0.5, y: -0.5 });
    assert!(engine.free_slots().is_empty());
}

#[test]
fn with_results_snaps_off_grid_positions() {
    let engine = ResultPlacementEngine::with_results(
        PlacementMode::Template4,
        vec![template("a", 0.3, -0.6)],
    )
    .unwrap();
    assert_eq!(position_of(&engine, "a"), PlacementSlot { x: 0.5, y: -0.5 });
}

#[test]
fn add_template_snaps_to_nearest_free_slot() {
    let mut engine =
        ResultPlacementEngine::with_results(PlacementMode::Template4, vec![template("a", 0.5, 0.5)])
            .unwrap();
    let added = engine.add_template(template("b", 0.4, 0.4)).unwrap();
    // (0.5, 0.5) is taken; (-0.5, 0.5) and (0.5, -0.5) tie, the earlier slot wins.
    assert_eq!(added.position(), PlacementSlot { x: -0.5, y: 0.5 });
}

#[test]
fn drop_onto_occupied_slot_snaps_to_nearest_free_slot() {
    let mut engine = ResultPlacementEngine::with_results(
        PlacementMode::Template4,
        vec![template("a", 0.5, 0.5), template("b", -0.5, 0.5), template("c", 0.5, -0.5)],
    )
    .unwrap();

    let outcome = engine
        .drop_result(&TemplateId::from("c"), CoordinatePoint::new(0.5, 0.5))
        .unwrap();

    // c's own slot is free once c is lifted; it is nearer than (-0.5, -0.5).
    assert_eq!(outcome, DropOutcome::Snapped { position: PlacementSlot { x: 0.5, y: -0.5 } });

    engine.remove_result(&TemplateId::from("c")).unwrap();
    engine.add_template(template("e", 0.5, -0.5)).unwrap();
    let outcome = engine
        .drop_result(&TemplateId::from("e"), CoordinatePoint::new(-0.4, 0.6))
        .unwrap();
    assert!(matches!(outcome, DropOutcome::Snapped { .. }));
}

#[test]
fn drop_on_crowded_grid_returns_to_own_slot() {
    let mut engine = full_template_4();
    let before = position_of(&engine, "a");

    engine.begin_drag(&TemplateId::from("a")).unwrap();
    engine.drag_to(CoordinatePoint::new(-0.45, -0.45)).unwrap();
    // Every other slot is occupied; a's own slot is free, so it snaps home.
    let outcome = engine.release(Some(CoordinatePoint::new(-0.45, -0.45))).unwrap();
    assert_eq!(outcome.position(), before);
}

#[test]
fn cancelled_drag_restores_origin() {
    let mut engine = full_template_4();
    engine.begin_drag(&TemplateId::from("b")).unwrap();
    let live = engine.drag_to(CoordinatePoint::new(0.9, -0.9)).unwrap();
    assert_eq!(live, CoordinatePoint::new(0.9, -0.9));
    assert_eq!(position_of(&engine, "b"), live);

    let outcome = engine.cancel_drag().unwrap();
    assert!(outcome.is_reverted());
    assert_eq!(position_of(&engine, "b"), PlacementSlot { x: -0.5, y: 0.5 });
    assert_eq!(engine.drag_phase(), DragPhase::Idle);
}

#[test]
fn release_without_drag_is_invalid() {
    let mut engine = full_template_4();
    assert!(matches!(
        engine.release(Some(CoordinatePoint::ORIGIN)),
        Err(PlacementError::InvalidTransition(_))
    ));
    assert!(matches!(
        engine.drag_to(CoordinatePoint::ORIGIN),
        Err(PlacementError::InvalidTransition(_))
    ));
}

#[test]
fn begin_drag_unknown_result_fails() {
    let mut engine = full_template_4();
    assert_eq!(
        engine.begin_drag(&TemplateId::from("zzz")).unwrap_err(),
        PlacementError::ResultNotFound(TemplateId::from("zzz"))
    );
    assert_eq!(engine.drag_phase(), DragPhase::Idle);
}

#[test]
fn free_mode_drop_assigns_clamped_point() {
    let mut engine =
        ResultPlacementEngine::with_results(PlacementMode::Free, vec![template("a", 0.0, 0.0)])
            .unwrap();
    let outcome = engine
        .drop_result(&TemplateId::from("a"), CoordinatePoint { x: -1.3, y: 0.42 })
        .unwrap();
    assert_eq!(outcome, DropOutcome::Placed { position: CoordinatePoint { x: -1.0, y: 0.42 } });
    assert_eq!(position_of(&engine, "a"), CoordinatePoint { x: -1.0, y: 0.42 });
}

#[test]
fn set_mode_resnaps_without_collisions() {
    let mut engine = ResultPlacementEngine::with_results(
        PlacementMode::Free,
        vec![template("a", 0.4, 0.4), template("b", 0.45, 0.5), template("c", -0.9, -0.1)],
    )
    .unwrap();

    engine.set_mode(PlacementMode::Template4).unwrap();
    assert_eq!(engine.mode(), PlacementMode::Template4);
    assert_eq!(position_of(&engine, "a"), PlacementSlot { x: 0.5, y: 0.5 });
    assert_ne!(position_of(&engine, "b"), PlacementSlot { x: 0.5, y: 0.5 });

    let positions: Vec<_> = engine.results().iter().map(|r| r.position()).collect();
    for (i, p) in positions.iter().enumerate() {
        for q in &positions[i + 1..] {
            assert!(!p.is_within(q, 0.15));
        }
    }
}

#[test]
fn set_mode_refuses_when_over_capacity() {
    let mut engine = ResultPlacementEngine::new(PlacementMode::Template8);
    for i in 0..6 {
        engine.add_result(format!("R{}", i), "").unwrap();
    }
    let before: Vec<_> = engine.results().to_vec();

    assert!(engine.set_mode(PlacementMode::Template4).is_err());
    assert_eq!(engine.mode(), PlacementMode::Template8);
    assert_eq!(engine.results(), before.as_slice());
}

#[test]
fn set_mode_cancels_active_drag() {
    let mut engine = full_template_4();
    engine.begin_drag(&TemplateId::from("a")).unwrap();
    engine.drag_to(CoordinatePoint::new(0.0, 0.0)).unwrap();
    engine.set_mode(PlacementMode::Template16).unwrap();
    assert_eq!(engine.drag_phase(), DragPhase::Idle);
    assert_eq!(engine.results().len(), 4);
}

#[test]
fn remove_dragged_result_ends_drag() {
    let mut engine = full_template_4();
    engine.begin_drag(&TemplateId::from("d")).unwrap();
    let removed = engine.remove_result(&TemplateId::from("d")).unwrap();
    assert_eq!(removed.id.as_str(), "d");
    assert_eq!(engine.drag_phase(), DragPhase::Idle);
    assert_eq!(engine.free_slots(), vec![PlacementSlot { x: -0.5, y: -0.5 }]);
}

#[test]
fn layout_snaps_list_in_order() {
    let laid_out = ResultPlacementEngine::layout(
        PlacementMode::Template16,
        vec![template("a", -0.7, 0.7), template("b", -0.7, 0.7)],
    )
    .unwrap();
    assert_eq!(laid_out[0].position(), PlacementSlot { x: -0.75, y: 0.75 });
    assert_ne!(laid_out[1].position(), laid_out[0].position());
}
