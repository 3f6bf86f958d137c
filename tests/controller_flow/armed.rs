use block_diagram_editor::{ArmState, EditorMode, ModeKind, ObjectRef, Orientation};
use glam::Vec2;

use super::common::Harness;

#[test]
fn test_rotate_arms_then_confirms_and_resets() {
    let (mut harness, a, _, _) = Harness::connected_pair();
    harness.set_mode(ModeKind::Rotate);

    harness.click(Vec2::new(0.0, 0.0));
    assert_eq!(
        harness.session.mode(),
        &EditorMode::Rotate(ArmState::Armed(ObjectRef::Element(a)))
    );
    assert_eq!(harness.session.selection.primary(), Some(ObjectRef::Element(a)));

    harness.confirm();
    assert_eq!(harness.session.mode(), &EditorMode::Rotate(ArmState::Idle));
    assert_eq!(
        harness.session.diagram.element(a).map(|e| e.orientation),
        Some(Orientation::Mirrored)
    );
    assert!(harness.session.diagram.check_invariants().is_ok());

    // Bestätigen ohne Ziel bricht ab
    harness.confirm();
    harness.assert_reset();
}

#[test]
fn test_armed_press_on_empty_space_disarms() {
    let (mut harness, a, _, _) = Harness::connected_pair();
    harness.set_mode(ModeKind::Rotate);
    harness.click(Vec2::new(0.0, 0.0));

    harness.click(Vec2::new(2.0, 5.0));

    assert_eq!(harness.session.mode(), &EditorMode::Rotate(ArmState::Idle));
    assert!(harness.session.selection.is_empty());
    assert_eq!(
        harness.session.diagram.element(a).map(|e| e.orientation),
        Some(Orientation::Normal)
    );
}

#[test]
fn test_delete_element_removes_its_lines() {
    let (mut harness, a, b, _) = Harness::connected_pair();
    harness.set_mode(ModeKind::Delete);

    harness.click(Vec2::new(0.0, 0.0));
    harness.confirm();

    assert_eq!(harness.session.mode(), &EditorMode::Delete(ArmState::Idle));
    assert!(harness.session.diagram.element(a).is_none());
    assert!(harness.session.diagram.element(b).is_some());
    assert_eq!(harness.session.diagram.line_count(), 0);
    assert!(harness.session.selection.is_empty());
    assert!(harness
        .scene
        .removed_objects()
        .contains(&ObjectRef::Element(a)));
}

#[test]
fn test_delete_line_keeps_elements() {
    let (mut harness, _, _, line) = Harness::connected_pair();
    harness.set_mode(ModeKind::Delete);

    harness.click(Vec2::new(2.0, 0.0));
    assert_eq!(
        harness.session.mode(),
        &EditorMode::Delete(ArmState::Armed(ObjectRef::Line(line)))
    );
    harness.confirm();

    assert_eq!(harness.session.diagram.line_count(), 0);
    assert_eq!(harness.session.diagram.element_count(), 2);
}

#[test]
fn test_rotate_ignores_lines() {
    let (mut harness, _, _, _) = Harness::connected_pair();
    harness.set_mode(ModeKind::Rotate);

    harness.click(Vec2::new(2.0, 0.0));

    assert_eq!(harness.session.mode(), &EditorMode::Rotate(ArmState::Idle));
    assert!(harness.session.selection.is_empty());
}
