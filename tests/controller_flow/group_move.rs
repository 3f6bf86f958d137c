use block_diagram_editor::{EditorIntent, EditorMode, ModeKind, MoveGroupState, ObjectRef};
use glam::Vec2;

use super::common::Harness;

#[test]
fn test_group_collect_and_drag_with_modifier() {
    let (mut harness, ids) =
        Harness::with_elements(&[Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0)]);
    let (a, b) = (ids[0], ids[1]);

    harness.send(EditorIntent::GroupModifierPressed);
    assert_eq!(harness.session.mode(), &EditorMode::MoveGroup(MoveGroupState::Idle));

    harness.click(Vec2::new(0.0, 0.0));
    assert_eq!(harness.session.mode(), &EditorMode::MoveGroup(MoveGroupState::Ready));
    harness.click(Vec2::new(2.0, 0.0));
    assert!(harness.session.selection.contains(ObjectRef::Element(a)));
    assert!(harness.session.selection.contains(ObjectRef::Element(b)));

    // Druck ins Leere startet den Drag der ganzen Gruppe
    harness.press(Vec2::new(1.0, 0.0));
    assert_eq!(
        harness.session.mode(),
        &EditorMode::MoveGroup(MoveGroupState::Dragging {
            offsets: vec![(a, Vec2::new(-1.0, 0.0)), (b, Vec2::new(1.0, 0.0))],
        })
    );
    harness.move_to(Vec2::new(3.0, 1.0));

    assert_eq!(harness.position_of(a), Vec2::new(2.0, 1.0));
    assert_eq!(harness.position_of(b), Vec2::new(4.0, 1.0));

    harness.release(Vec2::new(3.0, 1.0));
    harness.send(EditorIntent::GroupModifierReleased);

    harness.assert_reset();
    assert_eq!(harness.position_of(a), Vec2::new(2.0, 1.0));
    assert_eq!(harness.position_of(b), Vec2::new(4.0, 1.0));
}

#[test]
fn test_group_drag_ignores_snap() {
    let (mut harness, ids) = Harness::with_elements(&[Vec2::new(0.0, 0.0)]);
    harness.send(EditorIntent::GroupModifierPressed);

    harness.press(Vec2::new(0.0, 0.0));
    harness.move_to(Vec2::new(0.75, 0.125));

    let position = harness.position_of(ids[0]);
    assert!((position - Vec2::new(0.75, 0.125)).length() < 1e-4);
}

#[test]
fn test_group_confirm_cycle() {
    let (mut harness, ids) = Harness::with_elements(&[Vec2::new(0.0, 0.0)]);
    harness.set_mode(ModeKind::MoveGroup);

    harness.confirm();
    assert_eq!(harness.session.mode(), &EditorMode::MoveGroup(MoveGroupState::Ready));

    harness.press(Vec2::new(0.0, 0.0));
    harness.move_to(Vec2::new(1.0, 1.0));
    harness.release(Vec2::new(1.0, 1.0));
    assert_eq!(harness.position_of(ids[0]), Vec2::new(1.0, 1.0));

    harness.confirm();
    assert!(matches!(
        harness.session.mode(),
        EditorMode::MoveGroup(MoveGroupState::Dragging { .. })
    ));

    harness.confirm();
    harness.assert_reset();
}

#[test]
fn test_stray_modifier_release_is_ignored() {
    let (mut harness, ids) = Harness::with_elements(&[Vec2::new(0.0, 0.0)]);
    harness.click(Vec2::new(0.0, 0.0));
    let logged = harness.session.command_log.len();

    harness.send(EditorIntent::GroupModifierReleased);

    assert_eq!(harness.session.command_log.len(), logged);
    assert_eq!(harness.session.mode_kind(), ModeKind::Neutral);
    assert_eq!(
        harness.session.selection.primary(),
        Some(ObjectRef::Element(ids[0]))
    );
}

#[test]
fn test_modifier_outside_neutral_is_ignored() {
    let (mut harness, _) = Harness::with_elements(&[Vec2::new(0.0, 0.0)]);
    harness.set_mode(ModeKind::Rotate);

    harness.send(EditorIntent::GroupModifierPressed);

    assert_eq!(harness.session.mode_kind(), ModeKind::Rotate);
}
