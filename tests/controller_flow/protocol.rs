use approx::assert_relative_eq;
use block_diagram_editor::{
    EditorCommand, EditorIntent, EditorNotification, ModeKind, NeutralType, ObjectRef,
};
use glam::Vec2;

use super::common::Harness;

const ALL_MODES: [ModeKind; 7] = [
    ModeKind::Neutral,
    ModeKind::Create,
    ModeKind::Delete,
    ModeKind::Rotate,
    ModeKind::AddBreakpoint,
    ModeKind::RemoveBreakpoint,
    ModeKind::MoveGroup,
];

#[test]
fn test_cancel_resets_from_every_mode_mid_gesture() {
    for mode in ALL_MODES {
        let (mut harness, _, _, line) = Harness::connected_pair();
        harness
            .session
            .diagram
            .insert_breakpoint(line, 0, Vec2::new(2.0, 1.0))
            .expect("Knickpunkt erwartet");
        let elements_before = harness.session.diagram.element_count();

        harness.set_mode(mode);
        // Ein Klick in Create würde das Element bereits übernehmen
        if mode != ModeKind::Create {
            harness.press(Vec2::new(0.0, 0.0));
        }
        harness.move_to(Vec2::new(2.0, 1.0));
        harness.cancel();

        harness.assert_reset();
        assert_eq!(
            harness.session.diagram.element_count(),
            elements_before,
            "Modus {mode:?}"
        );
        assert!(
            harness.session.diagram.check_invariants().is_ok(),
            "Modus {mode:?}"
        );
    }
}

#[test]
fn test_invariants_hold_after_gesture_sequence() {
    let (mut harness, _, _, _) = Harness::connected_pair();

    // Anlegen, belegten Eingang anfahren, drehen, Knickpunkt setzen, löschen
    harness.set_mode(ModeKind::Create);
    harness.move_to(Vec2::new(0.0, 3.0));
    harness.press(Vec2::new(0.0, 3.0));
    harness.press(Vec2::new(0.5, 3.0));
    harness.move_to(Vec2::new(3.5, 0.0));
    harness.release(Vec2::new(3.5, 0.0));
    harness.set_mode(ModeKind::Rotate);
    harness.click(Vec2::new(4.0, 0.0));
    harness.confirm();
    harness.set_mode(ModeKind::AddBreakpoint);
    harness.click(Vec2::new(2.0, 0.0));
    harness.set_mode(ModeKind::Delete);
    harness.click(Vec2::new(0.0, 0.0));
    harness.confirm();
    harness.cancel();

    let diagram = &harness.session.diagram;
    assert_eq!(diagram.element_count(), 2);
    assert_eq!(diagram.line_count(), 0);
    assert!(diagram.check_invariants().is_ok());
    harness.assert_reset();
}

#[test]
fn test_cancel_gesture_records_three_commands() {
    let (mut harness, _) = Harness::with_elements(&[Vec2::new(0.0, 0.0)]);

    harness.cancel();

    let logged: Vec<_> = harness.session.command_log.entries().cloned().collect();
    assert_eq!(
        logged,
        vec![
            EditorCommand::Cancel,
            EditorCommand::ClearSelection,
            EditorCommand::ForgetPick,
        ]
    );
}

#[test]
fn test_snap_distance_is_adjusted_to_grid() {
    let (mut harness, ids) = Harness::with_elements(&[Vec2::new(0.0, 0.0)]);

    harness.send(EditorIntent::SnapDistanceChanged {
        distance: [0.3, 0.3],
    });
    let snap = harness.session.grid.snap_distance();
    assert_relative_eq!(snap.x, 1.0 / 3.0, epsilon = 1e-5);
    assert_relative_eq!(snap.y, 1.0 / 3.0, epsilon = 1e-5);

    harness.press(Vec2::new(0.0, 0.0));
    harness.move_to(Vec2::new(0.4, 0.0));
    assert_relative_eq!(harness.position_of(ids[0]).x, 1.0 / 3.0, epsilon = 1e-5);
}

#[test]
fn test_snap_toggle_disables_quantization() {
    let (mut harness, ids) = Harness::with_elements(&[Vec2::new(0.0, 0.0)]);
    harness.send(EditorIntent::SnapToggled { enabled: false });

    harness.press(Vec2::new(0.0, 0.0));
    harness.move_to(Vec2::new(0.75, 0.125));

    let position = harness.position_of(ids[0]);
    assert!((position - Vec2::new(0.75, 0.125)).length() < 1e-4);
}

#[test]
fn test_invalid_grid_cell_size_is_rejected() {
    let (mut harness, _) = Harness::with_elements(&[]);
    let before = harness.session.grid.cell_size();

    let result = harness.controller.handle_intent(
        &mut harness.session,
        &mut harness.scene,
        EditorIntent::GridCellSizeChanged { size: [0.0, 1.0] },
    );

    assert!(result.is_err());
    assert_eq!(harness.session.grid.cell_size(), before);
}

#[test]
fn test_mode_switch_and_cancel_notify() {
    let (mut harness, _) = Harness::with_elements(&[Vec2::new(0.0, 0.0)]);

    harness.set_mode(ModeKind::Delete);
    harness.cancel();

    assert_eq!(
        harness.session.take_notifications(),
        vec![
            EditorNotification::ModeChanged {
                from: ModeKind::Neutral,
                to: ModeKind::Delete,
            },
            EditorNotification::ModeChanged {
                from: ModeKind::Delete,
                to: ModeKind::Neutral,
            },
        ]
    );
}

#[test]
fn test_neutral_drag_notifies_type_changes() {
    let (mut harness, _) = Harness::with_elements(&[Vec2::new(0.0, 0.0)]);

    harness.click(Vec2::new(0.0, 0.0));

    assert_eq!(
        harness.session.take_notifications(),
        vec![
            EditorNotification::NeutralTypeChanged {
                from: NeutralType::Exam,
                to: NeutralType::MoveElement,
            },
            EditorNotification::NeutralTypeChanged {
                from: NeutralType::MoveElement,
                to: NeutralType::Exam,
            },
        ]
    );
}

#[test]
fn test_read_only_press_only_selects() {
    let (mut harness, a, _, _) = Harness::connected_pair();
    harness.send(EditorIntent::ReadOnlyChanged { read_only: true });

    harness.press(Vec2::new(0.0, 0.0));
    harness.move_to(Vec2::new(1.0, 1.0));
    harness.release(Vec2::new(1.0, 1.0));
    harness.set_mode(ModeKind::Delete);

    assert!(harness.session.is_read_only());
    assert_eq!(harness.session.neutral_type(), Some(NeutralType::Exam));
    assert_eq!(harness.position_of(a), Vec2::new(0.0, 0.0));
    assert_eq!(harness.session.selection.primary(), Some(ObjectRef::Element(a)));
}

#[test]
fn test_non_interactive_session_ignores_confirm() {
    let (mut harness, a, _, _) = Harness::connected_pair();
    harness.set_mode(ModeKind::Delete);
    harness.click(Vec2::new(0.0, 0.0));
    harness.send(EditorIntent::InteractiveChanged { interactive: false });

    harness.confirm();

    assert!(harness.session.diagram.element(a).is_some());
}
