use block_diagram_editor::{
    AddBreakpointState, EditorMode, LineId, ModeKind, RemoveBreakpointState,
};
use glam::Vec2;

use super::common::Harness;

fn breakpoints(harness: &Harness, line: LineId) -> Vec<Vec2> {
    harness
        .session
        .diagram
        .line(line)
        .map(|l| l.breakpoints.clone())
        .expect("Linie erwartet")
}

/// Verbundenes Paar mit einem Knickpunkt bei (2,1).
fn pair_with_breakpoint() -> (Harness, LineId) {
    let (mut harness, _, _, line) = Harness::connected_pair();
    harness
        .session
        .diagram
        .insert_breakpoint(line, 0, Vec2::new(2.0, 1.0))
        .expect("Knickpunkt erwartet");
    (harness, line)
}

#[test]
fn test_add_breakpoint_press_drag_release() {
    let (mut harness, _, _, line) = Harness::connected_pair();
    harness.set_mode(ModeKind::AddBreakpoint);

    harness.press(Vec2::new(2.2, 0.1));
    assert_eq!(
        harness.session.mode(),
        &EditorMode::AddBreakpoint(AddBreakpointState::Placing { line, index: 0 })
    );
    assert_eq!(breakpoints(&harness, line), vec![Vec2::new(2.0, 0.0)]);

    harness.move_to(Vec2::new(2.0, 1.4));
    assert_eq!(breakpoints(&harness, line), vec![Vec2::new(2.0, 1.5)]);

    harness.release(Vec2::new(2.0, 1.4));
    assert_eq!(
        harness.session.mode(),
        &EditorMode::AddBreakpoint(AddBreakpointState::Idle)
    );
    assert!(harness.session.selection.is_empty());
    assert_eq!(breakpoints(&harness, line), vec![Vec2::new(2.0, 1.5)]);
}

#[test]
fn test_add_breakpoint_press_beside_line_does_nothing() {
    let (mut harness, _, _, line) = Harness::connected_pair();
    harness.set_mode(ModeKind::AddBreakpoint);

    harness.click(Vec2::new(2.0, 2.0));

    assert_eq!(
        harness.session.mode(),
        &EditorMode::AddBreakpoint(AddBreakpointState::Idle)
    );
    assert!(breakpoints(&harness, line).is_empty());
}

#[test]
fn test_cancel_while_placing_removes_provisional_breakpoint() {
    let (mut harness, _, _, line) = Harness::connected_pair();
    harness.set_mode(ModeKind::AddBreakpoint);
    harness.press(Vec2::new(2.2, 0.1));

    harness.cancel();

    assert!(breakpoints(&harness, line).is_empty());
    harness.assert_reset();
}

#[test]
fn test_remove_breakpoint_after_confirm() {
    let (mut harness, line) = pair_with_breakpoint();
    harness.set_mode(ModeKind::RemoveBreakpoint);

    harness.click(Vec2::new(2.0, 1.0));
    assert_eq!(
        harness.session.mode(),
        &EditorMode::RemoveBreakpoint(RemoveBreakpointState::Candidate { line, index: 0 })
    );
    // Erst die Bestätigung entfernt
    assert_eq!(breakpoints(&harness, line).len(), 1);

    harness.confirm();

    assert!(breakpoints(&harness, line).is_empty());
    assert_eq!(
        harness.session.mode(),
        &EditorMode::RemoveBreakpoint(RemoveBreakpointState::Idle)
    );
}

#[test]
fn test_line_end_is_not_removable() {
    let (mut harness, line) = pair_with_breakpoint();
    harness.set_mode(ModeKind::RemoveBreakpoint);

    harness.click(Vec2::new(3.5, 0.0));
    assert_eq!(
        harness.session.mode(),
        &EditorMode::RemoveBreakpoint(RemoveBreakpointState::NotRemovable)
    );
    assert_eq!(harness.session.hint(), "Line end points cannot be removed");

    harness.confirm();

    assert_eq!(
        harness.session.mode(),
        &EditorMode::RemoveBreakpoint(RemoveBreakpointState::Idle)
    );
    assert_eq!(breakpoints(&harness, line), vec![Vec2::new(2.0, 1.0)]);
}

#[test]
fn test_segment_press_is_invalid_for_removal() {
    let (mut harness, line) = pair_with_breakpoint();
    harness.set_mode(ModeKind::RemoveBreakpoint);

    harness.click(Vec2::new(1.25, 0.5));

    assert_eq!(
        harness.session.mode(),
        &EditorMode::RemoveBreakpoint(RemoveBreakpointState::Invalid)
    );
    harness.confirm();
    assert_eq!(breakpoints(&harness, line).len(), 1);
}
