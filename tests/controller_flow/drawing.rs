use block_diagram_editor::{
    DrawState, EditorMode, LineDetail, LineMoveState, NeutralState, NeutralType, ObjectRef,
    PortRef,
};
use glam::Vec2;

use super::common::Harness;

const A_OUT: Vec2 = Vec2::new(0.5, 0.0);
const B_IN: Vec2 = Vec2::new(3.5, 0.0);

fn two_elements() -> Harness {
    Harness::with_elements(&[Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0)]).0
}

fn draw_state(harness: &Harness) -> DrawState {
    match harness.session.mode() {
        EditorMode::Neutral(NeutralState::Draw { state, .. }) => *state,
        other => panic!("Draw erwartet, war {other:?}"),
    }
}

#[test]
fn test_draw_to_free_input_creates_selected_line() {
    let mut harness = two_elements();
    let ids: Vec<_> = harness.session.diagram.elements().map(|e| e.id).collect();

    harness.press(A_OUT);
    assert_eq!(draw_state(&harness), DrawState::Invalid);
    assert_eq!(
        harness.scene.feedback_line(),
        Some((Vec2::new(0.75, 0.0), A_OUT))
    );

    harness.move_to(B_IN);
    assert_eq!(
        draw_state(&harness),
        DrawState::Valid(PortRef::input(ids[1], 0))
    );
    assert!(harness.session.selection.contains(ObjectRef::Element(ids[1])));

    harness.release(B_IN);

    assert_eq!(harness.session.neutral_type(), Some(NeutralType::Exam));
    assert!(harness.scene.feedback_line().is_none());
    let line = harness.session.diagram.lines().next().expect("Linie erwartet");
    assert_eq!(line.source, PortRef::output(ids[0], 0));
    assert_eq!(line.target, PortRef::input(ids[1], 0));
    assert_eq!(
        harness.session.selection.primary(),
        Some(ObjectRef::Line(line.id))
    );
}

#[test]
fn test_draw_onto_occupied_input_creates_no_line() {
    let (mut harness, _, _, _) = Harness::connected_pair();
    let c = harness.session.diagram.add_element(
        &Default::default(),
        Vec2::new(0.0, 3.0),
        Vec2::ONE,
    );

    harness.press(Vec2::new(0.5, 3.0));
    harness.move_to(B_IN);

    assert_eq!(draw_state(&harness), DrawState::Occupied);
    assert_eq!(harness.session.hint(), "Input port is already connected");

    harness.release(B_IN);

    assert_eq!(harness.session.diagram.line_count(), 1);
    assert!(harness.session.diagram.lines_of(c).is_empty());
    assert!(harness.session.diagram.check_invariants().is_ok());
}

#[test]
fn test_draw_onto_own_element_is_invalid() {
    let mut harness = two_elements();

    harness.press(A_OUT);
    harness.move_to(Vec2::new(-0.5, 0.0));

    assert_eq!(draw_state(&harness), DrawState::Invalid);

    harness.release(Vec2::new(-0.5, 0.0));
    assert_eq!(harness.session.diagram.line_count(), 0);
}

#[test]
fn test_draw_released_in_empty_space_is_discarded() {
    let mut harness = two_elements();

    harness.press(A_OUT);
    harness.move_to(Vec2::new(2.0, 2.0));
    assert_eq!(
        harness.scene.feedback_line(),
        Some((Vec2::new(0.75, 0.0), Vec2::new(2.0, 2.0)))
    );
    harness.release(Vec2::new(2.0, 2.0));

    assert_eq!(harness.session.diagram.line_count(), 0);
    assert!(harness.scene.feedback_line().is_none());
}

#[test]
fn test_body_drag_moves_element_to_snapped_cursor() {
    let mut harness = two_elements();
    let a = harness.session.diagram.elements().next().map(|e| e.id).expect("Element");

    harness.press(Vec2::new(0.1, 0.1));
    assert_eq!(harness.session.neutral_type(), Some(NeutralType::MoveElement));

    harness.move_to(Vec2::new(1.2, 2.7));
    assert_eq!(harness.position_of(a), Vec2::new(1.0, 2.5));

    harness.release(Vec2::new(1.2, 2.7));
    assert_eq!(harness.session.neutral_type(), Some(NeutralType::Exam));
    assert_eq!(harness.session.selection.primary(), Some(ObjectRef::Element(a)));
}

#[test]
fn test_press_in_empty_space_clears_selection() {
    let mut harness = two_elements();
    harness.click(Vec2::new(0.0, 0.0));
    assert_eq!(harness.session.selection.len(), 1);

    harness.click(Vec2::new(2.0, 5.0));

    assert!(harness.session.selection.is_empty());
}

#[test]
fn test_move_line_breakpoint_and_middle_segment() {
    let (mut harness, _, _, line) = Harness::connected_pair();
    for (index, point) in [Vec2::new(1.5, 1.0), Vec2::new(2.5, 1.0)].into_iter().enumerate() {
        harness
            .session
            .diagram
            .insert_breakpoint(line, index, point)
            .expect("Knickpunkt erwartet");
    }

    harness.press(Vec2::new(1.5, 1.0));
    harness.move_to(Vec2::new(1.5, 2.0));
    harness.release(Vec2::new(1.5, 2.0));
    let breakpoints = harness.session.diagram.line(line).map(|l| l.breakpoints.clone());
    assert_eq!(breakpoints, Some(vec![Vec2::new(1.5, 2.0), Vec2::new(2.5, 1.0)]));

    // Mittleres Segment: beide Knickpunkte folgen mit dem Segment-Mittelpunkt
    harness.press(Vec2::new(2.0, 1.5));
    assert_eq!(
        harness.session.mode(),
        &EditorMode::Neutral(NeutralState::MoveLine {
            line,
            detail: LineDetail::Segment(1),
            state: LineMoveState::Tracking,
        })
    );
    harness.move_to(Vec2::new(2.0, 3.0));
    let breakpoints = harness.session.diagram.line(line).map(|l| l.breakpoints.clone());
    assert_eq!(breakpoints, Some(vec![Vec2::new(1.5, 3.5), Vec2::new(2.5, 2.5)]));
}

#[test]
fn test_move_line_segment_touching_port_is_blocked() {
    let (mut harness, _, _, line) = Harness::connected_pair();
    harness
        .session
        .diagram
        .insert_breakpoint(line, 0, Vec2::new(1.5, 1.0))
        .expect("Knickpunkt erwartet");

    harness.press(Vec2::new(1.0, 0.5));
    harness.move_to(Vec2::new(1.0, 2.0));

    assert_eq!(
        harness.session.mode(),
        &EditorMode::Neutral(NeutralState::MoveLine {
            line,
            detail: LineDetail::Segment(0),
            state: LineMoveState::Blocked,
        })
    );
    assert_eq!(harness.session.hint(), "This part of the line is bound to a port");
    let breakpoints = harness.session.diagram.line(line).map(|l| l.breakpoints.clone());
    assert_eq!(breakpoints, Some(vec![Vec2::new(1.5, 1.0)]));
}

#[test]
fn test_second_click_picks_element_behind_selection() {
    let (mut harness, ids) =
        Harness::with_elements(&[Vec2::new(0.0, 0.0), Vec2::new(0.25, 0.0)]);
    let spot = Vec2::new(0.125, 0.25);

    harness.click(spot);
    let first = harness.session.selection.primary();
    harness.click(spot);
    let second = harness.session.selection.primary();
    harness.click(spot);
    let third = harness.session.selection.primary();

    assert!(first.is_some());
    assert_ne!(first, second);
    assert_eq!(first, third);
    for picked in [first, second] {
        assert!(ids
            .iter()
            .any(|id| picked == Some(ObjectRef::Element(*id))));
    }
    assert_eq!(harness.position_of(ids[0]), Vec2::new(0.0, 0.0));
    assert_eq!(harness.position_of(ids[1]), Vec2::new(0.25, 0.0));
}

#[test]
fn test_selected_element_output_port_still_starts_draw() {
    let (mut harness, a, _, _) = Harness::connected_pair();
    harness.click(Vec2::new(0.0, 0.0));
    assert_eq!(harness.session.selection.primary(), Some(ObjectRef::Element(a)));

    harness.press(A_OUT);

    assert_eq!(harness.session.neutral_type(), Some(NeutralType::Draw));
    assert_eq!(draw_state(&harness), DrawState::Invalid);
}
