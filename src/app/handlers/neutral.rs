//! Zeiger-Handler des Neutral-Modus: Auswählen, Verschieben, Verbinden, Linienpunkte ziehen.

use glam::Vec2;

use crate::app::mode::{DrawState, EditorMode, LineMoveState, NeutralState};
use crate::app::use_cases;
use crate::app::EditorSession;
use crate::core::{ObjectRef, PortDirection, PortRef};
use crate::scene::{HitDetail, PickFilter, PickQuery, SceneBackend};

/// Klick: Treffer ersetzt die Auswahl und bestimmt den nächsten Unterzustand.
pub fn press(session: &mut EditorSession, scene: &mut dyn SceneBackend, screen: Vec2) {
    // Eine verpasste Freigabe beendet die alte Geste
    if session.mode().neutral() != Some(&NeutralState::Exam) {
        session.set_neutral_type(scene, NeutralState::Exam);
    }

    // Erneuter Klick auf dieselbe Stelle greift das nächste nicht ausgewählte Objekt dahinter
    let Some(hit) = session.pick(scene, screen, PickQuery::new(PickFilter::Any)) else {
        session.selection.clear();
        return;
    };
    session.selection.select_only(hit.object);

    if session.is_read_only() {
        return;
    }

    match (hit.object, hit.detail) {
        (ObjectRef::Element(_), HitDetail::Port(port))
            if port.direction == PortDirection::Output =>
        {
            begin_draw(session, scene, port, hit.point);
        }
        (ObjectRef::Element(element), _) => {
            session.set_neutral_type(scene, NeutralState::MoveElement { element });
        }
        (ObjectRef::Line(line), HitDetail::Line(detail)) => {
            session.set_neutral_type(
                scene,
                NeutralState::MoveLine {
                    line,
                    detail,
                    state: LineMoveState::Tracking,
                },
            );
        }
        (ObjectRef::Line(_), _) => {}
    }
}

/// Zeigerbewegung im aktuellen Neutral-Unterzustand.
pub fn pointer_move(session: &mut EditorSession, scene: &mut dyn SceneBackend, screen: Vec2) {
    let Some(state) = session.mode().neutral().copied() else {
        return;
    };

    match state {
        NeutralState::Exam => {}
        NeutralState::MoveElement { element } => {
            let position = session.to_model_space(scene, screen, false);
            if let Err(e) = use_cases::moving::move_element(session, scene, element, position) {
                log::warn!("Element nicht verschoben: {}", e);
            }
        }
        NeutralState::Draw { source, .. } => update_draw(session, scene, source, screen),
        NeutralState::MoveLine { line, detail, .. } => {
            let position = session.to_model_space(scene, screen, false);
            let allowed = session.diagram.manipulate_line_point(line, detail, position);
            if allowed {
                scene.object_changed(ObjectRef::Line(line));
            }
            let state = if allowed {
                LineMoveState::Tracking
            } else {
                LineMoveState::Blocked
            };
            *session.mode_mut() = EditorMode::Neutral(NeutralState::MoveLine {
                line,
                detail,
                state,
            });
        }
    }
}

/// Freigabe: Geste abschließen und zurück nach Exam.
pub fn release(session: &mut EditorSession, scene: &mut dyn SceneBackend) {
    let Some(state) = session.mode().neutral().copied() else {
        return;
    };

    match state {
        NeutralState::Exam => return,
        NeutralState::Draw {
            source,
            state: DrawState::Valid(target),
        } => {
            if let Err(e) = use_cases::editing::connect(session, scene, source, target) {
                log::warn!("Linie nicht erstellt: {}", e);
            }
        }
        NeutralState::Draw { state, .. } => {
            log::debug!("Linie verworfen ({:?})", state);
        }
        NeutralState::MoveElement { .. } | NeutralState::MoveLine { .. } => {}
    }

    session.set_neutral_type(scene, NeutralState::Exam);
}

/// Ankerpunkt der Rückmeldelinie: Ausgang, um `draw_standoff` nach außen versetzt.
fn draw_anchor(session: &EditorSession, source: PortRef) -> Option<Vec2> {
    let element = session.diagram.element(source.element)?;
    let port = element.port_position(source.direction, source.index)?;
    Some(port + element.port_outward(source.direction) * session.options.draw_standoff)
}

fn begin_draw(
    session: &mut EditorSession,
    scene: &mut dyn SceneBackend,
    source: PortRef,
    cursor: Vec2,
) {
    session.set_neutral_type(
        scene,
        NeutralState::Draw {
            source,
            state: DrawState::Invalid,
        },
    );
    if let Some(anchor) = draw_anchor(session, source) {
        scene.show_feedback_line(anchor, cursor);
    }
    log::debug!("Linie wird von {:?} aufgezogen", source);
}

fn update_draw(
    session: &mut EditorSession,
    scene: &mut dyn SceneBackend,
    source: PortRef,
    screen: Vec2,
) {
    let cursor = session.to_model_space(scene, screen, true);
    if let Some(anchor) = draw_anchor(session, source) {
        scene.show_feedback_line(anchor, cursor);
    }

    session.selection.select_only(ObjectRef::Element(source.element));
    let hit = session.pick(scene, screen, PickQuery::new(PickFilter::PortBearing));

    let state = match hit.map(|hit| hit.detail) {
        Some(HitDetail::Port(port))
            if port.element != source.element && port.direction == PortDirection::Input =>
        {
            if session.diagram.input_port_occupied(port) {
                DrawState::Occupied
            } else {
                DrawState::Valid(port)
            }
        }
        _ => DrawState::Invalid,
    };

    if let DrawState::Valid(target) = state {
        session.selection.add(ObjectRef::Element(target.element));
    }
    *session.mode_mut() = EditorMode::Neutral(NeutralState::Draw { source, state });
}
