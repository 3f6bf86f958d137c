//! Zeiger-Handler für das Einfügen und Entfernen von Knickpunkten.

use glam::Vec2;

use crate::app::mode::{AddBreakpointState, EditorMode, RemoveBreakpointState};
use crate::app::use_cases;
use crate::app::EditorSession;
use crate::core::{LineDetail, LineId, ObjectRef};
use crate::scene::{HitDetail, PickFilter, PickQuery, SceneBackend};

fn placing(session: &EditorSession) -> Option<(LineId, usize)> {
    match session.mode() {
        EditorMode::AddBreakpoint(AddBreakpointState::Placing { line, index }) => {
            Some((*line, *index))
        }
        _ => None,
    }
}

/// Klick auf eine Linie fügt einen provisorischen Knickpunkt ins nächste Segment ein.
pub fn add_press(session: &mut EditorSession, scene: &mut dyn SceneBackend, screen: Vec2) {
    let Some(hit) = session.pick(scene, screen, PickQuery::new(PickFilter::Lines)) else {
        return;
    };
    let ObjectRef::Line(line) = hit.object else {
        return;
    };

    let point = session.to_model_space(scene, screen, false);
    match use_cases::editing::insert_breakpoint_near(session, scene, line, point) {
        Ok(index) => {
            session.selection.select_only(hit.object);
            *session.mode_mut() =
                EditorMode::AddBreakpoint(AddBreakpointState::Placing { line, index });
        }
        Err(e) => log::warn!("Knickpunkt nicht eingefügt: {}", e),
    }
}

/// Provisorischer Knickpunkt folgt dem eingerasteten Cursor.
pub fn add_move(session: &mut EditorSession, scene: &mut dyn SceneBackend, screen: Vec2) {
    let Some((line, index)) = placing(session) else {
        return;
    };
    let point = session.to_model_space(scene, screen, false);
    match session.diagram.set_breakpoint(line, index, point) {
        Ok(()) => scene.object_changed(ObjectRef::Line(line)),
        Err(e) => log::warn!("Knickpunkt nicht verschoben: {}", e),
    }
}

/// Freigabe übernimmt den Knickpunkt.
pub fn add_release(session: &mut EditorSession) {
    let Some((line, index)) = placing(session) else {
        return;
    };
    session.selection.clear();
    *session.mode_mut() = EditorMode::AddBreakpoint(AddBreakpointState::Idle);
    log::info!("Knickpunkt {} in Linie {:?} gesetzt", index, line);
}

/// Klick klassifiziert den Linienpunkt; entfernt wird erst bei Bestätigung.
pub fn remove_press(session: &mut EditorSession, scene: &mut dyn SceneBackend, screen: Vec2) {
    let hit = session.pick(scene, screen, PickQuery::new(PickFilter::Lines));

    let state = match hit.map(|hit| (hit.object, hit.detail)) {
        Some((ObjectRef::Line(line), HitDetail::Line(detail))) => {
            session.selection.select_only(ObjectRef::Line(line));
            match detail {
                LineDetail::SourceEnd | LineDetail::TargetEnd => {
                    RemoveBreakpointState::NotRemovable
                }
                LineDetail::Breakpoint(index) => RemoveBreakpointState::Candidate { line, index },
                LineDetail::Segment(_) => RemoveBreakpointState::Invalid,
            }
        }
        _ => {
            session.selection.clear();
            RemoveBreakpointState::Invalid
        }
    };

    log::debug!("Knickpunkt entfernen: {:?}", state);
    *session.mode_mut() = EditorMode::RemoveBreakpoint(state);
}
