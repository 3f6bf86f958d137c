//! Zeiger-Handler des MoveGroup-Modus: Gruppe sammeln und starr verschieben.

use glam::Vec2;

use crate::app::mode::{EditorMode, MoveGroupState};
use crate::app::use_cases;
use crate::app::EditorSession;
use crate::scene::{PickFilter, PickQuery, SceneBackend};

/// Nicht-exklusiver Pick: Treffer kommt zur Gruppe, danach beginnt der Drag.
pub fn press(session: &mut EditorSession, scene: &mut dyn SceneBackend, screen: Vec2) {
    match session.mode() {
        EditorMode::MoveGroup(MoveGroupState::Idle | MoveGroupState::Ready) => {}
        _ => return,
    }

    if let Some(hit) = session.pick(scene, screen, PickQuery::new(PickFilter::PortBearing)) {
        session.selection.add(hit.object);
    }

    let anchor = session.to_model_space(scene, screen, true);
    let offsets = session.group_offsets(anchor);
    log::debug!("Gruppen-Drag mit {} Elementen", offsets.len());
    *session.mode_mut() = EditorMode::MoveGroup(MoveGroupState::Dragging { offsets });
}

/// Jedes Gruppenelement folgt dem Cursor (ohne Snap) mit festem Versatz.
pub fn pointer_move(session: &mut EditorSession, scene: &mut dyn SceneBackend, screen: Vec2) {
    let EditorMode::MoveGroup(MoveGroupState::Dragging { offsets }) = session.mode() else {
        return;
    };
    let offsets = offsets.clone();
    let cursor = session.to_model_space(scene, screen, true);
    use_cases::moving::move_group(session, scene, &offsets, cursor);
}

/// Freigabe beendet den Drag, die Gruppe bleibt bereit.
pub fn release(session: &mut EditorSession) {
    if let EditorMode::MoveGroup(MoveGroupState::Dragging { .. }) = session.mode() {
        *session.mode_mut() = EditorMode::MoveGroup(MoveGroupState::Ready);
    }
}
