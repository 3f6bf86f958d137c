//! Zeiger-Handler des Create-Modus: ausstehendes Element folgt dem Cursor, Klick platziert.

use glam::Vec2;

use crate::app::mode::{CreateState, EditorMode};
use crate::app::use_cases;
use crate::app::{EditorSession, ModeKind};
use crate::core::{ElementId, ObjectRef};
use crate::scene::SceneBackend;

fn pending_element(session: &EditorSession) -> Option<ElementId> {
    match session.mode() {
        EditorMode::Create(state) => Some(state.element()),
        _ => None,
    }
}

/// Bewegt das ausstehende Element auf den eingerasteten Cursor und zeigt es an.
pub fn pointer_move(session: &mut EditorSession, scene: &mut dyn SceneBackend, screen: Vec2) {
    let Some(id) = pending_element(session) else {
        return;
    };
    let position = session.to_model_space(scene, screen, false);
    if let Err(e) = use_cases::moving::move_element(session, scene, id, position) {
        log::warn!("Ausstehendes Element nicht verschoben: {}", e);
        return;
    }
    *session.mode_mut() = EditorMode::Create(CreateState::Shown(id));
}

/// Platziert das Element, selektiert es und verlässt den Create-Modus.
pub fn press(session: &mut EditorSession, scene: &mut dyn SceneBackend, screen: Vec2) {
    let Some(id) = pending_element(session) else {
        return;
    };
    let position = session.to_model_space(scene, screen, false);
    if let Err(e) = use_cases::moving::move_element(session, scene, id, position) {
        log::warn!("Element nicht platziert: {}", e);
        return;
    }

    *session.mode_mut() = EditorMode::Create(CreateState::Shown(id));
    session.selection.select_only(ObjectRef::Element(id));
    log::info!("Element {:?} platziert bei {:?}", id, position);
    session.set_mode(scene, ModeKind::Neutral);
}
