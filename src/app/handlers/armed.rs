//! Zeiger-Handler für Delete und Rotate: Ziel wählen, Aktion erst bei Bestätigung.

use glam::Vec2;

use crate::app::mode::{ArmState, EditorMode};
use crate::app::{EditorSession, ModeKind};
use crate::scene::{PickFilter, PickQuery, SceneBackend};

/// Pickt ein einzelnes Ziel und schärft den Modus (Delete: Element oder Linie, Rotate: Element).
pub fn press(session: &mut EditorSession, scene: &mut dyn SceneBackend, screen: Vec2) {
    let kind = session.mode_kind();
    let filter = match kind {
        ModeKind::Delete => PickFilter::Any,
        ModeKind::Rotate => PickFilter::PortBearing,
        _ => return,
    };

    let state = match session.pick(scene, screen, PickQuery::new(filter)) {
        Some(hit) => {
            session.selection.select_only(hit.object);
            ArmState::Armed(hit.object)
        }
        None => {
            session.selection.clear();
            ArmState::Idle
        }
    };
    log::debug!("{:?}: {:?}", kind, state);

    *session.mode_mut() = match kind {
        ModeKind::Delete => EditorMode::Delete(state),
        _ => EditorMode::Rotate(state),
    };
}
