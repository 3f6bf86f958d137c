//! Handler für das Modus-Protokoll: Wechsel, Bestätigen, Abbrechen.

use crate::app::{EditorSession, ModeKind};
use crate::scene::SceneBackend;

/// Wechselt den Editor-Modus.
pub fn set_mode(session: &mut EditorSession, scene: &mut dyn SceneBackend, mode: ModeKind) {
    session.set_mode(scene, mode);
}

/// Bestätigt den aktuellen Modus-Schritt.
pub fn confirm(session: &mut EditorSession, scene: &mut dyn SceneBackend) {
    session.confirm(scene);
}

/// Bricht die laufende Geste ab (zurück nach Neutral/Exam).
pub fn cancel(session: &mut EditorSession, scene: &mut dyn SceneBackend) {
    session.cancel(scene);
}

/// Hebt die Auswahl auf.
pub fn clear_selection(session: &mut EditorSession) {
    session.selection.clear();
}

/// Verwirft den gemerkten Pick-Treffer.
pub fn forget_pick(session: &mut EditorSession) {
    session.forget_pick();
}
