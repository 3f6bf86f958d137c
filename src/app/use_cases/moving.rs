//! Use-Cases: Einzel- und Gruppenverschiebung von Elementen.

use glam::Vec2;
use indexmap::IndexSet;

use crate::app::EditorSession;
use crate::core::{DiagramError, ElementId, ObjectRef};
use crate::scene::SceneBackend;

use super::editing::notify_element;

/// Verschiebt ein Element an eine neue Position.
pub fn move_element(
    session: &mut EditorSession,
    scene: &mut dyn SceneBackend,
    id: ElementId,
    position: Vec2,
) -> Result<(), DiagramError> {
    session.diagram.move_element(id, position)?;
    notify_element(&session.diagram, scene, id);
    Ok(())
}

/// Starre Gruppenverschiebung: jedes Element landet auf `offset + cursor`.
///
/// Gibt die Anzahl verschobener Elemente zurück. Jede betroffene Linie wird
/// genau einmal als geändert gemeldet.
pub fn move_group(
    session: &mut EditorSession,
    scene: &mut dyn SceneBackend,
    offsets: &[(ElementId, Vec2)],
    cursor: Vec2,
) -> usize {
    let mut touched: IndexSet<ObjectRef> = IndexSet::new();

    for (id, offset) in offsets {
        match session.diagram.move_element(*id, cursor + *offset) {
            Ok(()) => {
                touched.insert(ObjectRef::Element(*id));
                touched.extend(session.diagram.lines_of(*id).into_iter().map(ObjectRef::Line));
            }
            Err(e) => log::warn!("Gruppenverschiebung übersprungen: {}", e),
        }
    }

    let moved = touched
        .iter()
        .filter(|object| matches!(object, ObjectRef::Element(_)))
        .count();
    for object in touched {
        scene.object_changed(object);
    }
    moved
}
