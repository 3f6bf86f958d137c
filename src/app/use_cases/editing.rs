//! Use-Cases: Drehen, Löschen, Verbinden und Knickpunkte.

use glam::Vec2;

use crate::app::EditorSession;
use crate::core::{Diagram, DiagramError, ElementId, LineId, ObjectRef, Orientation, PortRef};
use crate::scene::SceneBackend;

/// Meldet ein Element samt aller angeschlossenen Linien als geändert.
pub fn notify_element(diagram: &Diagram, scene: &mut dyn SceneBackend, id: ElementId) {
    scene.object_changed(ObjectRef::Element(id));
    for line in diagram.lines_of(id) {
        scene.object_changed(ObjectRef::Line(line));
    }
}

/// Dreht ein Element und aktualisiert die angeschlossenen Linien.
pub fn rotate_element(
    session: &mut EditorSession,
    scene: &mut dyn SceneBackend,
    id: ElementId,
) -> Result<Orientation, DiagramError> {
    let orientation = session.diagram.rotate_element(id)?;
    notify_element(&session.diagram, scene, id);
    log::info!("Element {:?} gedreht: {:?}", id, orientation);
    Ok(orientation)
}

/// Löscht ein Element (mit allen Linien) oder eine Linie.
///
/// Entfernte Objekte verschwinden auch aus der Auswahl.
pub fn erase_object(
    session: &mut EditorSession,
    scene: &mut dyn SceneBackend,
    object: ObjectRef,
) -> Result<Vec<ObjectRef>, DiagramError> {
    let removed = session.diagram.erase(object)?;
    for object in &removed {
        session.selection.remove(*object);
        scene.object_removed(*object);
    }
    log::info!("{} Objekt(e) gelöscht: {:?}", removed.len(), removed);
    Ok(removed)
}

/// Verbindet einen Ausgang mit einem freien Eingang und selektiert die neue Linie.
pub fn connect(
    session: &mut EditorSession,
    scene: &mut dyn SceneBackend,
    source: PortRef,
    target: PortRef,
) -> Result<LineId, DiagramError> {
    let line = session.diagram.create_line(source, target)?;
    scene.object_changed(ObjectRef::Line(line));
    session.selection.select_only(ObjectRef::Line(line));
    log::info!("Linie {:?} erstellt: {:?} -> {:?}", line, source, target);
    Ok(line)
}

/// Fügt einen Knickpunkt in das Segment ein, das `point` am nächsten liegt.
///
/// Gibt den Index des neuen Knickpunkts zurück.
pub fn insert_breakpoint_near(
    session: &mut EditorSession,
    scene: &mut dyn SceneBackend,
    line: LineId,
    point: Vec2,
) -> Result<usize, DiagramError> {
    let index = session
        .diagram
        .breakpoint_insert_index(line, point)
        .ok_or(DiagramError::UnknownLine(line))?;
    session.diagram.insert_breakpoint(line, index, point)?;
    scene.object_changed(ObjectRef::Line(line));
    log::debug!("Knickpunkt {} in Linie {:?} eingefügt", index, line);
    Ok(index)
}

/// Entfernt einen inneren Knickpunkt.
pub fn remove_breakpoint(
    session: &mut EditorSession,
    scene: &mut dyn SceneBackend,
    line: LineId,
    index: usize,
) -> Result<Vec2, DiagramError> {
    let point = session.diagram.remove_breakpoint(line, index)?;
    scene.object_changed(ObjectRef::Line(line));
    log::info!("Knickpunkt {} aus Linie {:?} entfernt", index, line);
    Ok(point)
}
