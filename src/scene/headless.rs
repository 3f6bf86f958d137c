//! Fensterlose Szene: Picking und Projektion direkt auf der Diagramm-Geometrie.

use glam::Vec2;

use super::{HitDetail, PickHit, PickQuery, SceneBackend};
use crate::app::Selection;
use crate::core::{
    Camera2D, Diagram, LineDetail, ObjectRef, PortDirection, PortRef, SpatialIndex,
};
use crate::shared::EditorOptions;

/// Standard-Viewport der fensterlosen Szene in Pixeln.
const DEFAULT_VIEWPORT: [f32; 2] = [1280.0, 720.0];

/// Obergrenze je Meldungsliste; ältere Meldungen werden verworfen.
const MAX_RECORDS: usize = 512;

/// Hängt eine Meldung an, direkt wiederholte Meldungen zählen nur einmal.
fn push_record(records: &mut Vec<ObjectRef>, object: ObjectRef) {
    if records.last() == Some(&object) {
        return;
    }
    if records.len() >= MAX_RECORDS {
        records.drain(..records.len() + 1 - MAX_RECORDS);
    }
    records.push(object);
}

/// Referenz-Szene ohne Renderer.
///
/// Hält Kamera und Viewport für die Projektion, einen nach Diagramm-Revision
/// gecachten Spatial-Index für das Element-Picking sowie die Rückmeldelinie
/// und alle gemeldeten Objekt-Änderungen (für Tests und das Replay).
#[derive(Debug, Clone)]
pub struct HeadlessScene {
    camera: Camera2D,
    viewport_size: Vec2,
    pick_radius_px: f32,
    spatial: SpatialIndex,
    spatial_revision: Option<u64>,
    feedback_line: Option<(Vec2, Vec2)>,
    changed: Vec<ObjectRef>,
    removed: Vec<ObjectRef>,
}

impl HeadlessScene {
    /// Erstellt eine Szene mit Zoom und Pick-Radius aus den Optionen.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            camera: Camera2D::new(options.pixels_per_unit),
            viewport_size: Vec2::from(DEFAULT_VIEWPORT),
            pick_radius_px: options.pick_radius_px,
            spatial: SpatialIndex::empty(),
            spatial_revision: None,
            feedback_line: None,
            changed: Vec::new(),
            removed: Vec::new(),
        }
    }

    /// Kamera der Szene
    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    /// Mutable Kamera (Pan/Zoom durch den Host)
    pub fn camera_mut(&mut self) -> &mut Camera2D {
        &mut self.camera
    }

    /// Setzt die Viewport-Größe in Pixeln.
    pub fn set_viewport_size(&mut self, size: Vec2) {
        self.viewport_size = size;
    }

    /// Pick-Toleranz in Diagramm-Einheiten beim aktuellen Zoom.
    pub fn pick_tolerance(&self) -> f32 {
        self.camera.pick_radius_world(self.pick_radius_px)
    }

    /// Projiziert einen Diagramm-Punkt in Screen-Koordinaten.
    pub fn model_to_screen(&self, point: Vec2) -> Vec2 {
        self.camera.world_to_screen(point, self.viewport_size)
    }

    /// Aktuelle Rückmeldelinie (Start, Ende), falls sichtbar.
    pub fn feedback_line(&self) -> Option<(Vec2, Vec2)> {
        self.feedback_line
    }

    /// Seit dem letzten `clear_records` gemeldete Änderungen (höchstens die letzten 512).
    pub fn changed_objects(&self) -> &[ObjectRef] {
        &self.changed
    }

    /// Alle seit dem letzten `clear_records` gemeldeten Entfernungen.
    pub fn removed_objects(&self) -> &[ObjectRef] {
        &self.removed
    }

    /// Verwirft die gesammelten Änderungsmeldungen.
    pub fn clear_records(&mut self) {
        self.changed.clear();
        self.removed.clear();
    }

    fn refresh_spatial(&mut self, diagram: &Diagram) {
        if self.spatial_revision != Some(diagram.revision()) {
            self.spatial = SpatialIndex::from_elements(diagram.elements());
            self.spatial_revision = Some(diagram.revision());
        }
    }

    /// Sammelt alle Element-Treffer (Port vor Körper) mit ihrem Abstand.
    fn element_candidates(
        &mut self,
        diagram: &Diagram,
        point: Vec2,
        tolerance: f32,
    ) -> Vec<(PickHit, f32)> {
        self.refresh_spatial(diagram);

        let mut candidates = Vec::new();
        for id in self.spatial.candidates_near(point, tolerance) {
            let Some(element) = diagram.element(id) else {
                continue;
            };

            let nearest_port = [PortDirection::Input, PortDirection::Output]
                .into_iter()
                .flat_map(|direction| element.port_refs(direction))
                .filter_map(|port| {
                    let position = element.port_position(port.direction, port.index)?;
                    Some((port, position.distance(point)))
                })
                .filter(|(_, distance)| *distance <= tolerance)
                .min_by(|a, b| a.1.total_cmp(&b.1));

            if let Some((port, distance)) = nearest_port {
                candidates.push((
                    PickHit {
                        object: ObjectRef::Element(id),
                        detail: HitDetail::Port(port),
                        point,
                    },
                    distance,
                ));
            } else if element.contains(point) {
                // Körpertreffer zählen wie ein Treffer am Rand der Toleranz
                candidates.push((
                    PickHit {
                        object: ObjectRef::Element(id),
                        detail: HitDetail::Body,
                        point,
                    },
                    tolerance,
                ));
            }
        }
        candidates
    }

    /// Linien-Treffer; Endpunkte, deren Port schon selbst getroffen wurde, entfallen.
    fn line_candidates(
        diagram: &Diagram,
        point: Vec2,
        tolerance: f32,
        hit_ports: &[PortRef],
    ) -> Vec<(PickHit, f32)> {
        diagram
            .lines()
            .filter_map(|line| {
                let (detail, distance) = diagram.hit_line(line.id, point, tolerance)?;
                let bound_port = match detail {
                    LineDetail::SourceEnd => Some(line.source),
                    LineDetail::TargetEnd => Some(line.target),
                    LineDetail::Breakpoint(_) | LineDetail::Segment(_) => None,
                };
                if bound_port.is_some_and(|port| hit_ports.contains(&port)) {
                    return None;
                }
                Some((
                    PickHit {
                        object: ObjectRef::Line(line.id),
                        detail: HitDetail::Line(detail),
                        point,
                    },
                    distance,
                ))
            })
            .collect()
    }
}

impl Default for HeadlessScene {
    fn default() -> Self {
        Self::new(&EditorOptions::default())
    }
}

impl SceneBackend for HeadlessScene {
    fn pick(
        &mut self,
        diagram: &Diagram,
        screen: Vec2,
        query: PickQuery,
        selection: &Selection,
    ) -> Option<PickHit> {
        let point = self.screen_to_model(screen);
        let tolerance = self.pick_tolerance();

        let mut candidates = Vec::new();
        if query.filter.includes_elements() {
            candidates.extend(self.element_candidates(diagram, point, tolerance));
        }
        if query.filter.includes_lines() {
            let hit_ports: Vec<PortRef> = candidates
                .iter()
                .filter_map(|(hit, _)| match hit.detail {
                    HitDetail::Port(port) => Some(port),
                    _ => None,
                })
                .collect();
            candidates.extend(Self::line_candidates(diagram, point, tolerance, &hit_ports));
        }

        // Stabil sortiert: bei gleichem Abstand gewinnen Elemente vor Linien
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

        let preferred = if query.prefer_unselected {
            candidates
                .iter()
                .find(|(hit, _)| !selection.contains(hit.object))
                .or_else(|| candidates.first())
        } else {
            candidates.first()
        };

        let hit = preferred.map(|(hit, _)| *hit);
        log::debug!("Pick bei {:?} ({:?}): {:?}", point, query.filter, hit);
        hit
    }

    fn screen_to_model(&self, screen: Vec2) -> Vec2 {
        self.camera.screen_to_world(screen, self.viewport_size)
    }

    fn show_feedback_line(&mut self, from: Vec2, to: Vec2) {
        self.feedback_line = Some((from, to));
    }

    fn clear_feedback_line(&mut self) {
        self.feedback_line = None;
    }

    fn object_changed(&mut self, object: ObjectRef) {
        push_record(&mut self.changed, object);
    }

    fn object_removed(&mut self, object: ObjectRef) {
        push_record(&mut self.removed, object);
    }
}
