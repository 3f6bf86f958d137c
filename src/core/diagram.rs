//! Das Diagramm-Modell: Elemente, Linien und Knickpunkte mit ihren Invarianten.

use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::line::nearest_segment;
use super::{
    DiagramError, Element, ElementId, ElementTemplate, Line, LineDetail, LineId, Orientation,
    PortDirection, PortRef,
};

/// Referenz auf ein selektierbares Diagramm-Objekt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectRef {
    /// Ein Element
    Element(ElementId),
    /// Eine Linie
    Line(LineId),
}

/// Container für alle Elemente und Linien eines Blockdiagramms.
///
/// Invarianten:
/// - keine Linie verbindet ein Element mit sich selbst
/// - jeder Eingang ist Ziel höchstens einer Linie
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    elements: IndexMap<ElementId, Element>,
    lines: IndexMap<LineId, Line>,
    next_element_id: u64,
    next_line_id: u64,
    revision: u64,
}

impl Diagram {
    /// Erstellt ein leeres Diagramm.
    pub fn new() -> Self {
        Self {
            elements: IndexMap::new(),
            lines: IndexMap::new(),
            next_element_id: 1,
            next_line_id: 1,
            revision: 0,
        }
    }

    /// Änderungszähler, steigt bei jeder Mutation (für Caches im View).
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // ── Elemente ────────────────────────────────────────────────────

    /// Fügt ein neues Element aus einer Vorlage hinzu.
    pub fn add_element(
        &mut self,
        template: &ElementTemplate,
        position: Vec2,
        size: Vec2,
    ) -> ElementId {
        let id = ElementId(self.next_element_id.max(1));
        self.next_element_id = id.0 + 1;
        self.elements
            .insert(id, Element::new(id, template, position, size));
        self.touch();
        id
    }

    /// Sucht ein Element.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Iterator über alle Elemente in Einfügereihenfolge.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Anzahl der Elemente
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Verschiebt ein Element an eine neue Position.
    pub fn move_element(&mut self, id: ElementId, position: Vec2) -> Result<(), DiagramError> {
        let element = self
            .elements
            .get_mut(&id)
            .ok_or(DiagramError::UnknownElement(id))?;
        if element.position != position {
            element.position = position;
            self.touch();
        }
        Ok(())
    }

    /// Dreht ein Element (Normal ⇔ Gespiegelt) und gibt die neue Ausrichtung zurück.
    pub fn rotate_element(&mut self, id: ElementId) -> Result<Orientation, DiagramError> {
        let element = self
            .elements
            .get_mut(&id)
            .ok_or(DiagramError::UnknownElement(id))?;
        element.orientation = element.orientation.toggled();
        let orientation = element.orientation;
        self.touch();
        Ok(orientation)
    }

    /// Entfernt ein Element samt aller angeschlossenen Linien.
    ///
    /// Gibt die IDs der mit entfernten Linien zurück.
    pub fn remove_element(&mut self, id: ElementId) -> Result<Vec<LineId>, DiagramError> {
        if self.elements.shift_remove(&id).is_none() {
            return Err(DiagramError::UnknownElement(id));
        }
        let attached = self.lines_of(id);
        for line_id in &attached {
            self.lines.shift_remove(line_id);
        }
        self.touch();
        Ok(attached)
    }

    // ── Ports ───────────────────────────────────────────────────────

    /// Position eines Ports in Diagramm-Koordinaten.
    pub fn port_position(&self, port: PortRef) -> Option<Vec2> {
        self.elements
            .get(&port.element)?
            .port_position(port.direction, port.index)
    }

    /// Prüft, ob ein Port existiert.
    pub fn has_port(&self, port: PortRef) -> bool {
        self.port_position(port).is_some()
    }

    /// Linie, die in den gegebenen Eingang führt (falls belegt).
    pub fn line_into(&self, port: PortRef) -> Option<LineId> {
        self.lines
            .values()
            .find(|line| line.target == port)
            .map(|line| line.id)
    }

    /// `true`, wenn der Eingang bereits Ziel einer Linie ist.
    pub fn input_port_occupied(&self, port: PortRef) -> bool {
        port.direction == PortDirection::Input && self.line_into(port).is_some()
    }

    // ── Linien ──────────────────────────────────────────────────────

    /// Sucht eine Linie.
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(&id)
    }

    /// Iterator über alle Linien in Einfügereihenfolge.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    /// Anzahl der Linien
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Alle Linien, die an einem Element hängen (als Quelle oder Ziel).
    pub fn lines_of(&self, element: ElementId) -> Vec<LineId> {
        self.lines
            .values()
            .filter(|line| line.source.element == element || line.target.element == element)
            .map(|line| line.id)
            .collect()
    }

    /// Erstellt eine Linie von einem Ausgang zu einem freien Eingang eines anderen Elements.
    pub fn create_line(
        &mut self,
        source: PortRef,
        target: PortRef,
    ) -> Result<LineId, DiagramError> {
        if source.direction != PortDirection::Output || target.direction != PortDirection::Input {
            return Err(DiagramError::WrongPortDirection {
                from: source,
                to: target,
            });
        }
        if !self.has_port(source) {
            return Err(DiagramError::UnknownPort(source));
        }
        if !self.has_port(target) {
            return Err(DiagramError::UnknownPort(target));
        }
        if source.element == target.element {
            return Err(DiagramError::SelfLoop(source.element));
        }
        if let Some(line) = self.line_into(target) {
            return Err(DiagramError::InputOccupied { port: target, line });
        }

        let id = LineId(self.next_line_id.max(1));
        self.next_line_id = id.0 + 1;
        self.lines.insert(
            id,
            Line {
                id,
                source,
                target,
                breakpoints: Vec::new(),
            },
        );
        self.touch();
        Ok(id)
    }

    /// Entfernt eine Linie.
    pub fn remove_line(&mut self, id: LineId) -> Result<Line, DiagramError> {
        let line = self
            .lines
            .shift_remove(&id)
            .ok_or(DiagramError::UnknownLine(id))?;
        self.touch();
        Ok(line)
    }

    /// Entfernt ein Element oder eine Linie und gibt alle entfernten Objekte zurück.
    pub fn erase(&mut self, object: ObjectRef) -> Result<Vec<ObjectRef>, DiagramError> {
        match object {
            ObjectRef::Element(id) => {
                let lines = self.remove_element(id)?;
                let mut removed = vec![object];
                removed.extend(lines.into_iter().map(ObjectRef::Line));
                Ok(removed)
            }
            ObjectRef::Line(id) => {
                self.remove_line(id)?;
                Ok(vec![object])
            }
        }
    }

    /// Prüft, ob ein Objekt (noch) existiert.
    pub fn contains(&self, object: ObjectRef) -> bool {
        match object {
            ObjectRef::Element(id) => self.elements.contains_key(&id),
            ObjectRef::Line(id) => self.lines.contains_key(&id),
        }
    }

    /// Linienzug `[Quell-Port, Knickpunkte…, Ziel-Port]`.
    pub fn line_polyline(&self, id: LineId) -> Option<Vec<Vec2>> {
        let line = self.lines.get(&id)?;
        let start = self.port_position(line.source)?;
        let end = self.port_position(line.target)?;
        let mut points = Vec::with_capacity(line.breakpoints.len() + 2);
        points.push(start);
        points.extend_from_slice(&line.breakpoints);
        points.push(end);
        Some(points)
    }

    /// Klassifiziert einen Punkt gegen eine Linie (Detail + Abstand).
    pub fn hit_line(&self, id: LineId, point: Vec2, tolerance: f32) -> Option<(LineDetail, f32)> {
        let polyline = self.line_polyline(id)?;
        LineDetail::classify(&polyline, point, tolerance)
    }

    /// Einfüge-Index für einen neuen Knickpunkt nahe `point` (nächstes Segment).
    pub fn breakpoint_insert_index(&self, id: LineId, point: Vec2) -> Option<usize> {
        let polyline = self.line_polyline(id)?;
        nearest_segment(&polyline, point).map(|(segment, _)| segment)
    }

    // ── Knickpunkte ─────────────────────────────────────────────────

    /// Fügt einen Knickpunkt an Index `index` ein (`index <= Anzahl`).
    pub fn insert_breakpoint(
        &mut self,
        id: LineId,
        index: usize,
        point: Vec2,
    ) -> Result<(), DiagramError> {
        let line = self.lines.get_mut(&id).ok_or(DiagramError::UnknownLine(id))?;
        if index > line.breakpoints.len() {
            return Err(DiagramError::BreakpointOutOfRange { line: id, index });
        }
        line.breakpoints.insert(index, point);
        self.touch();
        Ok(())
    }

    /// Setzt die Position eines bestehenden Knickpunkts.
    pub fn set_breakpoint(
        &mut self,
        id: LineId,
        index: usize,
        point: Vec2,
    ) -> Result<(), DiagramError> {
        let line = self.lines.get_mut(&id).ok_or(DiagramError::UnknownLine(id))?;
        let slot = line
            .breakpoints
            .get_mut(index)
            .ok_or(DiagramError::BreakpointOutOfRange { line: id, index })?;
        *slot = point;
        self.touch();
        Ok(())
    }

    /// Entfernt einen Knickpunkt und gibt seine Position zurück.
    pub fn remove_breakpoint(&mut self, id: LineId, index: usize) -> Result<Vec2, DiagramError> {
        let line = self.lines.get_mut(&id).ok_or(DiagramError::UnknownLine(id))?;
        if index >= line.breakpoints.len() {
            return Err(DiagramError::BreakpointOutOfRange { line: id, index });
        }
        let point = line.breakpoints.remove(index);
        self.touch();
        Ok(point)
    }

    /// Versucht, einen Punkt oder ein Segment einer Linie zu verschieben.
    ///
    /// An Ports gebundene Endpunkte und Segmente, die einen Port berühren,
    /// sind nicht verschiebbar. Ein Segment wird so verschoben, dass sein
    /// Mittelpunkt auf `position` liegt. Gibt `false` zurück, wenn die
    /// Verschiebung nicht erlaubt ist.
    pub fn manipulate_line_point(
        &mut self,
        id: LineId,
        detail: LineDetail,
        position: Vec2,
    ) -> bool {
        if !position.is_finite() {
            return false;
        }
        let Some(line) = self.lines.get_mut(&id) else {
            return false;
        };
        let count = line.breakpoints.len();

        match detail {
            LineDetail::SourceEnd | LineDetail::TargetEnd => return false,
            LineDetail::Breakpoint(i) => {
                let Some(slot) = line.breakpoints.get_mut(i) else {
                    return false;
                };
                *slot = position;
            }
            LineDetail::Segment(i) => {
                // Linienzug-Punkte i und i+1 müssen beide Knickpunkte sein
                if i == 0 || i >= count {
                    return false;
                }
                let mid = (line.breakpoints[i - 1] + line.breakpoints[i]) * 0.5;
                let delta = position - mid;
                line.breakpoints[i - 1] += delta;
                line.breakpoints[i] += delta;
            }
        }

        self.touch();
        true
    }

    /// Prüft alle Modell-Invarianten.
    pub fn check_invariants(&self) -> Result<(), DiagramError> {
        let mut targets: IndexMap<PortRef, LineId> = IndexMap::new();
        for line in self.lines.values() {
            if line.source.element == line.target.element {
                return Err(DiagramError::SelfLoop(line.source.element));
            }
            if line.source.direction != PortDirection::Output
                || line.target.direction != PortDirection::Input
            {
                return Err(DiagramError::WrongPortDirection {
                    from: line.source,
                    to: line.target,
                });
            }
            if let Some(previous) = targets.insert(line.target, line.id) {
                return Err(DiagramError::InputOccupied {
                    port: line.target,
                    line: previous,
                });
            }
        }
        Ok(())
    }
}
