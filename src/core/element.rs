//! Platzierte Diagramm-Elemente und ihre Ports.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Eindeutige ID eines Elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// Ausrichtung eines Elements (Eingänge links bei `Normal`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Eingänge links, Ausgänge rechts
    #[default]
    Normal,
    /// Gespiegelt: Eingänge rechts, Ausgänge links
    Mirrored,
}

impl Orientation {
    /// Gibt die jeweils andere Ausrichtung zurück.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Normal => Orientation::Mirrored,
            Orientation::Mirrored => Orientation::Normal,
        }
    }

    /// Vorzeichen der x-Richtung, in die Ausgänge zeigen.
    fn output_sign(self) -> f32 {
        match self {
            Orientation::Normal => 1.0,
            Orientation::Mirrored => -1.0,
        }
    }
}

/// Richtung eines Ports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortDirection {
    /// Eingang (Ziel höchstens einer Linie)
    Input,
    /// Ausgang (Quelle beliebig vieler Linien)
    Output,
}

/// Referenz auf einen Port: Element + Richtung + Index innerhalb der Richtung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortRef {
    /// Besitzendes Element
    pub element: ElementId,
    /// Eingang oder Ausgang
    pub direction: PortDirection,
    /// Index innerhalb der Richtung (0-basiert)
    pub index: usize,
}

impl PortRef {
    /// Referenz auf einen Eingang.
    pub fn input(element: ElementId, index: usize) -> Self {
        Self {
            element,
            direction: PortDirection::Input,
            index,
        }
    }

    /// Referenz auf einen Ausgang.
    pub fn output(element: ElementId, index: usize) -> Self {
        Self {
            element,
            direction: PortDirection::Output,
            index,
        }
    }
}

/// Ein Port eines Elements
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    /// Eingang oder Ausgang
    pub direction: PortDirection,
    /// Index innerhalb der Richtung
    pub index: usize,
    /// Anzeigename (z.B. `in1`, `out2`)
    pub name: String,
}

/// Vorlage für neu zu erzeugende Elemente (Katalog-Schlüssel + Port-Anzahl)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementTemplate {
    /// Katalog-Schlüssel, für den Editor opak
    pub kind: String,
    /// Anzahl Eingänge
    pub inputs: usize,
    /// Anzahl Ausgänge
    pub outputs: usize,
}

impl Default for ElementTemplate {
    fn default() -> Self {
        Self {
            kind: "Gain".to_string(),
            inputs: 1,
            outputs: 1,
        }
    }
}

/// Ein platziertes Diagramm-Element
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Eindeutige ID
    pub id: ElementId,
    /// Katalog-Schlüssel
    pub kind: String,
    /// Mittelpunkt in Diagramm-Koordinaten
    pub position: Vec2,
    /// Normal oder gespiegelt
    pub orientation: Orientation,
    /// Körpergröße (Breite, Höhe)
    pub size: Vec2,
    /// Geordnete Eingänge
    pub inputs: Vec<Port>,
    /// Geordnete Ausgänge
    pub outputs: Vec<Port>,
}

impl Element {
    /// Erstellt ein Element aus einer Vorlage.
    pub fn new(id: ElementId, template: &ElementTemplate, position: Vec2, size: Vec2) -> Self {
        let make_ports = |direction: PortDirection, count: usize, prefix: &str| {
            (0..count)
                .map(|index| Port {
                    direction,
                    index,
                    name: format!("{prefix}{}", index + 1),
                })
                .collect()
        };

        Self {
            id,
            kind: template.kind.clone(),
            position,
            orientation: Orientation::Normal,
            size,
            inputs: make_ports(PortDirection::Input, template.inputs, "in"),
            outputs: make_ports(PortDirection::Output, template.outputs, "out"),
        }
    }

    /// Anzahl der Ports in einer Richtung.
    pub fn port_count(&self, direction: PortDirection) -> usize {
        match direction {
            PortDirection::Input => self.inputs.len(),
            PortDirection::Output => self.outputs.len(),
        }
    }

    /// Alle Port-Referenzen einer Richtung in Reihenfolge.
    pub fn port_refs(&self, direction: PortDirection) -> impl Iterator<Item = PortRef> + '_ {
        let id = self.id;
        (0..self.port_count(direction)).map(move |index| PortRef {
            element: id,
            direction,
            index,
        })
    }

    /// x-Vorzeichen der Seite, auf der die Ports einer Richtung liegen.
    fn side_sign(&self, direction: PortDirection) -> f32 {
        match direction {
            PortDirection::Output => self.orientation.output_sign(),
            PortDirection::Input => -self.orientation.output_sign(),
        }
    }

    /// Position eines Ports in Diagramm-Koordinaten.
    ///
    /// Ports einer Seite sind gleichmäßig über die Körperhöhe verteilt.
    pub fn port_position(&self, direction: PortDirection, index: usize) -> Option<Vec2> {
        let count = self.port_count(direction);
        if index >= count {
            return None;
        }
        let half = self.size * 0.5;
        let x = self.position.x + self.side_sign(direction) * half.x;
        let y = self.position.y - half.y + self.size.y * (index + 1) as f32 / (count + 1) as f32;
        Some(Vec2::new(x, y))
    }

    /// Nach außen zeigende Einheitsrichtung der Ports einer Richtung.
    pub fn port_outward(&self, direction: PortDirection) -> Vec2 {
        Vec2::new(self.side_sign(direction), 0.0)
    }

    /// Prüft, ob ein Punkt im Körper-Rechteck liegt.
    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.size * 0.5;
        let d = (point - self.position).abs();
        d.x <= half.x && d.y <= half.y
    }

    /// Halbe Diagonale des Körpers (für Umkreis-Abfragen).
    pub fn half_extent(&self) -> f32 {
        (self.size * 0.5).length()
    }
}
