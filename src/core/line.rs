//! Linien zwischen Ausgang und Eingang mit Knickpunkten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::PortRef;

/// Eindeutige ID einer Linie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineId(pub u64);

/// Gerichtete Verbindung von einem Ausgang zu einem Eingang
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Eindeutige ID
    pub id: LineId,
    /// Quell-Port (Ausgang)
    pub source: PortRef,
    /// Ziel-Port (Eingang)
    pub target: PortRef,
    /// Innere Knickpunkte in Reihenfolge Quelle → Ziel
    pub breakpoints: Vec<Vec2>,
}

/// Genau getroffener Teil einer Linie.
///
/// Der Linienzug ist `[Quell-Port, Knickpunkte…, Ziel-Port]`; `Segment(i)`
/// liegt zwischen Linienzug-Punkt `i` und `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineDetail {
    /// Anfangspunkt am Quell-Port
    SourceEnd,
    /// Endpunkt am Ziel-Port
    TargetEnd,
    /// Innerer Knickpunkt (Index in `breakpoints`)
    Breakpoint(usize),
    /// Segment zwischen zwei Linienzug-Punkten
    Segment(usize),
}

impl LineDetail {
    /// Klassifiziert einen Punkt gegen einen Linienzug.
    ///
    /// Eckpunkte haben Vorrang vor Segmenten. Gibt den Treffer samt Abstand
    /// zurück oder `None`, wenn nichts innerhalb von `tolerance` liegt.
    pub fn classify(polyline: &[Vec2], point: Vec2, tolerance: f32) -> Option<(Self, f32)> {
        let n = polyline.len();
        if n < 2 {
            return None;
        }

        let nearest_vertex = polyline
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.distance(point)))
            .filter(|(_, d)| *d <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1));

        if let Some((i, d)) = nearest_vertex {
            let detail = if i == 0 {
                LineDetail::SourceEnd
            } else if i == n - 1 {
                LineDetail::TargetEnd
            } else {
                LineDetail::Breakpoint(i - 1)
            };
            return Some((detail, d));
        }

        nearest_segment(polyline, point)
            .filter(|(_, d)| *d <= tolerance)
            .map(|(i, d)| (LineDetail::Segment(i), d))
    }

    /// `true` für die an Ports gebundenen Endpunkte.
    pub fn is_endpoint(self) -> bool {
        matches!(self, LineDetail::SourceEnd | LineDetail::TargetEnd)
    }
}

/// Abstand eines Punktes zur Strecke `a`–`b`.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Nächstes Segment eines Linienzugs (Index, Abstand).
pub fn nearest_segment(polyline: &[Vec2], point: Vec2) -> Option<(usize, f32)> {
    polyline
        .windows(2)
        .enumerate()
        .map(|(i, w)| (i, distance_to_segment(point, w[0], w[1])))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
