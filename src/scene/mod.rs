//! Vertrag zur Szenen-/Render-Schicht.
//!
//! Der Editor-Kern rendert nicht selbst. Picking, Screen→Diagramm-Projektion
//! und die transiente Rückmeldelinie liefert eine `SceneBackend`-Implementierung
//! der einbettenden Anwendung. `HeadlessScene` ist die Referenz-Implementierung
//! ohne Fenster (Tests, Benchmarks, Replay).

mod headless;

pub use headless::HeadlessScene;

use glam::Vec2;

use crate::app::Selection;
use crate::core::{Diagram, LineDetail, ObjectRef, PortRef};

/// Welche Objekttypen ein Pick berücksichtigt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickFilter {
    /// Elemente (Körper und Ports) und Linien
    Any,
    /// Nur port-tragende Objekte, also Elemente inklusive ihrer Ports
    PortBearing,
    /// Nur Linien
    Lines,
}

impl PickFilter {
    /// `true`, wenn Elemente getroffen werden dürfen.
    pub fn includes_elements(self) -> bool {
        matches!(self, PickFilter::Any | PickFilter::PortBearing)
    }

    /// `true`, wenn Linien getroffen werden dürfen.
    pub fn includes_lines(self) -> bool {
        matches!(self, PickFilter::Any | PickFilter::Lines)
    }
}

/// Parameter einer Pick-Anfrage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickQuery {
    /// Erlaubte Objekttypen
    pub filter: PickFilter,
    /// Bei mehreren Kandidaten einen noch nicht selektierten bevorzugen
    pub prefer_unselected: bool,
}

impl PickQuery {
    /// Anfrage mit Bevorzugung unselektierter Kandidaten ("dahinter picken").
    pub fn new(filter: PickFilter) -> Self {
        Self {
            filter,
            prefer_unselected: true,
        }
    }

    /// Anfrage, die immer den nächstgelegenen Kandidaten liefert.
    pub fn nearest(filter: PickFilter) -> Self {
        Self {
            filter,
            prefer_unselected: false,
        }
    }
}

/// Was genau an einem Objekt getroffen wurde
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitDetail {
    /// Körper eines Elements
    Body,
    /// Ein Port eines Elements
    Port(PortRef),
    /// Punkt oder Segment einer Linie
    Line(LineDetail),
}

/// Ergebnis eines Picks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Getroffenes Objekt
    pub object: ObjectRef,
    /// Teil des Objekts
    pub detail: HitDetail,
    /// Pick-Punkt in Diagramm-Koordinaten (ohne Snap)
    pub point: Vec2,
}

/// Schnittstelle zur Szene der einbettenden Anwendung.
pub trait SceneBackend {
    /// Hit-Test gegen die aktuelle Szene.
    ///
    /// Liegen mehrere Kandidaten unter dem Cursor und ist
    /// `query.prefer_unselected` gesetzt, wird ein nicht selektierter
    /// Kandidat bevorzugt.
    fn pick(
        &mut self,
        diagram: &Diagram,
        screen: Vec2,
        query: PickQuery,
        selection: &Selection,
    ) -> Option<PickHit>;

    /// Projiziert eine Zeigerposition in Diagramm-Koordinaten (ohne Snap).
    fn screen_to_model(&self, screen: Vec2) -> Vec2;

    /// Zeigt bzw. aktualisiert die Rückmeldelinie beim Verbinden.
    fn show_feedback_line(&mut self, from: Vec2, to: Vec2);

    /// Entfernt die Rückmeldelinie.
    fn clear_feedback_line(&mut self);

    /// Ein Objekt des Modells hat sich geändert (Position, Ausrichtung, Geometrie).
    fn object_changed(&mut self, _object: ObjectRef) {}

    /// Ein Objekt wurde aus dem Modell entfernt.
    fn object_removed(&mut self, _object: ObjectRef) {}
}
