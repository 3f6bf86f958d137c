//! Core-Domänentypen: Elemente, Ports, Linien, Diagramm, Raster, Kamera, Spatial-Index.

pub mod camera;
/// Diagramm-Modell
///
/// - Diagram: Container für Elemente und Linien samt Invarianten
/// - Element: platzierter Block mit Ein- und Ausgängen
/// - Line: Verbindung Ausgang → Eingang mit Knickpunkten
pub mod diagram;
pub mod element;
pub mod error;
pub mod grid;
pub mod line;
pub mod spatial;

pub use camera::Camera2D;
pub use diagram::{Diagram, ObjectRef};
pub use element::{Element, ElementId, ElementTemplate, Orientation, Port, PortDirection, PortRef};
pub use error::DiagramError;
pub use grid::{adjust_snap, GridSettings, DEFAULT_SNAP_DISTANCE};
pub use line::{Line, LineDetail, LineId};
pub use spatial::{SpatialIndex, SpatialMatch};
