//! Raster und Snap-Quantisierung.
//!
//! Reine Funktionen ohne Abhängigkeit zum restlichen Editor. Der effektive
//! Snap-Abstand wird pro Achse so angepasst, dass Rasterlinien-Kreuzungen
//! immer erreichbare Snap-Ziele bleiben.

use glam::Vec2;

use crate::shared::EditorOptions;

/// Ersatzwert, wenn ein Snap-Abstand von (numerisch) null angefordert wird.
pub const DEFAULT_SNAP_DISTANCE: f32 = 0.1;

/// Relative Toleranz für das Abrunden von Verhältnissen (f32-Rundungsfehler).
const FLOOR_TOLERANCE: f32 = 1e-4;

/// Passt einen angeforderten Snap-Abstand an die Rastergröße einer Achse an.
///
/// - Ist der Abstand höchstens eine Zelle groß, wird der größte Wert `<= requested`
///   geliefert, der die Zelle ganzzahlig teilt.
/// - Ist er größer als eine Zelle, wird das größte ganzzahlige Vielfache der
///   Zelle `<= requested` geliefert. Ein Bruchteil-Rest (`requested / cell`
///   minus ganzem Anteil) wird nie zurückgegeben, sonst lägen Rasterkreuzungen
///   zwischen den Snap-Punkten.
///
/// Die Funktion ist idempotent: `adjust_snap(adjust_snap(d, g), g) == adjust_snap(d, g)`.
pub fn adjust_snap(requested: f32, cell_size: f32) -> f32 {
    let requested = if requested.abs() < f32::EPSILON {
        DEFAULT_SNAP_DISTANCE
    } else {
        requested.abs()
    };
    let cell = cell_size.abs();

    if cell < f32::EPSILON || !cell.is_finite() || !requested.is_finite() {
        return requested;
    }

    let ratio = cell / requested;
    if ratio >= 1.0 {
        cell / tolerant_floor(ratio)
    } else {
        cell * tolerant_floor(1.0 / ratio)
    }
}

/// `floor` mit Toleranz gegen `k - ε`, nie kleiner als 1.
fn tolerant_floor(value: f32) -> f32 {
    (value + FLOOR_TOLERANCE * value.max(1.0)).floor().max(1.0)
}

/// Rundet einen Wert auf das nächste Vielfache von `step` (Ties weg von null).
fn snap_axis(value: f32, step: f32) -> f32 {
    if step <= 0.0 || !step.is_finite() {
        return value;
    }
    (value / step).round() * step
}

/// Raster- und Snap-Einstellungen einer Editor-Session
#[derive(Debug, Clone, PartialEq)]
pub struct GridSettings {
    cell_size: Vec2,
    requested_snap: Vec2,
    snap_distance: Vec2,
    /// Raster anzeigen
    pub show_grid: bool,
    /// Positionen auf den Snap-Abstand quantisieren
    pub snap_enabled: bool,
}

impl GridSettings {
    /// Erstellt Einstellungen mit bereits angepasstem Snap-Abstand.
    pub fn new(cell_size: Vec2, requested_snap: Vec2) -> Self {
        let mut grid = Self {
            cell_size,
            requested_snap,
            snap_distance: requested_snap,
            show_grid: true,
            snap_enabled: true,
        };
        grid.readjust();
        grid
    }

    /// Übernimmt Raster-Werte aus den Editor-Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        let mut grid = Self::new(
            Vec2::from(options.grid_cell_size),
            Vec2::from(options.snap_distance),
        );
        grid.show_grid = options.show_grid;
        grid.snap_enabled = options.snap_enabled;
        grid
    }

    /// Rastergröße pro Achse
    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// Effektiver (angepasster) Snap-Abstand pro Achse
    pub fn snap_distance(&self) -> Vec2 {
        self.snap_distance
    }

    /// Zuletzt vom Benutzer angeforderter Snap-Abstand
    pub fn requested_snap(&self) -> Vec2 {
        self.requested_snap
    }

    /// Setzt einen neuen Snap-Abstand und passt ihn an das Raster an.
    pub fn set_snap_distance(&mut self, requested: Vec2) {
        self.requested_snap = requested;
        self.readjust();
        log::info!(
            "Snap-Abstand angefordert {:?}, effektiv {:?}",
            requested,
            self.snap_distance
        );
    }

    /// Setzt eine neue Rastergröße; der Snap-Abstand wird vom Wunschwert aus neu angepasst.
    pub fn set_cell_size(&mut self, cell_size: Vec2) {
        self.cell_size = cell_size;
        self.readjust();
        log::info!(
            "Rastergröße {:?}, effektiver Snap-Abstand {:?}",
            cell_size,
            self.snap_distance
        );
    }

    fn readjust(&mut self) {
        self.snap_distance = Vec2::new(
            adjust_snap(self.requested_snap.x, self.cell_size.x),
            adjust_snap(self.requested_snap.y, self.cell_size.y),
        );
    }

    /// Quantisiert einen Punkt auf den nächsten Snap-Punkt (No-op bei deaktiviertem Snap).
    pub fn snap_to_nearest_point(&self, point: Vec2) -> Vec2 {
        if !self.snap_enabled {
            return point;
        }
        Vec2::new(
            snap_axis(point.x, self.snap_distance.x),
            snap_axis(point.y, self.snap_distance.y),
        )
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}
