//! Zentrale Konfiguration für den Blockdiagramm-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::ElementTemplate;

// ── Raster ──────────────────────────────────────────────────────────

/// Standard-Rastergröße (Diagramm-Einheiten pro Zelle).
pub const GRID_CELL_SIZE: [f32; 2] = [1.0, 1.0];
/// Standard-Snap-Abstand (wird an die Rastergröße angepasst).
pub const SNAP_DISTANCE: [f32; 2] = [0.5, 0.5];

// ── Elemente ────────────────────────────────────────────────────────

/// Körpergröße neuer Elemente in Diagramm-Einheiten.
pub const ELEMENT_SIZE: [f32; 2] = [1.0, 1.0];
/// Abstand des Rückmeldelinien-Ankers vor einem Ausgang.
pub const DRAW_STANDOFF: f32 = 0.25;

// ── Ansicht & Picking ───────────────────────────────────────────────

/// Standard-Zoom in Screen-Pixeln pro Diagramm-Einheit.
pub const PIXELS_PER_UNIT: f32 = 32.0;
/// Pick-Radius in Screen-Pixeln.
pub const PICK_RADIUS_PX: f32 = 8.0;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `block_diagram_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Rastergröße pro Achse
    pub grid_cell_size: [f32; 2],
    /// Gewünschter Snap-Abstand pro Achse
    pub snap_distance: [f32; 2],
    /// Raster anzeigen
    pub show_grid: bool,
    /// Positionen einrasten
    pub snap_enabled: bool,

    // ── Elemente ────────────────────────────────────────────────
    /// Körpergröße neuer Elemente
    pub element_size: [f32; 2],
    /// Abstand des Rückmeldelinien-Ankers vor dem Quell-Ausgang
    #[serde(default = "default_draw_standoff")]
    pub draw_standoff: f32,

    // ── Ansicht & Picking ───────────────────────────────────────
    /// Zoom in Screen-Pixeln pro Diagramm-Einheit
    pub pixels_per_unit: f32,
    /// Pick-Radius für Ports und Linien in Screen-Pixeln
    pub pick_radius_px: f32,

    // ── Create-Modus ────────────────────────────────────────────
    /// Vorlage für den Create-Modus, solange keine andere gewählt wurde
    #[serde(default)]
    pub default_element: ElementTemplate,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_cell_size: GRID_CELL_SIZE,
            snap_distance: SNAP_DISTANCE,
            show_grid: true,
            snap_enabled: true,

            element_size: ELEMENT_SIZE,
            draw_standoff: DRAW_STANDOFF,

            pixels_per_unit: PIXELS_PER_UNIT,
            pick_radius_px: PICK_RADIUS_PX,

            default_element: ElementTemplate::default(),
        }
    }
}

/// Serde-Default für `draw_standoff` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_draw_standoff() -> f32 {
    DRAW_STANDOFF
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("block_diagram_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("block_diagram_editor.toml")
    }

    /// Körpergröße neuer Elemente als Vektor.
    pub fn element_size(&self) -> glam::Vec2 {
        glam::Vec2::from(self.element_size)
    }
}
