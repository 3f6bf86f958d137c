use glam::Vec2;

use crate::app::ModeKind;
use crate::core::ElementTemplate;

/// Mutierende Editor-Commands, ausgeführt vom Controller.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    // === Modus-Protokoll ===
    /// Aktuellen Modus-Schritt bestätigen
    Confirm,
    /// Zurück nach Neutral/Exam
    Cancel,
    /// Auswahl leeren
    ClearSelection,
    /// Gemerkten Pick-Treffer verwerfen
    ForgetPick,
    /// Modus wechseln
    SetMode { mode: ModeKind },

    // === Zeiger ===
    /// Zeigertaste gedrückt
    PointerPress { screen: Vec2 },
    /// Zeiger bewegt
    PointerMove { screen: Vec2 },
    /// Zeigertaste losgelassen
    PointerRelease { screen: Vec2 },

    // === Einstellungen ===
    /// Vorlage für neue Elemente setzen
    SetCreateTemplate { template: ElementTemplate },
    /// Snap-Abstand setzen (wird an das Raster angepasst)
    SetSnapDistance { distance: Vec2 },
    /// Rastergröße setzen
    SetGridCellSize { size: Vec2 },
    /// Einrasten ein/aus
    SetSnapEnabled { enabled: bool },
    /// Rasteranzeige ein/aus
    SetGridVisible { visible: bool },
    /// Schreibschutz setzen
    SetReadOnly { read_only: bool },
    /// Interaktiven Bearbeitungszustand setzen
    SetInteractive { interactive: bool },
}
