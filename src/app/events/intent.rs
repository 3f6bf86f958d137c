use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::app::ModeKind;
use crate::core::ElementTemplate;

/// Editor-Intents: Eingaben aus Host/UI ohne direkte Mutationslogik.
///
/// Serialisierbar, damit aufgezeichnete Gesten im Replay abgespielt werden können.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorIntent {
    /// Zeigertaste gedrückt (Screen-Koordinaten)
    PointerPressed { screen: Vec2 },
    /// Zeiger bewegt (Screen-Koordinaten)
    PointerMoved { screen: Vec2 },
    /// Zeigertaste losgelassen (Screen-Koordinaten)
    PointerReleased { screen: Vec2 },
    /// Bestätigungsgeste (z.B. Enter oder Doppelklick)
    ConfirmGesture,
    /// Abbruchgeste (z.B. Escape oder Rechtsklick)
    CancelGesture,
    /// Gruppen-Modifier gedrückt
    GroupModifierPressed,
    /// Gruppen-Modifier losgelassen
    GroupModifierReleased,
    /// Modus aus Toolbar/Menü gewählt
    ModeRequested { mode: ModeKind },
    /// Vorlage für den Create-Modus gewählt
    CreateTemplateSelected { template: ElementTemplate },
    /// Snap-Abstand geändert (Wunschwert pro Achse)
    SnapDistanceChanged { distance: [f32; 2] },
    /// Rastergröße geändert
    GridCellSizeChanged { size: [f32; 2] },
    /// Einrasten ein/aus
    SnapToggled { enabled: bool },
    /// Rasteranzeige ein/aus
    GridVisibilityToggled { visible: bool },
    /// Schreibschutz des Diagramms geändert
    ReadOnlyChanged { read_only: bool },
    /// Host betritt/verlässt den interaktiven Bearbeitungszustand
    InteractiveChanged { interactive: bool },
}
