//! Mapping von Editor-Intents auf mutierende Editor-Commands.
//!
//! Dies ist zugleich die modusunabhängige Verwaltungsschicht: Bestätigen,
//! Abbrechen und der Gruppen-Modifier werden hier abgefangen, bevor ein
//! Modus-Handler sie sieht.

use glam::Vec2;

use super::{EditorCommand, EditorIntent, EditorSession, ModeKind};

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer `EditorCommand`s.
pub fn map_intent_to_commands(session: &EditorSession, intent: EditorIntent) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::PointerPressed { screen } => vec![EditorCommand::PointerPress { screen }],
        EditorIntent::PointerMoved { screen } => vec![EditorCommand::PointerMove { screen }],
        EditorIntent::PointerReleased { screen } => {
            vec![EditorCommand::PointerRelease { screen }]
        }
        EditorIntent::ConfirmGesture => vec![EditorCommand::Confirm],
        EditorIntent::CancelGesture => vec![
            EditorCommand::Cancel,
            EditorCommand::ClearSelection,
            EditorCommand::ForgetPick,
        ],
        EditorIntent::GroupModifierPressed => {
            if session.mode_kind() == ModeKind::Neutral {
                vec![EditorCommand::SetMode {
                    mode: ModeKind::MoveGroup,
                }]
            } else {
                Vec::new()
            }
        }
        EditorIntent::GroupModifierReleased => {
            if session.mode_kind() == ModeKind::MoveGroup {
                vec![EditorCommand::Cancel]
            } else {
                Vec::new()
            }
        }
        EditorIntent::ModeRequested { mode } => vec![EditorCommand::SetMode { mode }],
        EditorIntent::CreateTemplateSelected { template } => {
            vec![EditorCommand::SetCreateTemplate { template }]
        }
        EditorIntent::SnapDistanceChanged { distance } => vec![EditorCommand::SetSnapDistance {
            distance: Vec2::from(distance),
        }],
        EditorIntent::GridCellSizeChanged { size } => vec![EditorCommand::SetGridCellSize {
            size: Vec2::from(size),
        }],
        EditorIntent::SnapToggled { enabled } => vec![EditorCommand::SetSnapEnabled { enabled }],
        EditorIntent::GridVisibilityToggled { visible } => {
            vec![EditorCommand::SetGridVisible { visible }]
        }
        EditorIntent::ReadOnlyChanged { read_only } => {
            vec![EditorCommand::SetReadOnly { read_only }]
        }
        EditorIntent::InteractiveChanged { interactive } => {
            vec![EditorCommand::SetInteractive { interactive }]
        }
    }
}
