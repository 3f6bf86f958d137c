//! Editor-Controller für zentrale Event-Verarbeitung.

use glam::Vec2;

use super::{EditorCommand, EditorIntent, EditorSession, ModeKind};
use crate::scene::SceneBackend;

/// Orchestriert Host-Events und Use-Cases auf der Editor-Session.
///
/// Zustandslos: Session und Szene werden pro Aufruf übergeben.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        session: &mut EditorSession,
        scene: &mut dyn SceneBackend,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(session, intent);
        for command in commands {
            self.handle_command(session, scene, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(
        &self,
        session: &EditorSession,
        intent: EditorIntent,
    ) -> Vec<EditorCommand> {
        super::intent_mapping::map_intent_to_commands(session, intent)
    }

    /// Führt mutierende Commands auf der Session aus.
    /// Dispatcht an Modus- und Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        session: &mut EditorSession,
        scene: &mut dyn SceneBackend,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        session.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Modus-Protokoll ===
            EditorCommand::Confirm => handlers::mode::confirm(session, scene),
            EditorCommand::Cancel => handlers::mode::cancel(session, scene),
            EditorCommand::ClearSelection => handlers::mode::clear_selection(session),
            EditorCommand::ForgetPick => handlers::mode::forget_pick(session),
            EditorCommand::SetMode { mode } => handlers::mode::set_mode(session, scene, mode),

            // === Zeiger ===
            EditorCommand::PointerPress { screen } => Self::pointer_press(session, scene, screen),
            EditorCommand::PointerMove { screen } => Self::pointer_move(session, scene, screen),
            EditorCommand::PointerRelease { screen } => {
                Self::pointer_release(session, scene, screen)
            }

            // === Einstellungen ===
            EditorCommand::SetCreateTemplate { template } => {
                handlers::settings::set_create_template(session, template)
            }
            EditorCommand::SetSnapDistance { distance } => {
                handlers::settings::set_snap_distance(session, distance)?
            }
            EditorCommand::SetGridCellSize { size } => {
                handlers::settings::set_grid_cell_size(session, size)?
            }
            EditorCommand::SetSnapEnabled { enabled } => {
                handlers::settings::set_snap_enabled(session, enabled)
            }
            EditorCommand::SetGridVisible { visible } => {
                handlers::settings::set_grid_visible(session, visible)
            }
            EditorCommand::SetReadOnly { read_only } => {
                handlers::settings::set_read_only(session, scene, read_only)
            }
            EditorCommand::SetInteractive { interactive } => {
                handlers::settings::set_interactive(session, interactive)
            }
        }

        Ok(())
    }

    fn pointer_press(session: &mut EditorSession, scene: &mut dyn SceneBackend, screen: Vec2) {
        use super::handlers;

        session.track_pointer(scene, screen);
        match session.mode_kind() {
            ModeKind::Neutral => handlers::neutral::press(session, scene, screen),
            ModeKind::Create => handlers::create::press(session, scene, screen),
            ModeKind::Delete | ModeKind::Rotate => handlers::armed::press(session, scene, screen),
            ModeKind::AddBreakpoint => handlers::breakpoint::add_press(session, scene, screen),
            ModeKind::RemoveBreakpoint => {
                handlers::breakpoint::remove_press(session, scene, screen)
            }
            ModeKind::MoveGroup => handlers::move_group::press(session, scene, screen),
        }
    }

    fn pointer_move(session: &mut EditorSession, scene: &mut dyn SceneBackend, screen: Vec2) {
        use super::handlers;

        session.track_pointer(scene, screen);
        match session.mode_kind() {
            ModeKind::Neutral => handlers::neutral::pointer_move(session, scene, screen),
            ModeKind::Create => handlers::create::pointer_move(session, scene, screen),
            ModeKind::AddBreakpoint => handlers::breakpoint::add_move(session, scene, screen),
            ModeKind::MoveGroup => handlers::move_group::pointer_move(session, scene, screen),
            ModeKind::Delete | ModeKind::Rotate | ModeKind::RemoveBreakpoint => {}
        }
    }

    fn pointer_release(session: &mut EditorSession, scene: &mut dyn SceneBackend, screen: Vec2) {
        use super::handlers;

        session.track_pointer(scene, screen);
        match session.mode_kind() {
            ModeKind::Neutral => handlers::neutral::release(session, scene),
            ModeKind::AddBreakpoint => handlers::breakpoint::add_release(session),
            ModeKind::MoveGroup => handlers::move_group::release(session),
            ModeKind::Create
            | ModeKind::Delete
            | ModeKind::Rotate
            | ModeKind::RemoveBreakpoint => {}
        }
    }
}
