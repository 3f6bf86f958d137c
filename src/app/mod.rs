//! Application-Layer: Controller, Session, Modi, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Modus-Automat
///
/// Jeder Modus trägt seinen eigenen Unterzustand; `EditorSession` führt die
/// Übergänge samt Exit- und Entry-Hooks aus.
pub mod mode;
pub mod selection;
pub mod session;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::EditorController;
pub use events::{EditorCommand, EditorIntent};
pub use mode::{
    AddBreakpointState, ArmState, CreateState, DrawState, EditorMode, EditorNotification,
    LineMoveState, ModeKind, MoveGroupState, NeutralState, NeutralType, RemoveBreakpointState,
};
pub use selection::Selection;
pub use session::EditorSession;
