//! Blockdiagramm-Editor Library.
//! Modus-Automat, Direktmanipulation und Raster-Snap als Library für Hosts, Tests und Replay.

pub mod app;
pub mod core;
pub mod scene;
pub mod shared;

pub use app::{
    AddBreakpointState, ArmState, CreateState, DrawState, EditorCommand, EditorController,
    EditorIntent, EditorMode, EditorNotification, EditorSession, LineMoveState, ModeKind,
    MoveGroupState, NeutralState, NeutralType, RemoveBreakpointState, Selection,
};
pub use core::{
    adjust_snap, Diagram, DiagramError, Element, ElementId, ElementTemplate, GridSettings, Line,
    LineDetail, LineId, ObjectRef, Orientation, PortDirection, PortRef,
};
pub use core::{Camera2D, SpatialIndex, SpatialMatch};
pub use scene::{HeadlessScene, HitDetail, PickFilter, PickHit, PickQuery, SceneBackend};
pub use shared::EditorOptions;
