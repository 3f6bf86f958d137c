//! Editor-Modi und ihre Unterzustände für mehrstufige Gesten.
//!
//! Jeder Modus trägt seinen eigenen Unterzustand; die erste Variante ist
//! jeweils der Leerlauf.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::{ElementId, LineDetail, LineId, ObjectRef, PortRef};

/// Art des aktiven Modus (ohne Unterzustand)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeKind {
    /// Auswählen, Verschieben, Verbinden
    Neutral,
    /// Neues Element platzieren
    Create,
    /// Element oder Linie löschen
    Delete,
    /// Element drehen
    Rotate,
    /// Knickpunkt in eine Linie einfügen
    AddBreakpoint,
    /// Knickpunkt aus einer Linie entfernen
    RemoveBreakpoint,
    /// Mehrere Elemente gemeinsam verschieben
    MoveGroup,
}

/// Art des Neutral-Unterzustands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeutralType {
    /// Untersuchen/Auswählen
    Exam,
    /// Ein Element wird gezogen
    MoveElement,
    /// Eine Linie wird aufgezogen
    Draw,
    /// Punkt oder Segment einer Linie wird gezogen
    MoveLine,
}

/// Rückmeldung des Ziel-Ports beim Aufziehen einer Linie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawState {
    /// Kein gültiges Ziel unter dem Cursor
    Invalid,
    /// Freier Eingang eines anderen Elements
    Valid(PortRef),
    /// Eingang ist bereits verbunden
    Occupied,
}

/// Rückmeldung beim Ziehen eines Linienpunkts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMoveState {
    /// Letzte Verschiebung war erlaubt
    Tracking,
    /// Letzte Verschiebung wurde abgelehnt
    Blocked,
}

/// Unterzustand des Neutral-Modus samt Gesten-Kontext
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeutralState {
    /// Untersuchen/Auswählen
    Exam,
    /// Element folgt dem Cursor
    MoveElement { element: ElementId },
    /// Linie wird vom Ausgang `source` aufgezogen
    Draw { source: PortRef, state: DrawState },
    /// Linienpunkt `detail` folgt dem Cursor
    MoveLine {
        line: LineId,
        detail: LineDetail,
        state: LineMoveState,
    },
}

impl NeutralState {
    /// Art des Unterzustands
    pub fn kind(&self) -> NeutralType {
        match self {
            NeutralState::Exam => NeutralType::Exam,
            NeutralState::MoveElement { .. } => NeutralType::MoveElement,
            NeutralState::Draw { .. } => NeutralType::Draw,
            NeutralState::MoveLine { .. } => NeutralType::MoveLine,
        }
    }
}

/// Ausstehendes Element im Create-Modus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateState {
    /// Erzeugt, aber noch nie bewegt
    Hidden(ElementId),
    /// Folgt dem Cursor
    Shown(ElementId),
}

impl CreateState {
    /// ID des ausstehenden Elements
    pub fn element(&self) -> ElementId {
        match self {
            CreateState::Hidden(id) | CreateState::Shown(id) => *id,
        }
    }
}

/// Zwei-Phasen-Zustand für Delete und Rotate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmState {
    /// Noch kein Ziel gewählt
    Idle,
    /// Ziel gewählt, wartet auf Bestätigung
    Armed(ObjectRef),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddBreakpointState {
    Idle,
    /// Provisorischer Knickpunkt folgt dem Cursor
    Placing { line: LineId, index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveBreakpointState {
    Idle,
    /// Innerer Knickpunkt getroffen, entfernbar
    Candidate { line: LineId, index: usize },
    /// Endpunkt getroffen (an Port gebunden)
    NotRemovable,
    /// Segment oder nichts getroffen
    Invalid,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MoveGroupState {
    Idle,
    /// Auswahl steht, wartet auf Drag
    Ready,
    /// Versatz jedes selektierten Elements zum Greifpunkt
    Dragging { offsets: Vec<(ElementId, Vec2)> },
}

/// Aktiver Modus mit Unterzustand
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMode {
    Neutral(NeutralState),
    Create(CreateState),
    Delete(ArmState),
    Rotate(ArmState),
    AddBreakpoint(AddBreakpointState),
    RemoveBreakpoint(RemoveBreakpointState),
    MoveGroup(MoveGroupState),
}

impl Default for EditorMode {
    fn default() -> Self {
        EditorMode::Neutral(NeutralState::Exam)
    }
}

impl EditorMode {
    /// Art des Modus
    pub fn kind(&self) -> ModeKind {
        match self {
            EditorMode::Neutral(_) => ModeKind::Neutral,
            EditorMode::Create(_) => ModeKind::Create,
            EditorMode::Delete(_) => ModeKind::Delete,
            EditorMode::Rotate(_) => ModeKind::Rotate,
            EditorMode::AddBreakpoint(_) => ModeKind::AddBreakpoint,
            EditorMode::RemoveBreakpoint(_) => ModeKind::RemoveBreakpoint,
            EditorMode::MoveGroup(_) => ModeKind::MoveGroup,
        }
    }

    /// Neutral-Unterzustand, falls der Modus `Neutral` ist.
    pub fn neutral(&self) -> Option<&NeutralState> {
        match self {
            EditorMode::Neutral(state) => Some(state),
            _ => None,
        }
    }

    /// `true`, wenn der Unterzustand der Leerlauf des Modus ist.
    pub fn is_idle(&self) -> bool {
        match self {
            EditorMode::Neutral(state) => *state == NeutralState::Exam,
            EditorMode::Create(state) => matches!(state, CreateState::Hidden(_)),
            EditorMode::Delete(state) | EditorMode::Rotate(state) => *state == ArmState::Idle,
            EditorMode::AddBreakpoint(state) => *state == AddBreakpointState::Idle,
            EditorMode::RemoveBreakpoint(state) => *state == RemoveBreakpointState::Idle,
            EditorMode::MoveGroup(state) => *state == MoveGroupState::Idle,
        }
    }

    /// Kurzer Hinweistext für die Statuszeile des Hosts.
    pub fn hint(&self) -> &'static str {
        match self {
            EditorMode::Neutral(state) => match state {
                NeutralState::Exam => "Select an element or line",
                NeutralState::MoveElement { .. } => "Drag to move the element",
                NeutralState::Draw { state, .. } => match state {
                    DrawState::Invalid => "Drag to an unconnected input port",
                    DrawState::Valid(_) => "Release to connect",
                    DrawState::Occupied => "Input port is already connected",
                },
                NeutralState::MoveLine { state, .. } => match state {
                    LineMoveState::Tracking => "Drag to move the line point",
                    LineMoveState::Blocked => "This part of the line is bound to a port",
                },
            },
            EditorMode::Create(state) => match state {
                CreateState::Hidden(_) => "Move the pointer to place the new element",
                CreateState::Shown(_) => "Click to place the element",
            },
            EditorMode::Delete(state) => match state {
                ArmState::Idle => "Select an element or line to delete",
                ArmState::Armed(_) => "Confirm to delete the selection",
            },
            EditorMode::Rotate(state) => match state {
                ArmState::Idle => "Select an element to rotate",
                ArmState::Armed(_) => "Confirm to rotate the element",
            },
            EditorMode::AddBreakpoint(state) => match state {
                AddBreakpointState::Idle => "Click on a line to add a breakpoint",
                AddBreakpointState::Placing { .. } => "Release to place the breakpoint",
            },
            EditorMode::RemoveBreakpoint(state) => match state {
                RemoveBreakpointState::Idle => "Click on a breakpoint to remove it",
                RemoveBreakpointState::Candidate { .. } => "Confirm to remove the breakpoint",
                RemoveBreakpointState::NotRemovable => "Line end points cannot be removed",
                RemoveBreakpointState::Invalid => "No breakpoint at this position",
            },
            EditorMode::MoveGroup(state) => match state {
                MoveGroupState::Idle => "Add elements to the group",
                MoveGroupState::Ready => "Drag to move the group",
                MoveGroupState::Dragging { .. } => "Release to drop the group",
            },
        }
    }
}

/// Meldungen der Session an den Host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorNotification {
    /// Der Modus hat gewechselt
    ModeChanged { from: ModeKind, to: ModeKind },
    /// Der Neutral-Unterzustand hat gewechselt
    NeutralTypeChanged { from: NeutralType, to: NeutralType },
}
