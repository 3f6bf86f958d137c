//! Fehler bei Mutationen des Diagramm-Modells.

use thiserror::Error;

use super::{ElementId, LineId, PortRef};

/// Verstoß gegen eine Invariante des Diagramm-Modells
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiagramError {
    #[error("Element {0:?} existiert nicht")]
    UnknownElement(ElementId),
    #[error("Linie {0:?} existiert nicht")]
    UnknownLine(LineId),
    #[error("Port {0:?} existiert nicht")]
    UnknownPort(PortRef),
    #[error("Linie muss von einem Ausgang zu einem Eingang führen ({from:?} → {to:?})")]
    WrongPortDirection { from: PortRef, to: PortRef },
    #[error("Linie würde Element {0:?} mit sich selbst verbinden")]
    SelfLoop(ElementId),
    #[error("Eingang {port:?} ist bereits durch Linie {line:?} belegt")]
    InputOccupied { port: PortRef, line: LineId },
    #[error("Knickpunkt {index} von Linie {line:?} existiert nicht")]
    BreakpointOutOfRange { line: LineId, index: usize },
}
