//! Begrenztes Command-Log für Tests und das Replay.
//!
//! Aufeinanderfolgende Zeigerbewegungen werden zu einem Eintrag
//! zusammengefasst, damit ein langer Drag die übrigen Commands nicht
//! aus dem Log verdrängt.

use std::collections::VecDeque;

use super::EditorCommand;

/// Maximale Anzahl gespeicherter Einträge
const MAX_ENTRIES: usize = 256;

/// Ausgeführte Commands in Reihenfolge, älteste werden einzeln verdrängt.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<EditorCommand>,
    /// Anzahl in den letzten Eintrag eingeflossener Zeigerbewegungen
    merged_moves: usize,
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen ausgeführten Command hinzu.
    pub fn record(&mut self, command: EditorCommand) {
        let is_move = |c: &EditorCommand| matches!(c, EditorCommand::PointerMove { .. });
        if is_move(&command) && self.entries.back().is_some_and(is_move) {
            if let Some(last) = self.entries.back_mut() {
                *last = command;
                self.merged_moves += 1;
                return;
            }
        }

        if self.entries.len() == MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(command);
        self.merged_moves = 0;
    }

    /// Anzahl der gespeicherten Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle Einträge, ältester zuerst.
    pub fn entries(&self) -> impl Iterator<Item = &EditorCommand> {
        self.entries.iter()
    }

    /// Letzter ausgeführter Command
    pub fn last(&self) -> Option<&EditorCommand> {
        self.entries.back()
    }

    /// Wie viele Zeigerbewegungen im letzten Eintrag zusammengefasst sind.
    pub fn merged_moves(&self) -> usize {
        self.merged_moves
    }
}
