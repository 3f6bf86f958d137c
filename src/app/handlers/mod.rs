//! Feature-Handler für EditorCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Modus bzw.
//! Feature-Bereichs. Der Controller dispatcht an die passende Handler-Funktion.

pub mod armed;
pub mod breakpoint;
pub mod create;
pub mod mode;
pub mod move_group;
pub mod neutral;
pub mod settings;
