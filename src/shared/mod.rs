//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die von `core`, `app` und `scene`
//! gleichermaßen gelesen werden.

pub mod options;

pub use options::EditorOptions;
pub use options::{DRAW_STANDOFF, PICK_RADIUS_PX, PIXELS_PER_UNIT};
