//! Handler für Raster-, Vorlagen- und Session-Einstellungen.

use glam::Vec2;

use crate::app::EditorSession;
use crate::core::ElementTemplate;
use crate::scene::SceneBackend;

/// Setzt den gewünschten Snap-Abstand (wird pro Achse an das Raster angepasst).
pub fn set_snap_distance(session: &mut EditorSession, distance: Vec2) -> anyhow::Result<()> {
    anyhow::ensure!(distance.is_finite(), "Ungültiger Snap-Abstand: {:?}", distance);
    session.grid.set_snap_distance(distance);
    session.options.snap_distance = distance.to_array();
    Ok(())
}

/// Setzt die Rastergröße; der Snap-Abstand wird vom Wunschwert aus neu angepasst.
pub fn set_grid_cell_size(session: &mut EditorSession, size: Vec2) -> anyhow::Result<()> {
    anyhow::ensure!(
        size.is_finite() && size.x > 0.0 && size.y > 0.0,
        "Ungültige Rastergröße: {:?}",
        size
    );
    session.grid.set_cell_size(size);
    session.options.grid_cell_size = size.to_array();
    Ok(())
}

/// Schaltet das Einrasten ein oder aus.
pub fn set_snap_enabled(session: &mut EditorSession, enabled: bool) {
    session.grid.snap_enabled = enabled;
    session.options.snap_enabled = enabled;
    log::info!("Einrasten: {}", enabled);
}

/// Schaltet die Rasteranzeige ein oder aus.
pub fn set_grid_visible(session: &mut EditorSession, visible: bool) {
    session.grid.show_grid = visible;
    session.options.show_grid = visible;
}

pub fn set_create_template(session: &mut EditorSession, template: ElementTemplate) {
    session.set_create_template(template);
}

pub fn set_read_only(session: &mut EditorSession, scene: &mut dyn SceneBackend, read_only: bool) {
    session.set_read_only(scene, read_only);
}

pub fn set_interactive(session: &mut EditorSession, interactive: bool) {
    session.set_interactive(interactive);
}
