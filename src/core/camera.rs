//! 2D-Kamera für Pan und Zoom der Diagramm-Ansicht.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Diagramm-Position in der Viewport-Mitte
    pub position: Vec2,
    /// Zoom-Level in Screen-Pixeln pro Diagramm-Einheit
    pub zoom: f32,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 1.0;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 512.0;

    /// Erstellt eine Kamera im Ursprung mit gegebenem Zoom.
    pub fn new(zoom: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Konvertiert Screen-Koordinaten zu Diagramm-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, viewport_size: Vec2) -> Vec2 {
        (screen_pos - viewport_size * 0.5) / self.zoom + self.position
    }

    /// Konvertiert Diagramm-Koordinaten zu Screen-Koordinaten.
    pub fn world_to_screen(&self, world_pos: Vec2, viewport_size: Vec2) -> Vec2 {
        (world_pos - self.position) * self.zoom + viewport_size * 0.5
    }

    /// Pick-Radius in Diagramm-Einheiten für einen Radius in Screen-Pixeln.
    pub fn pick_radius_world(&self, pick_radius_px: f32) -> f32 {
        pick_radius_px / self.zoom
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(crate::shared::options::PIXELS_PER_UNIT)
    }
}
