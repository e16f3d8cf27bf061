//! Rendering-Typen und Koordinaten-/Farbkonvertierung.

use crate::core::{CurveColor, Point};

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Kurvenkoordinaten sind Pixel relativ zur linken oberen Ecke der
/// Zeichenfläche; `origin` ist diese Ecke in egui-Screen-Koordinaten.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RenderContext {
    pub origin: egui::Pos2,
}

impl RenderContext {
    /// Erstellt den Kontext für eine Zeichenfläche.
    pub fn new(canvas_rect: egui::Rect) -> Self {
        Self {
            origin: canvas_rect.min,
        }
    }

    /// Kurvenkoordinate → egui-Screen-Position.
    pub fn to_screen(&self, point: Point) -> egui::Pos2 {
        self.origin + egui::vec2(point.x as f32, point.y as f32)
    }
}

/// Konvertiert eine Kurvenfarbe in eine egui-Farbe.
pub(crate) fn curve_color_to_egui(color: CurveColor) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Konvertiert ein normalisiertes RGBA-Array in eine egui-Farbe.
pub(crate) fn rgba_to_egui(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}
