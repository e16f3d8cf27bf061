//! Renderer für Kontrollpunkt-Marker.

use super::types::{rgba_to_egui, RenderContext};
use crate::shared::RenderScene;

/// Breite der Outline um das aktive Drag-Ziel.
const SELECTED_OUTLINE_WIDTH: f32 = 2.0;

/// Erzeugt gefüllte Kreise für alle Kontrollpunkte (leer wenn ausgeblendet).
pub(crate) fn marker_shapes(ctx: &RenderContext, scene: &RenderScene) -> Vec<egui::Shape> {
    if !scene.has_visible_markers() {
        return Vec::new();
    }

    let fill = rgba_to_egui(scene.marker_color);
    let mut shapes: Vec<egui::Shape> = scene
        .control_points
        .iter()
        .map(|&p| egui::Shape::circle_filled(ctx.to_screen(p), scene.marker_radius, fill))
        .collect();

    if let Some(point) = scene
        .selected_index
        .and_then(|index| scene.control_points.get(index))
    {
        shapes.push(egui::Shape::circle_stroke(
            ctx.to_screen(*point),
            scene.marker_radius + SELECTED_OUTLINE_WIDTH,
            egui::Stroke::new(
                SELECTED_OUTLINE_WIDTH,
                rgba_to_egui(scene.marker_color_selected),
            ),
        ));
    }

    shapes
}
