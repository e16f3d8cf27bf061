//! Rendering der Zeichenfläche mit dem egui-Painter.
//!
//! Liest ausschließlich die `RenderScene`; die Kurvengeometrie selbst
//! kommt aus `shared::spline_geometry`.

mod curve_renderer;
mod marker_renderer;
mod types;

pub use crate::shared::RenderScene;
use types::{rgba_to_egui, RenderContext};

/// Erzeugt alle Shapes eines Frames in Zeichenreihenfolge.
///
/// Hintergrund, dann Kurve, dann Marker.
pub fn scene_shapes(canvas_rect: egui::Rect, scene: &RenderScene) -> Vec<egui::Shape> {
    let ctx = RenderContext::new(canvas_rect);

    let mut shapes = vec![egui::Shape::rect_filled(
        canvas_rect,
        0.0,
        rgba_to_egui(scene.background_color),
    )];
    shapes.extend(curve_renderer::curve_shape(&ctx, scene));
    shapes.extend(marker_renderer::marker_shapes(&ctx, scene));
    shapes
}

/// Zeichnet die komplette Szene in den Painter.
pub fn paint_scene(painter: &egui::Painter, canvas_rect: egui::Rect, scene: &RenderScene) {
    painter.extend(scene_shapes(canvas_rect, scene));
}
