//! Renderer für die abgetastete Kurve.

use super::types::{curve_color_to_egui, RenderContext};
use crate::shared::RenderScene;

/// Erzeugt die Linien-Shape der Kurve (None bei weniger als zwei Vertices).
pub(crate) fn curve_shape(ctx: &RenderContext, scene: &RenderScene) -> Option<egui::Shape> {
    if !scene.has_curve() {
        return None;
    }

    let points: Vec<egui::Pos2> = scene.polyline.iter().map(|&p| ctx.to_screen(p)).collect();
    let stroke = egui::Stroke::new(
        scene.stroke_width as f32,
        curve_color_to_egui(scene.stroke_color),
    );
    Some(egui::Shape::line(points, stroke))
}
