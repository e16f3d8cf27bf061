//! Untere Leiste mit dem Linienbreiten-Slider.

use crate::app::{AppIntent, AppState};
use crate::core::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};

/// Rendert den Slider für die Strichbreite.
///
/// Liegt eine geladene Breite außerhalb des Slider-Bereichs, bleibt sie
/// erhalten, bis der Benutzer den Slider bewegt.
pub fn render_control_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let current = state.document.stroke_width();

    egui::TopBottomPanel::bottom("control_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Linienbreite:");
            let mut width = current;
            let response =
                ui.add(egui::Slider::new(&mut width, MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH));
            if response.changed() && width != current {
                events.push(AppIntent::StrokeWidthChanged { width });
            }
        });
    });

    events
}
