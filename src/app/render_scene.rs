//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{build_path, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let document = &state.document;

    RenderScene {
        polyline: build_path(document.points()),
        control_points: document.points().to_vec(),
        selected_index: document.selected_index(),
        stroke_color: document.stroke_color(),
        stroke_width: document.stroke_width(),
        show_points: document.show_points(),
        marker_radius: state.options.marker_radius,
        marker_color: state.options.marker_color,
        marker_color_selected: state.options.marker_color_selected,
        background_color: state.options.background_color,
    }
}
