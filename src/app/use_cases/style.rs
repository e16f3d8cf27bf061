//! Use-Cases: Strichfarbe, Strichbreite, Marker-Sichtbarkeit.

use crate::app::AppState;
use crate::core::CurveColor;

/// Schaltet die Kontrollpunkt-Marker um.
pub fn toggle_point_visibility(state: &mut AppState) {
    let visible = state.document.toggle_visibility();
    let msg = if visible {
        "Kontrollpunkte eingeblendet"
    } else {
        "Kontrollpunkte ausgeblendet"
    };
    log::info!("{}", msg);
    state.ui.set_status(msg);
}

/// Setzt die Strichfarbe.
pub fn set_stroke_color(state: &mut AppState, color: CurveColor) {
    if state.document.stroke_color() == color {
        return;
    }
    state.document.set_stroke_color(color);
    log::info!("Strichfarbe: {}", color);
    state.ui.set_status("Farbe geändert");
}

/// Setzt die Strichbreite.
pub fn set_stroke_width(state: &mut AppState, width: u32) {
    if state.document.stroke_width() == width {
        return;
    }
    state.document.set_stroke_width(width);
    log::info!("Strichbreite: {}", width);
    state.ui.set_status(format!("Linienbreite auf {} geändert", width));
}
