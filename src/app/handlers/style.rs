//! Handler für Kurvenstil und Marker-Sichtbarkeit.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CurveColor;

/// Schaltet die Kontrollpunkt-Marker um.
pub fn toggle_point_visibility(state: &mut AppState) {
    use_cases::style::toggle_point_visibility(state);
}

/// Setzt die Strichfarbe.
pub fn set_stroke_color(state: &mut AppState, color: CurveColor) {
    use_cases::style::set_stroke_color(state, color);
}

/// Setzt die Strichbreite.
pub fn set_stroke_width(state: &mut AppState, width: u32) {
    use_cases::style::set_stroke_width(state, width);
}
