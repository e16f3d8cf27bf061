//! Handler für Punkt-Editing (Press/Drag/Release, Entfernen, Leeren).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Point;

/// Press-Start an der Position.
pub fn press_at(state: &mut AppState, pos: Point) {
    use_cases::editing::press_at(state, pos);
}

/// Verschiebt das aktive Drag-Ziel.
pub fn drag_selected_to(state: &mut AppState, pos: Point, button_held: bool) {
    use_cases::editing::drag_selected_to(state, pos, button_held);
}

/// Beendet den aktiven Drag.
pub fn end_press(state: &mut AppState) {
    use_cases::editing::end_press(state);
}

/// Entfernt den Punkt unter der Position.
pub fn remove_point_at(state: &mut AppState, pos: Point) {
    use_cases::editing::remove_point_at(state, pos);
}

/// Entfernt alle Kontrollpunkte.
pub fn clear(state: &mut AppState) {
    use_cases::editing::clear_points(state);
}
