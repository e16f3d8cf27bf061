//! Use-Cases: Kontrollpunkte setzen, ziehen, entfernen, leeren.

use crate::app::AppState;
use crate::core::{Point, PressOutcome};

/// Press-Start auf der Zeichenfläche.
///
/// Trifft die Position einen Punkt, wird er Drag-Ziel; sonst wird ein
/// neuer Punkt angehängt und ist sofort ziehbar.
pub fn press_at(state: &mut AppState, pos: Point) {
    match state.document.on_press_start(pos) {
        PressOutcome::Selected(index) => {
            log::debug!("Punkt {} gewählt bei ({:.1}, {:.1})", index, pos.x, pos.y);
        }
        PressOutcome::Inserted(index) => {
            log::debug!("Punkt {} gesetzt bei ({:.1}, {:.1})", index, pos.x, pos.y);
        }
    }
}

/// Verschiebt das aktive Drag-Ziel, solange die Drag-Taste gehalten wird.
pub fn drag_selected_to(state: &mut AppState, pos: Point, button_held: bool) {
    state.document.on_drag_move(pos, button_held);
}

/// Beendet den aktiven Drag.
pub fn end_press(state: &mut AppState) {
    state.document.on_press_end();
}

/// Entfernt den ersten Punkt unter `pos` (gleiche Pick-Regel wie beim Press).
pub fn remove_point_at(state: &mut AppState, pos: Point) {
    let Some(index) = state.document.hit_test(pos) else {
        return;
    };
    if state.document.remove_point(index).is_some() {
        log::info!("Punkt {} entfernt", index);
        state.ui.set_status(format!("Punkt {} entfernt", index));
    }
}

/// Entfernt alle Kontrollpunkte; Stil und Sichtbarkeit bleiben.
pub fn clear_points(state: &mut AppState) {
    let removed = state.document.len();
    state.document.clear();
    log::info!("Zeichenfläche geleert ({} Punkte entfernt)", removed);
    state.ui.set_status("Zeichenfläche geleert");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CurveColor, CurveDocument};

    #[test]
    fn remove_point_at_misses_leave_document_untouched() {
        let mut state = AppState::new();
        press_at(&mut state, Point::new(0.0, 0.0));
        end_press(&mut state);

        remove_point_at(&mut state, Point::new(40.0, 40.0));
        assert_eq!(state.point_count(), 1);
    }

    #[test]
    fn remove_point_at_uses_first_hit() {
        let mut state = AppState::new();
        state.document = CurveDocument::from_parts(
            vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(100.0, 0.0)],
            CurveColor::BLUE,
            2,
            true,
        );

        remove_point_at(&mut state, Point::new(3.0, 0.0));
        assert_eq!(
            state.document.points(),
            &[Point::new(4.0, 0.0), Point::new(100.0, 0.0)]
        );
        assert_eq!(state.ui.status_message.as_deref(), Some("Punkt 0 entfernt"));
    }
}
