//! Viewport-Input-Handling: Pointer-Events der Zeichenfläche auf AppIntents mappen.
//!
//! Positionen werden relativ zur linken oberen Ecke der Zeichenfläche
//! gemeldet, damit sie mit den gespeicherten Koordinaten übereinstimmen.

use super::keyboard;
use crate::app::{AppIntent, PointerButton};
use crate::core::Point;

const BUTTONS: [(egui::PointerButton, PointerButton); 3] = [
    (egui::PointerButton::Primary, PointerButton::Primary),
    (egui::PointerButton::Secondary, PointerButton::Secondary),
    (egui::PointerButton::Middle, PointerButton::Middle),
];

/// Verwaltet den Input-Zustand für das Viewport (Press-Tracking).
#[derive(Default)]
pub struct InputState {
    /// Primärtaste wurde innerhalb der Zeichenfläche gedrückt
    primary_press_in_canvas: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events (Press, Move, Release, Shortcuts) und gibt AppIntents zurück.
    ///
    /// Press zählt nur innerhalb von `response.rect`; Move und Release werden
    /// auch außerhalb gemeldet, solange ein Drag aus der Zeichenfläche läuft.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = keyboard::collect_keyboard_intents(ui);
        let canvas = response.rect;

        let (latest_pos, is_moving, primary_down) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.is_moving(),
                i.pointer.primary_down(),
            )
        });

        for (egui_button, button) in BUTTONS {
            let pressed = ui.input(|i| i.pointer.button_pressed(egui_button));
            if !pressed {
                continue;
            }
            let Some(pos) = ui.input(|i| i.pointer.press_origin()).or(latest_pos) else {
                continue;
            };
            if !canvas.contains(pos) || !response.hovered() {
                continue;
            }
            if button == PointerButton::Primary {
                self.primary_press_in_canvas = true;
            }
            events.push(AppIntent::PointerPressed {
                pos: to_canvas_point(canvas, pos),
                button,
            });
        }

        if is_moving && self.primary_press_in_canvas {
            if let Some(pos) = latest_pos {
                events.push(AppIntent::PointerMoved {
                    pos: to_canvas_point(canvas, pos),
                    primary_held: primary_down,
                });
            }
        }

        for (egui_button, button) in BUTTONS {
            let released = ui.input(|i| i.pointer.button_released(egui_button));
            if !released {
                continue;
            }
            if button == PointerButton::Primary {
                if !self.primary_press_in_canvas {
                    continue;
                }
                self.primary_press_in_canvas = false;
            }
            events.push(AppIntent::PointerReleased { button });
        }

        events
    }
}

/// Rechnet eine Bildschirmposition in Zeichenflächen-Koordinaten um.
pub(crate) fn to_canvas_point(canvas: egui::Rect, pos: egui::Pos2) -> Point {
    let local = pos - canvas.min;
    Point::new(local.x as f64, local.y as f64)
}
