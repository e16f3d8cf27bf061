//! Keyboard-Shortcuts.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_o_pressed, key_s_pressed, key_h_pressed, key_delete_pressed) =
        ui.input(|i| {
            (
                i.modifiers,
                i.key_pressed(egui::Key::O),
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::Delete),
            )
        });

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::LoadRequested);
    }

    if modifiers.command && key_s_pressed {
        events.push(AppIntent::SaveRequested);
    }

    if modifiers.is_none() && key_h_pressed {
        events.push(AppIntent::TogglePointsRequested);
    }

    if modifiers.command && key_delete_pressed {
        events.push(AppIntent::ClearRequested);
    }

    events
}
