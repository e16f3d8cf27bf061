//! Datei-Dialoge (rfd) für Laden und Speichern.

use crate::app::{AppIntent, UiState};

const JSON_FILTER_NAME: &str = "JSON Files";
const JSON_EXTENSIONS: &[&str] = &["json"];
const DEFAULT_FILE_NAME: &str = "curve.json";

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
///
/// Ein abgebrochener Dialog erzeugt kein Event.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Laden
    if ui_state.show_load_dialog {
        ui_state.show_load_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter(JSON_FILTER_NAME, JSON_EXTENSIONS)
            .pick_file()
        {
            events.push(AppIntent::LoadFilePathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Speichern
    if ui_state.show_save_dialog {
        ui_state.show_save_dialog = false;

        let default_name = ui_state
            .current_file_path
            .as_ref()
            .and_then(|p| std::path::Path::new(p).file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_FILE_NAME);

        if let Some(path) = rfd::FileDialog::new()
            .add_filter(JSON_FILTER_NAME, JSON_EXTENSIONS)
            .set_file_name(default_name)
            .save_file()
        {
            events.push(AppIntent::SaveFilePathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
