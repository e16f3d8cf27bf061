//! Handler für Datei-Operationen (Laden, Speichern).

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Datei-Öffnen-Dialog.
pub fn request_load(state: &mut AppState) {
    use_cases::file_io::request_load_file(state);
}

/// Öffnet den Datei-Speichern-Dialog.
pub fn request_save(state: &mut AppState) {
    use_cases::file_io::request_save_file(state);
}

/// Lädt eine Kurvendatei. Fehler landen in der Statusleiste.
pub fn load(state: &mut AppState, path: String) {
    use_cases::file_io::load_curve(state, path);
}

/// Speichert das Dokument. Fehler landen in der Statusleiste.
pub fn save(state: &mut AppState, path: String) {
    use_cases::file_io::save_curve(state, path);
}
