//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.
//!
//! Fehler beim Laden/Speichern werden hier abgefangen: Statusnachricht +
//! Log-Warnung, das Dokument im Speicher bleibt beim Laden unverändert.

use crate::app::AppState;
use crate::curve_file::{load_curve_file, save_curve_file};
use std::path::Path;

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_load_file(state: &mut AppState) {
    state.ui.show_load_dialog = true;
}

/// Öffnet den Save-Datei-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_dialog = true;
}

/// Lädt eine Kurvendatei und ersetzt das Dokument atomar.
///
/// Gibt `true` zurück, wenn das Dokument ersetzt wurde.
pub fn load_curve(state: &mut AppState, path: String) -> bool {
    match load_curve_file(Path::new(&path)) {
        Ok(document) => {
            log::info!(
                "Kurve geladen: {} ({} Punkte)",
                path,
                document.len()
            );
            state.document = document;
            state.ui.set_status(format!("Kurve geladen: {}", path));
            state.ui.current_file_path = Some(path);
            true
        }
        Err(e) => {
            log::warn!("Laden fehlgeschlagen: {}", e);
            state.ui.set_status(format!("Laden fehlgeschlagen: {}", e));
            false
        }
    }
}

/// Übernimmt den aktuellen Kurvenstil als Standard und schreibt die Optionen.
///
/// Ohne `options_path` werden nur die Optionen im Speicher aktualisiert.
pub fn persist_options(state: &mut AppState) {
    state.options.default_stroke_color = state.document.stroke_color();
    state.options.default_stroke_width = state.document.stroke_width();

    let Some(path) = state.options_path.as_deref() else {
        return;
    };
    if let Err(e) = state.options.save_to_file(path) {
        log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
    }
}

/// Speichert das aktuelle Dokument unter `path`.
///
/// Gibt `true` zurück, wenn die Datei geschrieben wurde.
pub fn save_curve(state: &mut AppState, path: String) -> bool {
    match save_curve_file(Path::new(&path), &state.document) {
        Ok(()) => {
            log::info!("Kurve gespeichert: {}", path);
            state.ui.set_status(format!("Kurve gespeichert nach {}", path));
            state.ui.current_file_path = Some(path);
            true
        }
        Err(e) => {
            log::warn!("Speichern fehlgeschlagen: {}", e);
            state.ui.set_status(format!("Speichern fehlgeschlagen: {}", e));
            false
        }
    }
}
