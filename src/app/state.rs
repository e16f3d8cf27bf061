//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::CurveDocument;
use crate::shared::EditorOptions;
use std::path::PathBuf;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_load_dialog: bool,
    /// Ob der Save-Datei-Dialog geöffnet werden soll
    pub show_save_dialog: bool,
    /// Pfad der zuletzt geladenen/gespeicherten Datei (Vorbelegung im Dialog)
    pub current_file_path: Option<String>,
    /// Statusnachricht der letzten Aktion
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_load_dialog: false,
            show_save_dialog: false,
            current_file_path: None,
            status_message: Some("Bereit".to_string()),
        }
    }

    /// Setzt die Statusnachricht.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Das bearbeitete Kurvendokument
    pub document: CurveDocument,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen)
    pub options: EditorOptions,
    /// Zieldatei der Optionen beim Beenden (`None`: nicht speichern)
    pub options_path: Option<PathBuf>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerem Dokument
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State; das leere Dokument übernimmt den Standardstil der Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut document = CurveDocument::new();
        document.set_stroke_color(options.default_stroke_color);
        document.set_stroke_width(options.default_stroke_width);

        Self {
            document,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            options_path: None,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.document.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
