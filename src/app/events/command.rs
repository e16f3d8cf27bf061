use crate::core::{CurveColor, Point};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Press-Start: Punkt treffen oder neuen Punkt anhängen
    PressAt { pos: Point },
    /// Aktives Drag-Ziel verschieben
    DragSelectedTo { pos: Point, button_held: bool },
    /// Press-Ende: Drag beenden
    EndPress,
    /// Punkt unter der Position entfernen
    RemovePointAt { pos: Point },
    /// Alle Kontrollpunkte entfernen
    ClearPoints,
    /// Marker-Sichtbarkeit umschalten
    TogglePointVisibility,
    /// Strichfarbe setzen
    SetStrokeColor { color: CurveColor },
    /// Strichbreite setzen
    SetStrokeWidth { width: u32 },
    /// Datei-Öffnen-Dialog anfordern
    RequestLoadFileDialog,
    /// Datei-Speichern-Dialog anfordern
    RequestSaveFileDialog,
    /// Kurvendatei laden
    LoadFile { path: String },
    /// Kurvendatei speichern
    SaveFile { path: String },
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Kurzbezeichnung für die Statusleiste.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PressAt { .. } => "Punkt setzen/wählen",
            Self::DragSelectedTo { .. } => "Punkt ziehen",
            Self::EndPress => "Ziehen beendet",
            Self::RemovePointAt { .. } => "Punkt entfernen",
            Self::ClearPoints => "Leeren",
            Self::TogglePointVisibility => "Punkte ein/aus",
            Self::SetStrokeColor { .. } => "Farbe",
            Self::SetStrokeWidth { .. } => "Linienbreite",
            Self::RequestLoadFileDialog => "Laden-Dialog",
            Self::RequestSaveFileDialog => "Speichern-Dialog",
            Self::LoadFile { .. } => "Laden",
            Self::SaveFile { .. } => "Speichern",
            Self::RequestExit => "Beenden",
        }
    }
}
