use crate::core::{CurveColor, Point};

/// Maustaste eines Pointer-Events (UI-unabhängig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Taste: Punkte setzen, wählen und ziehen
    Primary,
    /// Rechte Taste: Punkt unter dem Cursor entfernen
    Secondary,
    /// Mittlere Taste (ohne Funktion)
    Middle,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Taste über der Zeichenfläche gedrückt
    PointerPressed { pos: Point, button: PointerButton },
    /// Pointer über der Zeichenfläche bewegt
    PointerMoved { pos: Point, primary_held: bool },
    /// Taste losgelassen
    PointerReleased { button: PointerButton },
    /// Alle Kontrollpunkte entfernen
    ClearRequested,
    /// Kontrollpunkt-Marker ein-/ausblenden
    TogglePointsRequested,
    /// Farbe im Farbwähler geändert
    StrokeColorChanged { color: CurveColor },
    /// Strichbreite am Slider geändert
    StrokeWidthChanged { width: u32 },
    /// Speichern (zeigt Dateidialog)
    SaveRequested,
    /// Laden (zeigt Dateidialog)
    LoadRequested,
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveFilePathSelected { path: String },
    /// Datei wurde im Dialog ausgewählt (Laden)
    LoadFilePathSelected { path: String },
    /// Anwendung beenden
    ExitRequested,
}
