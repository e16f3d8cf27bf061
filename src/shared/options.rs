//! Zentrale Konfiguration für den Spline Curve Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Darstellungswerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CurveColor, DEFAULT_STROKE_WIDTH};
use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Fenstergröße (wie das ursprüngliche 800×600-Fenster).
pub const WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

// ── Marker ─────────────────────────────────────────────────────────

/// Radius der Kontrollpunkt-Marker in Pixeln.
pub const MARKER_RADIUS: f32 = 5.0;
/// Füllfarbe der Kontrollpunkt-Marker (RGBA: Rot).
pub const MARKER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Outline-Farbe des aktiven Drag-Ziels (RGBA: Orange).
pub const MARKER_COLOR_SELECTED: [f32; 4] = [1.0, 0.6, 0.0, 1.0];

// ── Canvas ─────────────────────────────────────────────────────────

/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `spline_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Fenstergröße beim Start [Breite, Höhe]
    pub window_size: [f32; 2],
    /// Marker-Radius in Pixeln
    pub marker_radius: f32,
    /// Füllfarbe der Marker
    pub marker_color: [f32; 4],
    /// Outline-Farbe des aktiven Drag-Ziels
    pub marker_color_selected: [f32; 4],
    /// Hintergrundfarbe der Zeichenfläche
    pub background_color: [f32; 4],
    /// Strichfarbe neuer Dokumente
    pub default_stroke_color: CurveColor,
    /// Strichbreite neuer Dokumente
    pub default_stroke_width: u32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            marker_radius: MARKER_RADIUS,
            marker_color: MARKER_COLOR,
            marker_color_selected: MARKER_COLOR_SELECTED,
            background_color: BACKGROUND_COLOR,
            default_stroke_color: CurveColor::BLUE,
            default_stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spline_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spline_curve_editor.toml")
    }
}
