//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use crate::core::{CurveColor, Point};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Abgetastete Kurve (leer bei weniger als zwei Kontrollpunkten)
    pub polyline: Vec<Point>,
    /// Kontrollpunkte in Einfügereihenfolge
    pub control_points: Vec<Point>,
    /// Index des aktiven Drag-Ziels
    pub selected_index: Option<usize>,
    /// Strichfarbe der Kurve
    pub stroke_color: CurveColor,
    /// Strichbreite der Kurve in Pixeln
    pub stroke_width: u32,
    /// Ob Kontrollpunkt-Marker gezeichnet werden
    pub show_points: bool,
    /// Marker-Radius in Pixeln
    pub marker_radius: f32,
    /// Füllfarbe der Marker (RGBA)
    pub marker_color: [f32; 4],
    /// Outline-Farbe des aktiven Drag-Ziels (RGBA)
    pub marker_color_selected: [f32; 4],
    /// Hintergrundfarbe (RGBA)
    pub background_color: [f32; 4],
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve gezeichnet werden muss.
    pub fn has_curve(&self) -> bool {
        self.polyline.len() >= 2
    }

    /// Gibt zurück, ob Marker gezeichnet werden müssen.
    pub fn has_visible_markers(&self) -> bool {
        self.show_points && !self.control_points.is_empty()
    }
}
