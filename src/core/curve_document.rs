//! Kurvendokument: Kontrollpunkte, Stil, Sichtbarkeit und Drag-Zustand.
//!
//! Reiner Zustand ohne UI-Abhängigkeit. Der Host leitet Pointer-Events
//! (Press/Move/Release) an die Operationen weiter; das Rendering liest
//! die Punkte nur.

use super::{CurveColor, Point};

/// Pick-Schwelle (Manhattan-Distanz, strikt kleiner).
pub const HIT_THRESHOLD: f64 = 10.0;
/// Standard-Strichbreite neuer Dokumente.
pub const DEFAULT_STROKE_WIDTH: u32 = 2;
/// Kleinste Strichbreite, die die UI anbietet.
pub const MIN_STROKE_WIDTH: u32 = 1;
/// Größte Strichbreite, die die UI anbietet.
pub const MAX_STROKE_WIDTH: u32 = 10;

/// Ergebnis eines Press-Events auf dem Dokument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Bestehender Punkt getroffen und als Drag-Ziel gewählt
    Selected(usize),
    /// Kein Treffer: neuer Punkt angehängt und als Drag-Ziel gewählt
    Inserted(usize),
}

impl PressOutcome {
    /// Index des nun aktiven Drag-Ziels.
    pub fn index(self) -> usize {
        match self {
            Self::Selected(i) | Self::Inserted(i) => i,
        }
    }
}

/// Das bearbeitete Kurvendokument.
///
/// Invariante: `selected` verweist immer auf einen gültigen Index in `points`.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveDocument {
    points: Vec<Point>,
    stroke_color: CurveColor,
    stroke_width: u32,
    show_points: bool,
    selected: Option<usize>,
}

impl Default for CurveDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveDocument {
    /// Leeres Dokument mit Standardstil (blau, Breite 2, Punkte sichtbar).
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            stroke_color: CurveColor::default(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            show_points: true,
            selected: None,
        }
    }

    /// Baut ein Dokument aus vollständig validierten Teilen (ohne Selektion).
    pub fn from_parts(
        points: Vec<Point>,
        stroke_color: CurveColor,
        stroke_width: u32,
        show_points: bool,
    ) -> Self {
        Self {
            points,
            stroke_color,
            stroke_width,
            show_points,
            selected: None,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn stroke_color(&self) -> CurveColor {
        self.stroke_color
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    pub fn show_points(&self) -> bool {
        self.show_points
    }

    /// Index des aktiven Drag-Ziels, falls vorhanden.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Sucht den ersten Punkt (niedrigster Index) mit `|dx| + |dy| < HIT_THRESHOLD`.
    ///
    /// Bei mehreren Treffern gewinnt die Einfügereihenfolge, nicht die Distanz.
    pub fn hit_test(&self, query: Point) -> Option<usize> {
        self.points.iter().position(|p| {
            let d = *p - query;
            d.x.abs() + d.y.abs() < HIT_THRESHOLD
        })
    }

    /// Press-Start: trifft einen Punkt oder hängt einen neuen an.
    ///
    /// In beiden Fällen ist der betroffene Punkt danach sofort ziehbar.
    pub fn on_press_start(&mut self, position: Point) -> PressOutcome {
        if let Some(index) = self.hit_test(position) {
            self.selected = Some(index);
            return PressOutcome::Selected(index);
        }

        self.points.push(position);
        let index = self.points.len() - 1;
        self.selected = Some(index);
        PressOutcome::Inserted(index)
    }

    /// Verschiebt das aktive Drag-Ziel an `position`.
    ///
    /// Gibt `false` zurück (ohne Änderung), wenn nichts selektiert ist oder
    /// die Drag-Taste nicht gehalten wird.
    pub fn on_drag_move(&mut self, position: Point, drag_button_held: bool) -> bool {
        if !drag_button_held {
            return false;
        }
        let Some(index) = self.selected else {
            return false;
        };
        match self.points.get_mut(index) {
            Some(point) => {
                *point = position;
                true
            }
            None => {
                self.selected = None;
                false
            }
        }
    }

    /// Release: beendet jeden Drag.
    pub fn on_press_end(&mut self) {
        self.selected = None;
    }

    /// Entfernt alle Punkte. Stil und Sichtbarkeit bleiben erhalten.
    pub fn clear(&mut self) {
        self.points.clear();
        self.selected = None;
    }

    /// Entfernt einen einzelnen Punkt und hält die Selektion gültig.
    ///
    /// Selektion auf dem entfernten Punkt wird aufgehoben, Selektionen
    /// dahinter rücken um eins nach vorne.
    pub fn remove_point(&mut self, index: usize) -> Option<Point> {
        if index >= self.points.len() {
            return None;
        }
        let removed = self.points.remove(index);
        self.selected = match self.selected {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        Some(removed)
    }

    /// Schaltet die Sichtbarkeit der Kontrollpunkt-Marker um.
    pub fn toggle_visibility(&mut self) -> bool {
        self.show_points = !self.show_points;
        self.show_points
    }

    pub fn set_stroke_color(&mut self, color: CurveColor) {
        self.stroke_color = color;
    }

    /// Setzt die Strichbreite ohne Bereichsprüfung (das ist Sache der UI).
    pub fn set_stroke_width(&mut self, width: u32) {
        self.stroke_width = width;
    }
}
