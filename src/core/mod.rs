//! Core-Domänentypen: Punkte, Farbe, Kurvendokument.

pub mod color;
/// Kurvendokument mit Pick- und Drag-Logik
pub mod curve_document;

pub use color::{CurveColor, ParseColorError};
pub use curve_document::{
    CurveDocument, PressOutcome, DEFAULT_STROKE_WIDTH, HIT_THRESHOLD, MAX_STROKE_WIDTH,
    MIN_STROKE_WIDTH,
};

/// 2D-Koordinate eines Kontrollpunkts.
pub type Point = glam::DVec2;
