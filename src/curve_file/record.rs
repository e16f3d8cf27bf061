//! Serialisierte Form eines Kurvendokuments.

use crate::core::{CurveColor, CurveDocument, Point};
use serde::{Deserialize, Serialize};

use super::FormatError;

/// Datei-Datensatz eines Kurvendokuments. Alle vier Felder sind Pflicht.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFileRecord {
    /// Kontrollpunkte in Kurvenreihenfolge
    pub points: Vec<PointRecord>,
    /// Strichfarbe
    pub color: ColorRecord,
    /// Strichbreite
    pub width: u32,
    /// Sichtbarkeit der Kontrollpunkte
    pub show_points: bool,
}

/// Ein Punkt als `[x, y]` (kanonisch) oder `{"x": .., "y": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointRecord {
    Pair(f64, f64),
    Object { x: f64, y: f64 },
}

impl From<PointRecord> for Point {
    fn from(record: PointRecord) -> Self {
        match record {
            PointRecord::Pair(x, y) | PointRecord::Object { x, y } => Point::new(x, y),
        }
    }
}

/// Eine Farbe als Hex-Text (kanonisch) oder als Kanal-Objekt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorRecord {
    Hex(String),
    Channels {
        red: u8,
        green: u8,
        blue: u8,
        #[serde(default = "opaque_alpha")]
        alpha: u8,
    },
}

fn opaque_alpha() -> u8 {
    255
}

impl ColorRecord {
    /// Löst den Datensatz in eine Farbe auf.
    pub fn resolve(&self) -> Result<CurveColor, FormatError> {
        match self {
            Self::Hex(text) => text
                .parse::<CurveColor>()
                .map_err(|_| FormatError::InvalidColor(text.clone())),
            Self::Channels {
                red,
                green,
                blue,
                alpha,
            } => Ok(CurveColor::rgba(*red, *green, *blue, *alpha)),
        }
    }
}

impl CurveDocument {
    /// Erzeugt den Datei-Datensatz des Dokuments (ohne Selektion).
    pub fn serialize(&self) -> CurveFileRecord {
        CurveFileRecord {
            points: self
                .points()
                .iter()
                .map(|p| PointRecord::Pair(p.x, p.y))
                .collect(),
            color: ColorRecord::Hex(self.stroke_color().to_hex()),
            width: self.stroke_width(),
            show_points: self.show_points(),
        }
    }

    /// Baut ein neues Dokument aus einem Datensatz.
    ///
    /// Erst wenn alle Felder gültig sind, entsteht ein Dokument; der Aufrufer
    /// ersetzt seinen Zustand nur im Erfolgsfall.
    pub fn deserialize(record: CurveFileRecord) -> Result<Self, FormatError> {
        let color = record.color.resolve()?;
        let points = record.points.into_iter().map(Point::from).collect();
        Ok(Self::from_parts(
            points,
            color,
            record.width,
            record.show_points,
        ))
    }
}
