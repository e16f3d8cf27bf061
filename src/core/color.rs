//! Strichfarbe als reiner Werttyp (RGBA, je 0–255) mit Hex-Kodierung.

use std::fmt;
use std::str::FromStr;

/// RGBA-Farbe der Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurveColor {
    /// Rot-Kanal
    pub r: u8,
    /// Grün-Kanal
    pub g: u8,
    /// Blau-Kanal
    pub b: u8,
    /// Alpha-Kanal (255 = opak)
    pub a: u8,
}

impl CurveColor {
    /// Opakes Blau, Standardfarbe neuer Dokumente.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Opakes Rot (Marker-Standard).
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opakes Weiß (Hintergrund-Standard).
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Erstellt eine opake Farbe.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Erstellt eine Farbe mit Alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Gibt `true` zurück, wenn die Farbe voll deckend ist.
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Kanonische Hex-Darstellung.
    ///
    /// Opake Farben als `#rrggbb`, alle anderen als `#aarrggbb`,
    /// damit der Alpha-Kanal beim Speichern erhalten bleibt.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
        }
    }

    /// Parst `#rgb`, `#rrggbb` oder `#aarrggbb` (Groß-/Kleinschreibung egal).
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text.trim().strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let byte_at = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

        match digits.len() {
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .ok()
                        .map(|v| v * 17)
                };
                Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Some(Self::rgb(byte_at(0)?, byte_at(2)?, byte_at(4)?)),
            8 => Some(Self::rgba(byte_at(2)?, byte_at(4)?, byte_at(6)?, byte_at(0)?)),
            _ => None,
        }
    }

    /// Sucht einen benannten Farbwert (`"blue"`, `"DarkGreen"`, …).
    ///
    /// Kennt die CSS-Grundfarben und gängige SVG-Namen; Groß-/Kleinschreibung egal.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
    }
}

const NAMED_COLORS: &[(&str, CurveColor)] = &[
    ("black", CurveColor::rgb(0, 0, 0)),
    ("silver", CurveColor::rgb(192, 192, 192)),
    ("gray", CurveColor::rgb(128, 128, 128)),
    ("grey", CurveColor::rgb(128, 128, 128)),
    ("white", CurveColor::WHITE),
    ("maroon", CurveColor::rgb(128, 0, 0)),
    ("red", CurveColor::RED),
    ("purple", CurveColor::rgb(128, 0, 128)),
    ("fuchsia", CurveColor::rgb(255, 0, 255)),
    ("magenta", CurveColor::rgb(255, 0, 255)),
    ("green", CurveColor::rgb(0, 128, 0)),
    ("lime", CurveColor::rgb(0, 255, 0)),
    ("olive", CurveColor::rgb(128, 128, 0)),
    ("yellow", CurveColor::rgb(255, 255, 0)),
    ("navy", CurveColor::rgb(0, 0, 128)),
    ("blue", CurveColor::BLUE),
    ("teal", CurveColor::rgb(0, 128, 128)),
    ("aqua", CurveColor::rgb(0, 255, 255)),
    ("cyan", CurveColor::rgb(0, 255, 255)),
    ("orange", CurveColor::rgb(255, 165, 0)),
    ("brown", CurveColor::rgb(165, 42, 42)),
    ("pink", CurveColor::rgb(255, 192, 203)),
    ("gold", CurveColor::rgb(255, 215, 0)),
    ("darkgreen", CurveColor::rgb(0, 100, 0)),
    ("darkblue", CurveColor::rgb(0, 0, 139)),
    ("darkred", CurveColor::rgb(139, 0, 0)),
    ("darkgray", CurveColor::rgb(169, 169, 169)),
    ("darkgrey", CurveColor::rgb(169, 169, 169)),
    ("lightgray", CurveColor::rgb(211, 211, 211)),
    ("lightgrey", CurveColor::rgb(211, 211, 211)),
    ("lightblue", CurveColor::rgb(173, 216, 230)),
    ("skyblue", CurveColor::rgb(135, 206, 235)),
    ("steelblue", CurveColor::rgb(70, 130, 180)),
    ("indigo", CurveColor::rgb(75, 0, 130)),
    ("violet", CurveColor::rgb(238, 130, 238)),
    ("coral", CurveColor::rgb(255, 127, 80)),
    ("salmon", CurveColor::rgb(250, 128, 114)),
    ("tomato", CurveColor::rgb(255, 99, 71)),
    ("crimson", CurveColor::rgb(220, 20, 60)),
    ("turquoise", CurveColor::rgb(64, 224, 208)),
    ("transparent", CurveColor::rgba(0, 0, 0, 0)),
];

impl Default for CurveColor {
    fn default() -> Self {
        Self::BLUE
    }
}

impl fmt::Display for CurveColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Fehler beim Parsen einer Hex-Farbe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ungültige Farbangabe: {0:?}")]
pub struct ParseColorError(pub String);

impl FromStr for CurveColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
            .or_else(|| Self::from_name(s))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl serde::Serialize for CurveColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for CurveColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
