//! Fehlertypen für das Laden und Speichern von Kurvendateien.

/// Inhalt der Datei passt nicht zum Kurvenformat.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Kein gültiges JSON oder Pflichtfeld fehlt/hat falschen Typ
    #[error("ungültige Kurvendaten: {0}")]
    Json(#[from] serde_json::Error),
    /// Farbangabe nicht interpretierbar
    #[error("ungültige Farbangabe: {0:?}")]
    InvalidColor(String),
}

/// Fehler einer Datei-Operation (Laden/Speichern).
#[derive(Debug, thiserror::Error)]
pub enum CurveFileError {
    /// Datei fehlt, ist nicht lesbar oder nicht schreibbar
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Datei gelesen, Inhalt aber ungültig
    #[error("{path}: {source}")]
    Format {
        path: String,
        #[source]
        source: FormatError,
    },
}

impl CurveFileError {
    /// Gibt `true` zurück, wenn der Fehler ein Formatfehler ist.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Pfad der betroffenen Datei.
    pub fn path(&self) -> &str {
        match self {
            Self::Io { path, .. } | Self::Format { path, .. } => path,
        }
    }
}
