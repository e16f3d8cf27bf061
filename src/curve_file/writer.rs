//! Writer für Kurvendateien.

use super::{CurveFileError, FormatError};
use crate::core::CurveDocument;
use std::path::Path;

/// Schreibt ein Kurvendokument als formatiertes JSON.
pub fn write_curve_file(document: &CurveDocument) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(&document.serialize())?)
}

/// Speichert ein Kurvendokument in eine Datei (ganze Datei, synchron).
pub fn save_curve_file(path: &Path, document: &CurveDocument) -> Result<(), CurveFileError> {
    let path_str = path.display().to_string();
    let content = write_curve_file(document).map_err(|source| CurveFileError::Format {
        path: path_str.clone(),
        source,
    })?;
    std::fs::write(path, content).map_err(|source| CurveFileError::Io {
        path: path_str,
        source,
    })
}
