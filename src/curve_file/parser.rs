//! Parser für Kurvendateien.

use super::{CurveFileError, CurveFileRecord, FormatError};
use crate::core::CurveDocument;
use std::path::Path;

/// Parst JSON-Text zu einem vollständigen Kurvendokument.
pub fn parse_curve_file(content: &str) -> Result<CurveDocument, FormatError> {
    let record: CurveFileRecord = serde_json::from_str(content)?;
    CurveDocument::deserialize(record)
}

/// Liest und parst eine Kurvendatei.
pub fn load_curve_file(path: &Path) -> Result<CurveDocument, CurveFileError> {
    let path_str = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| CurveFileError::Io {
        path: path_str.clone(),
        source,
    })?;
    parse_curve_file(&content).map_err(|source| CurveFileError::Format {
        path: path_str,
        source,
    })
}
