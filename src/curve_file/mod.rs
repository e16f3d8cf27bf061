//! JSON Import/Export für Kurvendokumente.
//!
//! Format: `{"points": [[x, y], …], "color": "#rrggbb", "width": 2, "show_points": true}`.
//! Beim Lesen werden zusätzlich Punkte als `{"x", "y"}` und Farben als
//! Kanal-Objekt `{"red", "green", "blue", "alpha"}` akzeptiert.

mod error;
pub mod parser;
mod record;
pub mod writer;

pub use error::{CurveFileError, FormatError};
pub use parser::{load_curve_file, parse_curve_file};
pub use record::{ColorRecord, CurveFileRecord, PointRecord};
pub use writer::{save_curve_file, write_curve_file};
