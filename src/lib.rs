//! Spline Curve Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod curve_file;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, PointerButton, UiState};
pub use core::{CurveColor, CurveDocument, Point, PressOutcome};
pub use curve_file::{load_curve_file, parse_curve_file, save_curve_file, write_curve_file};
pub use curve_file::{CurveFileError, FormatError};
pub use shared::{build_path, EditorOptions, RenderScene};
