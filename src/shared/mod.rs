//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
pub mod spline_geometry;

pub use options::EditorOptions;
pub use render_scene::RenderScene;
pub use spline_geometry::{build_path, catmull_rom_point, polyline_length, SAMPLES_PER_SEGMENT};
