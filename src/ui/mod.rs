//! UI-Komponenten: Menü, Toolbar, Linienbreite, Status, Input-Handling, Dialoge.

pub mod control_panel;
pub mod dialogs;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Jede Komponente liest den `AppState` nur und liefert `AppIntent`s zurück;
/// Mutationen laufen ausschließlich über den Controller.
pub mod menu;
pub mod status;
pub mod toolbar;

pub use control_panel::render_control_panel;
pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use menu::render_menu;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
