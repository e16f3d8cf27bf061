//! Handler für Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;

/// Sichert den Kurvenstil in den Optionen und markiert die Anwendung
/// zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    if state.should_exit {
        return;
    }
    use_cases::file_io::persist_options(state);
    state.should_exit = true;
}
