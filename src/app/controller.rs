//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Pointer ===
            AppCommand::PressAt { pos } => handlers::editing::press_at(state, pos),
            AppCommand::DragSelectedTo { pos, button_held } => {
                handlers::editing::drag_selected_to(state, pos, button_held)
            }
            AppCommand::EndPress => handlers::editing::end_press(state),
            AppCommand::RemovePointAt { pos } => handlers::editing::remove_point_at(state, pos),

            // === Toolbar ===
            AppCommand::ClearPoints => handlers::editing::clear(state),
            AppCommand::TogglePointVisibility => handlers::style::toggle_point_visibility(state),
            AppCommand::SetStrokeColor { color } => handlers::style::set_stroke_color(state, color),
            AppCommand::SetStrokeWidth { width } => handlers::style::set_stroke_width(state, width),

            // === Datei-I/O ===
            AppCommand::RequestLoadFileDialog => handlers::file_io::request_load(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path),
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
