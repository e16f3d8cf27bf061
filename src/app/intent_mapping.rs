//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, PointerButton};
use crate::core::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos, button } => match button {
            PointerButton::Primary => vec![AppCommand::PressAt { pos }],
            PointerButton::Secondary => vec![AppCommand::RemovePointAt { pos }],
            PointerButton::Middle => vec![],
        },
        AppIntent::PointerMoved { pos, primary_held } => {
            // Hover ohne aktives Drag-Ziel erzeugt keine Commands
            if state.document.selected_index().is_some() {
                vec![AppCommand::DragSelectedTo {
                    pos,
                    button_held: primary_held,
                }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased { button } => match button {
            PointerButton::Primary => vec![AppCommand::EndPress],
            PointerButton::Secondary | PointerButton::Middle => vec![],
        },
        AppIntent::ClearRequested => vec![AppCommand::ClearPoints],
        AppIntent::TogglePointsRequested => vec![AppCommand::TogglePointVisibility],
        AppIntent::StrokeColorChanged { color } => vec![AppCommand::SetStrokeColor { color }],
        AppIntent::StrokeWidthChanged { width } => vec![AppCommand::SetStrokeWidth {
            width: width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH),
        }],
        AppIntent::SaveRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::LoadRequested => vec![AppCommand::RequestLoadFileDialog],
        AppIntent::SaveFilePathSelected { path } => vec![AppCommand::SaveFile { path }],
        AppIntent::LoadFilePathSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
