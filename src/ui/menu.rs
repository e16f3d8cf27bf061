//! Top-Menü (Datei).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Laden... (Strg+O)").clicked() {
                    events.push(AppIntent::LoadRequested);
                    ui.close();
                }

                if ui.button("Speichern... (Strg+S)").clicked() {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                ui.separator();

                if ui
                    .add_enabled(!state.document.is_empty(), egui::Button::new("Leeren"))
                    .clicked()
                {
                    events.push(AppIntent::ClearRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
