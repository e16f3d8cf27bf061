//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::shared::spline_geometry::{build_path, polyline_length};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let document = &state.document;
            let length = polyline_length(&build_path(document.points()));
            ui.label(format!(
                "Punkte: {} | Kurvenlänge: {:.1} px",
                document.len(),
                length
            ));

            ui.separator();

            match document.selected_index() {
                Some(index) => ui.label(format!("Ziehe Punkt {}", index)),
                None => ui.label("Keine Auswahl"),
            };

            if let Some(last) = state.command_log.last() {
                ui.separator();
                ui.label(format!(
                    "Letzte Aktion: {} ({} gesamt)",
                    last.label(),
                    state.command_log.total()
                ));
            }

            if let Some(path) = &state.ui.current_file_path {
                ui.separator();
                let filename = std::path::Path::new(path)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unbekannt");
                ui.label(format!("Datei: {}", filename));
            }

            if let Some(msg) = &state.ui.status_message {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(msg);
                });
            }
        });
    });
}
