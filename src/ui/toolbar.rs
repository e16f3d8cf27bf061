//! Toolbar mit den Dokument-Aktionen und dem Farbwähler.

use crate::app::{AppIntent, AppState};
use crate::core::CurveColor;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let document = &state.document;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Speichern").clicked() {
                events.push(AppIntent::SaveRequested);
            }
            if ui.button("Laden").clicked() {
                events.push(AppIntent::LoadRequested);
            }

            ui.separator();

            if ui
                .add_enabled(!document.is_empty(), egui::Button::new("Leeren"))
                .clicked()
            {
                events.push(AppIntent::ClearRequested);
            }

            let toggle_label = if document.show_points() {
                "Punkte ausblenden"
            } else {
                "Punkte einblenden"
            };
            if ui
                .add(egui::Button::new(toggle_label).selected(document.show_points()))
                .clicked()
            {
                events.push(AppIntent::TogglePointsRequested);
            }

            ui.separator();

            ui.label("Farbe:");
            let current = document.stroke_color();
            let mut picked = to_color32(current);
            let response = egui::color_picker::color_edit_button_srgba(
                ui,
                &mut picked,
                egui::color_picker::Alpha::OnlyBlend,
            );
            if response.changed() {
                let color = from_color32(picked);
                if color != current {
                    events.push(AppIntent::StrokeColorChanged { color });
                }
            }
        });
    });

    events
}

fn to_color32(color: CurveColor) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

fn from_color32(color: egui::Color32) -> CurveColor {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    CurveColor::rgba(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_survive_picker_conversion() {
        let color = CurveColor::rgb(18, 52, 86);
        assert_eq!(from_color32(to_color32(color)), color);
        assert_eq!(from_color32(to_color32(CurveColor::BLUE)), CurveColor::BLUE);
    }
}
