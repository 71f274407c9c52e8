use egui::Ui;
use sb1383_core::review_rows;

use crate::app::CalculatorApp;

/// Step 3: read-only recap of everything entered, plus the contact hand-off.
pub struct ReviewScreen;

impl ReviewScreen {
    pub fn show(app: &mut CalculatorApp, ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Review");
            ui.add_space(8.0);

            ui.label(format!("City/County: {}", app.controller.data().city_county));
            ui.label(format!("Population: {}", app.controller.data().population));
            ui.add_space(8.0);

            for row in review_rows(app.controller.data()) {
                ui.group(|ui| {
                    ui.strong(format!("{}:", row.label));
                    ui.label(format!("Volume: {}", row.volume));
                    ui.label(format!("Unit: {}", row.unit));
                    ui.label(format!("Cost: {}", row.cost));
                });
                ui.add_space(4.0);
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Back").clicked() {
                    app.controller.go_back();
                }
                if ui.button("Submit").clicked() {
                    app.submit();
                }
            });
        });
    }
}
