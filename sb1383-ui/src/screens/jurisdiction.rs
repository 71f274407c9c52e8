use egui::Ui;

use crate::app::CalculatorApp;

/// Step 1: jurisdiction name and population.
pub struct JurisdictionScreen;

impl JurisdictionScreen {
    pub fn show(app: &mut CalculatorApp, ui: &mut Ui) {
        ui.heading("Jurisdiction Information");
        ui.add_space(8.0);

        egui::Grid::new("jurisdiction_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("City/County:");
                let mut city_county = app.controller.data().city_county.clone();
                if ui
                    .add(egui::TextEdit::singleline(&mut city_county).desired_width(220.0))
                    .changed()
                {
                    app.set_field("cityCounty", &city_county);
                }
                ui.end_row();

                ui.label("Population:");
                let mut population = app.controller.data().population.clone();
                // Flag the field once it holds something that does not
                // validate; an empty field is not flagged.
                let invalid = !population.is_empty() && !app.controller.population_is_valid();
                let mut edit = egui::TextEdit::singleline(&mut population).desired_width(220.0);
                if invalid {
                    edit = edit.text_color(egui::Color32::RED);
                }
                if ui.add(edit).changed() {
                    app.set_field("population", &population);
                }
                ui.end_row();
            });

        ui.add_space(12.0);
        let can_advance = app.controller.population_is_valid();
        if ui
            .add_enabled(can_advance, egui::Button::new("Next"))
            .clicked()
        {
            app.controller.go_next();
        }
    }
}
