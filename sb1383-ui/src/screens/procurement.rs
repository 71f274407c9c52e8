use egui::Ui;
use sb1383_core::{ProcurementCategory, Unit};

use crate::app::CalculatorApp;
use crate::widgets::currency_field;

/// Step 2: population recap, the computed ROWP requirement, and the five
/// per-category procurement entries.
pub struct ProcurementScreen;

impl ProcurementScreen {
    pub fn show(app: &mut CalculatorApp, ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.strong(format!("City/County: {}", app.controller.data().city_county));
            ui.strong(format!("Population: {}", app.controller.population_display()));
            ui.add_space(8.0);

            ui.heading("SB 1383 ROWP Procurement Requirement");
            ui.label("Note: SB 1383 requires 0.08 tons of ROWP per person");
            ui.add_space(4.0);

            let requirement = app.controller.rowp_requirement();
            egui::Grid::new("rowp_grid")
                .num_columns(2)
                .spacing([40.0, 8.0])
                .show(ui, |ui| {
                    ui.strong("2024");
                    ui.strong("2025 and beyond");
                    ui.end_row();
                    ui.label(requirement.year_2024_display());
                    ui.label(requirement.year_2025_plus_display());
                    ui.end_row();
                });

            ui.add_space(12.0);
            ui.heading("Procurement Details");
            for category in ProcurementCategory::ALL {
                ui.add_space(8.0);
                Self::category_section(app, ui, category);
            }

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button("Back").clicked() {
                    app.controller.go_back();
                }
                if ui.button("Next").clicked() {
                    app.controller.go_next();
                }
            });
        });
    }

    fn category_section(app: &mut CalculatorApp, ui: &mut Ui, category: ProcurementCategory) {
        ui.group(|ui| {
            ui.strong(format!("Current Procurement of {}", category.label()));
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label(format!("Volume of {}:", category.label()));
                let mut volume = app.controller.data().entry(category).volume.clone();
                if ui
                    .add(
                        egui::TextEdit::singleline(&mut volume)
                            .desired_width(100.0)
                            .hint_text("0"),
                    )
                    .changed()
                {
                    app.set_field(&format!("{}-volume", category.field_key()), &volume);
                }

                Self::unit_selector(app, ui, category);
            });

            currency_field(
                app,
                ui,
                &format!("Current Cost of {}:", category.label()),
                category,
            );
        });
    }

    fn unit_selector(app: &mut CalculatorApp, ui: &mut Ui, category: ProcurementCategory) {
        let current = app.controller.data().entry(category).unit.clone();
        let selected_text = if current.is_empty() {
            "Select Unit".to_string()
        } else {
            current.clone()
        };

        egui::ComboBox::from_id_salt(format!("{}-unit", category.field_key()))
            .width(120.0)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for unit in Unit::ALL {
                    if ui
                        .selectable_label(current == unit.as_str(), unit.as_str())
                        .clicked()
                    {
                        app.set_field(&format!("{}-unit", category.field_key()), unit.as_str());
                    }
                }
            });
    }
}
