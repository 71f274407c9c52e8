use egui::Context;
use sb1383_core::{FormController, ProcurementCategory, WizardStep};
use tracing::{info, warn};

use crate::screens::{JurisdictionScreen, ProcurementScreen, ReviewScreen};

/// Main application state.
///
/// The controller holds the committed form record; `cost_inputs` holds the
/// live text of each cost field, which is allowed to diverge from the
/// committed currency string between formatting passes (the user sees the
/// sanitized number while typing, the record keeps `$1,234.00`).
pub struct CalculatorApp {
    pub controller: FormController,
    cost_inputs: [String; 5],
    status_message: Option<String>,
}

impl CalculatorApp {
    pub fn new() -> Self {
        Self {
            controller: FormController::new(),
            cost_inputs: std::array::from_fn(|_| String::new()),
            status_message: None,
        }
    }

    /// Live text of a cost input.
    pub fn cost_input(&self, category: ProcurementCategory) -> &str {
        &self.cost_inputs[category.index()]
    }

    /// Commits a cost edit and resets the live text to the cleaned numeric
    /// string returned by the controller.
    pub fn handle_cost_change(&mut self, category: ProcurementCategory, raw: &str) {
        let cleaned = self.controller.set_currency_field(category, raw);
        self.cost_inputs[category.index()] = cleaned;
    }

    /// Focus-loss rule for cost fields: the live text snaps back to the
    /// committed currency string, except that an untouched `$0.00` is
    /// cleared to empty. Committed state is never changed here.
    pub fn handle_cost_blur(&mut self, category: ProcurementCategory) {
        let committed = self.controller.data().entry(category).cost.clone();
        let text = &mut self.cost_inputs[category.index()];
        *text = committed;
        if text == "$0.00" {
            text.clear();
        }
    }

    /// Generic field update from a screen; the paths screens use are fixed
    /// strings, so a rejection here is a programming error worth logging.
    pub fn set_field(&mut self, path: &str, raw: &str) {
        if let Err(error) = self.controller.set_field(path, raw) {
            warn!(%error, "field update rejected");
        }
    }

    /// The Submit control has no backend; requests are handed off to the
    /// contact channel.
    pub fn submit(&mut self) {
        info!(
            jurisdiction = %self.controller.data().city_county,
            "submit requested"
        );
        self.status_message = Some(
            "Request received. A representative will follow up with next steps.".to_string(),
        );
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(4.0);
                ui.heading("SB 1383 Compliance Calculator");
            });
            ui.add_space(4.0);

            // Tab strip reflects the active step; navigation happens only
            // through the Next/Back controls on each screen.
            ui.horizontal(|ui| {
                for step in WizardStep::ALL {
                    let active = self.controller.step() == step;
                    let _ = ui.selectable_label(active, step.title());
                }
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            if let Some(message) = &self.status_message {
                ui.label(message);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.controller.step() {
            WizardStep::Jurisdiction => JurisdictionScreen::show(self, ui),
            WizardStep::Procurement => ProcurementScreen::show(self, ui),
            WizardStep::Review => ReviewScreen::show(self, ui),
        });
    }
}
