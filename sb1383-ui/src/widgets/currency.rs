use egui::{Response, Ui};
use sb1383_core::ProcurementCategory;

use crate::app::CalculatorApp;

/// A labeled currency input bound to one category's cost field.
///
/// While the field has focus it shows the sanitized numeric string from the
/// last edit; when focus leaves it snaps to the committed currency string
/// (or empty for an untouched `$0.00`). See `CalculatorApp::handle_cost_blur`.
pub fn currency_field(
    app: &mut CalculatorApp,
    ui: &mut Ui,
    label: &str,
    category: ProcurementCategory,
) -> Response {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add_space(10.0);

        let mut text = app.cost_input(category).to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .desired_width(120.0)
                .hint_text("0"),
        );
        if response.changed() {
            app.handle_cost_change(category, &text);
        }
        if response.lost_focus() {
            app.handle_cost_blur(category);
        }
        response
    })
    .inner
}
