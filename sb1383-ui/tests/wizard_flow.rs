//! Walks a full data-entry session through the app-level handlers, covering
//! the divergence between committed cost state and live input text.

use pretty_assertions::assert_eq;
use sb1383_core::{ProcurementCategory, WizardStep};
use sb1383_ui::CalculatorApp;

#[test]
fn full_session_walkthrough() {
    let mut app = CalculatorApp::new();
    assert_eq!(app.controller.step(), WizardStep::Jurisdiction);

    // Step 1: jurisdiction entry. Forward navigation is gated on population.
    app.controller.set_field("cityCounty", "Springfield").unwrap();
    assert!(!app.controller.population_is_valid());
    app.controller.set_field("population", "100000").unwrap();
    assert!(app.controller.population_is_valid());
    app.controller.go_next();
    assert_eq!(app.controller.step(), WizardStep::Procurement);

    // Step 2: requirement recap is derived, never stored.
    let requirement = app.controller.rowp_requirement();
    assert_eq!(requirement.year_2024_display(), "52,000");
    assert_eq!(requirement.year_2025_plus_display(), "80,000");
    assert_eq!(app.controller.population_display(), "100,000");

    // Procurement entry: volume and unit through the generic path, cost
    // through the currency transition.
    app.controller.set_field("currentCompost-volume", "50").unwrap();
    app.controller.set_field("currentCompost-unit", "tons").unwrap();
    app.handle_cost_change(ProcurementCategory::Compost, "1234");

    // Live text shows the cleaned number; committed state is formatted.
    assert_eq!(app.cost_input(ProcurementCategory::Compost), "1234");
    assert_eq!(
        app.controller.data().entry(ProcurementCategory::Compost).cost,
        "$1,234.00"
    );

    // Blur snaps the live text to the committed currency string.
    app.handle_cost_blur(ProcurementCategory::Compost);
    assert_eq!(app.cost_input(ProcurementCategory::Compost), "$1,234.00");

    // Step 3: the review projection mirrors the record.
    app.controller.go_next();
    assert_eq!(app.controller.step(), WizardStep::Review);
    let rows = sb1383_core::review_rows(app.controller.data());
    assert_eq!(rows[0].label, "Compost");
    assert_eq!(rows[0].volume, "50");
    assert_eq!(rows[0].unit, "tons");
    assert_eq!(rows[0].cost, "$1,234.00");

    // Back navigation keeps everything entered.
    app.controller.go_back();
    app.controller.go_back();
    assert_eq!(app.controller.step(), WizardStep::Jurisdiction);
    assert_eq!(app.controller.data().city_county, "Springfield");
    assert_eq!(
        app.controller.data().entry(ProcurementCategory::Compost).volume,
        "50"
    );
}

#[test]
fn blur_clears_an_untouched_zero_cost() {
    let mut app = CalculatorApp::new();

    // Typing only junk sanitizes to zero.
    app.handle_cost_change(ProcurementCategory::Other, "abc");
    assert_eq!(app.cost_input(ProcurementCategory::Other), "0");
    assert_eq!(
        app.controller.data().entry(ProcurementCategory::Other).cost,
        "$0.00"
    );

    // On blur the visible text is cleared, committed state is untouched.
    app.handle_cost_blur(ProcurementCategory::Other);
    assert_eq!(app.cost_input(ProcurementCategory::Other), "");
    assert_eq!(
        app.controller.data().entry(ProcurementCategory::Other).cost,
        "$0.00"
    );
}

#[test]
fn submit_surfaces_a_status_message_only() {
    let mut app = CalculatorApp::new();
    assert!(app.status_message().is_none());

    app.submit();

    assert!(app.status_message().is_some());
    // Submission changes no form state.
    assert_eq!(app.controller.data(), &sb1383_core::FormData::default());
}
