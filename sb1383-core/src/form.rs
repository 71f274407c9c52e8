//! The wizard controller: step navigation plus all form-state transitions.
//!
//! One [`FormController`] instance owns the whole session. Rendering layers
//! read its snapshot and feed user events back in; every transition runs
//! synchronously to completion, so there is no locking and no partially
//! applied update to observe.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::RowpRequirement;
use crate::currency;
use crate::models::{EntryField, Field, FieldPathError, FormData, ProcurementCategory};
use crate::validation::validate_population;

/// The three sequential screens of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Jurisdiction,
    Procurement,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [Self::Jurisdiction, Self::Procurement, Self::Review];

    /// 1-based step number shown in the tab strip.
    pub fn number(self) -> u8 {
        match self {
            Self::Jurisdiction => 1,
            Self::Procurement => 2,
            Self::Review => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Jurisdiction => "City/County",
            Self::Procurement => "Details",
            Self::Review => "Review",
        }
    }

    /// The following step; saturates at the last screen.
    pub fn next(self) -> Self {
        match self {
            Self::Jurisdiction => Self::Procurement,
            Self::Procurement | Self::Review => Self::Review,
        }
    }

    /// The preceding step; saturates at the first screen.
    pub fn back(self) -> Self {
        match self {
            Self::Jurisdiction | Self::Procurement => Self::Jurisdiction,
            Self::Review => Self::Procurement,
        }
    }
}

/// Owns the wizard step and the form record for one session.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    step: WizardStep,
    data: FormData,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Read-only snapshot of the current form record.
    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// Advances one step. A no-op on the review screen. The controller does
    /// not gate this on validation; the step-1 UI disables its Next control
    /// until the population validates.
    pub fn go_next(&mut self) {
        let next = self.step.next();
        if next != self.step {
            debug!(from = self.step.number(), to = next.number(), "wizard step forward");
            self.step = next;
        }
    }

    /// Goes back one step. A no-op on the first screen. Previously entered
    /// values are kept.
    pub fn go_back(&mut self) {
        let back = self.step.back();
        if back != self.step {
            debug!(from = self.step.number(), to = back.number(), "wizard step back");
            self.step = back;
        }
    }

    /// Generic field update: stores `raw` verbatim into the addressed field.
    ///
    /// Root fields are replaced wholesale; a composite key updates only the
    /// named sub-field of its entry, leaving siblings untouched. No
    /// validation or coercion happens on this path.
    pub fn set_field(&mut self, path: &str, raw: &str) -> Result<(), FieldPathError> {
        match Field::parse(path)? {
            Field::CityCounty => self.data.city_county = raw.to_string(),
            Field::Population => self.data.population = raw.to_string(),
            Field::Entry(category, sub) => {
                let entry = self.data.entry_mut(category);
                match sub {
                    EntryField::Volume => entry.volume = raw.to_string(),
                    EntryField::Cost => entry.cost = raw.to_string(),
                    EntryField::Unit => entry.unit = raw.to_string(),
                }
            }
        }
        Ok(())
    }

    /// Cost-specific transition: sanitizes `raw`, stores the formatted
    /// currency string in the entry's cost, and returns the cleaned numeric
    /// string for the caller's live input text. State and visible text are
    /// allowed to diverge between formatting passes.
    pub fn set_currency_field(&mut self, category: ProcurementCategory, raw: &str) -> String {
        let cleaned = currency::sanitize(raw);
        let amount = currency::parse_sanitized(&cleaned);
        let formatted = currency::format_usd(amount);
        debug!(category = category.label(), %formatted, "cost committed");
        self.data.entry_mut(category).cost = formatted;
        cleaned
    }

    /// Whether the population field currently denotes a positive integer.
    pub fn population_is_valid(&self) -> bool {
        validate_population(&self.data.population)
    }

    /// Grouped population for the step-2 recap, or empty when the field
    /// does not hold a valid value.
    pub fn population_display(&self) -> String {
        self.population_value()
            .map(currency::format_grouped)
            .unwrap_or_default()
    }

    /// Derived ROWP requirement. Recomputed on every read; an invalid
    /// population computes as zero.
    pub fn rowp_requirement(&self) -> RowpRequirement {
        RowpRequirement::from_population(self.population_value().unwrap_or(Decimal::ZERO))
    }

    fn population_value(&self) -> Option<Decimal> {
        self.population_is_valid()
            .then(|| self.data.population.trim().parse().ok())
            .flatten()
    }
}
