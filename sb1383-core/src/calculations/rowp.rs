//! Recovered Organic Waste Product procurement requirement.
//!
//! SB 1383 sets each jurisdiction's annual ROWP procurement target as a
//! fixed multiple of population, with a reduced phase-in target for 2024.
//! The figures are pure functions of population and are recomputed on every
//! read; nothing here is stored.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::currency::format_grouped;

/// Tons of ROWP per resident per year, effective 2025 and beyond.
pub fn procurement_rate() -> Decimal {
    Decimal::new(8, 1) // 0.8
}

/// Phase-in factor applied to the full requirement for calendar year 2024.
pub fn phase_in_factor_2024() -> Decimal {
    Decimal::new(65, 2) // 0.65
}

/// Annual procurement requirement in tons, by compliance period.
///
/// Figures are rounded to whole tons. An earlier revision of the results
/// table showed two decimal places; the whole-ton rendering is the later
/// one and is the behavior kept here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowpRequirement {
    pub year_2024: Decimal,
    pub year_2025_plus: Decimal,
}

impl RowpRequirement {
    pub fn from_population(population: Decimal) -> Self {
        let full = population * procurement_rate();
        let phased = full * phase_in_factor_2024();
        Self {
            year_2024: round_whole(phased),
            year_2025_plus: round_whole(full),
        }
    }

    /// 2024 figure with thousands grouping, for display.
    pub fn year_2024_display(&self) -> String {
        format_grouped(self.year_2024)
    }

    /// 2025-and-beyond figure with thousands grouping, for display.
    pub fn year_2025_plus_display(&self) -> String {
        format_grouped(self.year_2025_plus)
    }
}

fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn requirement_for_100k_population() {
        let requirement = RowpRequirement::from_population(dec!(100000));

        assert_eq!(requirement.year_2024, dec!(52000));
        assert_eq!(requirement.year_2025_plus, dec!(80000));
    }

    #[test]
    fn requirement_rounds_to_whole_tons() {
        // 123 * 0.8 = 98.4; * 0.65 = 63.96
        let requirement = RowpRequirement::from_population(dec!(123));

        assert_eq!(requirement.year_2024, dec!(64));
        assert_eq!(requirement.year_2025_plus, dec!(98));
    }

    #[test]
    fn requirement_for_zero_population_is_zero() {
        let requirement = RowpRequirement::from_population(Decimal::ZERO);

        assert_eq!(requirement.year_2024, Decimal::ZERO);
        assert_eq!(requirement.year_2025_plus, Decimal::ZERO);
    }

    #[test]
    fn displays_use_thousands_grouping() {
        let requirement = RowpRequirement::from_population(dec!(100000));

        assert_eq!(requirement.year_2024_display(), "52,000");
        assert_eq!(requirement.year_2025_plus_display(), "80,000");
    }
}
