use serde::{Deserialize, Serialize};

use super::ProcurementCategory;

/// Volume, cost, and unit for one material category.
///
/// All three fields are kept as the raw strings the user typed (or that the
/// currency formatter committed), so display formatting survives exactly.
/// The cost field holds a formatted currency string (e.g. `$1,234.56`) once
/// it has been touched via the currency transition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcurementEntry {
    pub volume: String,
    pub cost: String,
    pub unit: String,
}

/// The full form record for one session: jurisdiction fields plus one
/// [`ProcurementEntry`] per category. Nothing here is persisted; the record
/// lives exactly as long as the in-memory session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub city_county: String,
    /// String-encoded population; valid when it denotes a positive integer.
    pub population: String,
    entries: [ProcurementEntry; 5],
}

impl FormData {
    pub fn entry(&self, category: ProcurementCategory) -> &ProcurementEntry {
        &self.entries[category.index()]
    }

    pub fn entry_mut(&mut self, category: ProcurementCategory) -> &mut ProcurementEntry {
        &mut self.entries[category.index()]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_are_empty_strings() {
        let data = FormData::default();

        assert_eq!(data.city_county, "");
        assert_eq!(data.population, "");
        for category in ProcurementCategory::ALL {
            assert_eq!(data.entry(category), &ProcurementEntry::default());
        }
    }

    #[test]
    fn entry_mut_targets_a_single_category() {
        let mut data = FormData::default();

        data.entry_mut(ProcurementCategory::Mulch).volume = "50".to_string();

        assert_eq!(data.entry(ProcurementCategory::Mulch).volume, "50");
        assert_eq!(data.entry(ProcurementCategory::Mulch).cost, "");
        assert_eq!(data.entry(ProcurementCategory::Compost), &ProcurementEntry::default());
    }
}
