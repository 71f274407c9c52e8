use serde::{Deserialize, Serialize};

/// Allowed measurement units for a procurement entry.
///
/// The form stores the selected unit as its raw string (empty when unset);
/// this enum is the option set the unit selector offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Tons,
    CubicYards,
    Ton,
    Dge,
    KWh,
    Therms,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Self::Tons,
        Self::CubicYards,
        Self::Ton,
        Self::Dge,
        Self::KWh,
        Self::Therms,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tons => "tons",
            Self::CubicYards => "cubic yards",
            Self::Ton => "ton",
            Self::Dge => "DGE",
            Self::KWh => "kWh",
            Self::Therms => "therms",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.as_str() == s)
    }
}
