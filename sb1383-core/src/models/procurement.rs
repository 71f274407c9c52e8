use serde::{Deserialize, Serialize};

/// The five Recovered Organic Waste Product material categories tracked by
/// the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcurementCategory {
    Compost,
    Mulch,
    Rng,
    Biomass,
    Other,
}

impl ProcurementCategory {
    /// All categories in form order.
    pub const ALL: [ProcurementCategory; 5] = [
        Self::Compost,
        Self::Mulch,
        Self::Rng,
        Self::Biomass,
        Self::Other,
    ];

    /// Human-readable name as it appears on the procurement screen.
    pub fn label(self) -> &'static str {
        match self {
            Self::Compost => "Compost",
            Self::Mulch => "Mulch",
            Self::Rng => "RNG",
            Self::Biomass => "Biomass",
            Self::Other => "Other",
        }
    }

    /// Composite-key prefix used in field paths (`"currentCompost-cost"` etc.).
    pub fn field_key(self) -> &'static str {
        match self {
            Self::Compost => "currentCompost",
            Self::Mulch => "currentMulch",
            Self::Rng => "currentRNG",
            Self::Biomass => "currentBiomass",
            Self::Other => "currentOther",
        }
    }

    pub fn from_field_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.field_key() == key)
    }

    /// Label shown on the review screen: the category name with a space
    /// inserted before each interior capital letter. Multi-capital names
    /// come out spaced letter by letter ("RNG" renders as "R N G"), which
    /// matches the shipped behavior.
    pub fn review_label(self) -> String {
        let name = self.label();
        let mut out = String::with_capacity(name.len() + 2);
        for (i, ch) in name.chars().enumerate() {
            if i > 0 && ch.is_ascii_uppercase() {
                out.push(' ');
            }
            out.push(ch);
        }
        out
    }

    /// Stable position of this category, used to key per-category storage.
    pub const fn index(self) -> usize {
        match self {
            Self::Compost => 0,
            Self::Mulch => 1,
            Self::Rng => 2,
            Self::Biomass => 3,
            Self::Other => 4,
        }
    }
}
