//! Read-only projection of the form record for the review screen.

use crate::models::{FormData, ProcurementCategory};

/// One rendered line of the review screen's procurement section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub label: String,
    pub volume: String,
    pub unit: String,
    pub cost: String,
}

/// Projects the five procurement entries into display rows, in form order.
/// Pure: no state of its own, no side effects.
pub fn review_rows(data: &FormData) -> Vec<ReviewRow> {
    ProcurementCategory::ALL
        .into_iter()
        .map(|category| {
            let entry = data.entry(category);
            ReviewRow {
                label: category.review_label(),
                volume: entry.volume.clone(),
                unit: entry.unit.clone(),
                cost: entry.cost.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rows_follow_form_order_with_review_labels() {
        let rows = review_rows(&FormData::default());

        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Compost", "Mulch", "R N G", "Biomass", "Other"]);
    }

    #[test]
    fn rows_carry_entry_values_verbatim() {
        let mut data = FormData::default();
        let compost = data.entry_mut(ProcurementCategory::Compost);
        compost.volume = "50".to_string();
        compost.unit = "tons".to_string();
        compost.cost = "$1,234.00".to_string();

        let rows = review_rows(&data);

        assert_eq!(rows[0].volume, "50");
        assert_eq!(rows[0].unit, "tons");
        assert_eq!(rows[0].cost, "$1,234.00");
        assert_eq!(rows[1].volume, "");
    }
}
