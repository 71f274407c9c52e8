use thiserror::Error;

use super::ProcurementCategory;

/// Error returned when a field path does not name a known form field.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown form field '{path}'")]
pub struct FieldPathError {
    path: String,
}

/// Sub-field of a [`super::ProcurementEntry`] addressed by a composite key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Volume,
    Cost,
    Unit,
}

/// A parsed field path.
///
/// Paths are either a root field name (`cityCounty`, `population`) or a
/// composite key of the form `<categoryKey>-<volume|cost|unit>`, e.g.
/// `currentCompost-volume`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CityCounty,
    Population,
    Entry(ProcurementCategory, EntryField),
}

impl Field {
    pub fn parse(path: &str) -> Result<Self, FieldPathError> {
        match path {
            "cityCounty" => return Ok(Self::CityCounty),
            "population" => return Ok(Self::Population),
            _ => {}
        }

        if let Some((prefix, sub)) = path.split_once('-') {
            let category = ProcurementCategory::from_field_key(prefix);
            let entry_field = match sub {
                "volume" => Some(EntryField::Volume),
                "cost" => Some(EntryField::Cost),
                "unit" => Some(EntryField::Unit),
                _ => None,
            };
            if let (Some(category), Some(entry_field)) = (category, entry_field) {
                return Ok(Self::Entry(category, entry_field));
            }
        }

        Err(FieldPathError {
            path: path.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_root_fields() {
        assert_eq!(Field::parse("cityCounty"), Ok(Field::CityCounty));
        assert_eq!(Field::parse("population"), Ok(Field::Population));
    }

    #[test]
    fn parses_composite_keys_for_every_category() {
        for category in ProcurementCategory::ALL {
            let path = format!("{}-cost", category.field_key());
            assert_eq!(
                Field::parse(&path),
                Ok(Field::Entry(category, EntryField::Cost))
            );
        }
        assert_eq!(
            Field::parse("currentRNG-unit"),
            Ok(Field::Entry(ProcurementCategory::Rng, EntryField::Unit))
        );
    }

    #[test]
    fn rejects_unknown_paths() {
        assert!(Field::parse("").is_err());
        assert!(Field::parse("CityCounty").is_err());
        assert!(Field::parse("currentCompost").is_err());
        assert!(Field::parse("currentCompost-price").is_err());
        assert!(Field::parse("currentPlastic-cost").is_err());
    }

    #[test]
    fn error_reports_the_offending_path() {
        let error = Field::parse("currentCompost-price").unwrap_err();

        assert_eq!(error.to_string(), "unknown form field 'currentCompost-price'");
    }
}
