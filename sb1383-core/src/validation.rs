//! Form field validation.
//!
//! The form has exactly one validated field. Everything else is silently
//! normalized instead of rejected (see [`crate::currency`]).

use rust_decimal::Decimal;

/// Returns true iff `value` denotes a strictly positive whole number.
///
/// The step-1 UI disables forward navigation while this is false and flags
/// the population field; no error is ever surfaced.
pub fn validate_population(value: &str) -> bool {
    match value.trim().parse::<Decimal>() {
        Ok(n) => n.is_integer() && n > Decimal::ZERO,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert!(validate_population("1"));
        assert!(validate_population("12000"));
        assert!(validate_population(" 12000 "));
    }

    #[test]
    fn rejects_zero_and_negatives() {
        assert!(!validate_population("0"));
        assert!(!validate_population("-5"));
    }

    #[test]
    fn rejects_fractional_values() {
        assert!(!validate_population("12.5"));
        assert!(!validate_population("0.9"));
    }

    #[test]
    fn rejects_non_numeric_and_empty() {
        assert!(!validate_population(""));
        assert!(!validate_population("abc"));
        assert!(!validate_population("12k"));
    }
}
