//! Currency input sanitation and US-dollar formatting.
//!
//! Cost fields accept arbitrary text and are silently normalized rather than
//! rejected: stray characters are stripped, the number is parsed, and the
//! committed value is re-rendered as a currency string. The sanitized
//! intermediate string is also what the live input shows while the user is
//! typing, so callers need both representations.

use rust_decimal::Decimal;

/// Reduces raw cost text to a plain numeric string.
///
/// Everything that is not a digit or a period is dropped. If more than one
/// period remains, the final one is removed; inputs with three or more
/// periods can still come out with two, which the parser then handles by
/// reading only the leading numeric prefix. Empty input (or a lone period)
/// becomes `"0"`.
pub fn sanitize(raw: &str) -> String {
    let mut cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.matches('.').count() > 1 {
        if let Some(last) = cleaned.rfind('.') {
            cleaned.remove(last);
        }
    }

    if cleaned.is_empty() || cleaned == "." {
        cleaned = "0".to_string();
    }
    cleaned
}

/// Parses a sanitized string, reading the longest leading numeric prefix.
///
/// A second period ends the number, matching how a lenient float parse
/// treats `"1.2.34"` as `1.2`. Anything unparseable yields zero; cost entry
/// never surfaces errors.
pub fn parse_sanitized(cleaned: &str) -> Decimal {
    let prefix = match cleaned.match_indices('.').nth(1) {
        Some((second_period, _)) => &cleaned[..second_period],
        None => cleaned,
    };
    prefix.parse().unwrap_or_else(|_| {
        tracing::debug!(input = %cleaned, "unparseable cost input treated as zero");
        Decimal::ZERO
    })
}

/// Formats an amount as a US-dollar currency string: `$` prefix, comma
/// thousands grouping, and at least two fraction digits. Fraction digits
/// beyond two are kept rather than rounded away, and large magnitudes are
/// written out in full (never scientific notation).
pub fn format_usd(amount: Decimal) -> String {
    let text = amount.normalize().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text.as_str(), ""),
    };

    let mut frac = frac_part.to_string();
    while frac.len() < 2 {
        frac.push('0');
    }
    format!("${}.{}", group_thousands(int_part), frac)
}

/// Locale-style thousands grouping for a whole-number amount, used for the
/// population recap and the requirement figures.
pub fn format_grouped(value: Decimal) -> String {
    let text = value.normalize().to_string();
    match text.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{}.{}", group_thousands(int_part), frac_part)
        }
        None => group_thousands(&text),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 && ch.is_ascii_digit() {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
