//! Lenient amount parsing for values typed into form fields.

use crate::digits::to_latin_digits;

/// Parses an amount as typed by a user.
///
/// Thousands separators (`,`, `،`, `٬`) and whitespace are dropped and
/// Persian/Arabic-Indic digits are accepted. Empty, unparsable or non-finite
/// input yields `None`.
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = to_latin_digits(text)
        .chars()
        .filter(|c| !matches!(c, ',' | '،' | '٬') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let value: f64 = cleaned.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Like [`parse_amount`], returning `default` when the text is not a number.
pub fn parse_amount_or(text: &str, default: f64) -> f64 {
    parse_amount(text).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integer() {
        assert_eq!(parse_amount("1500"), Some(1500.0));
    }

    #[test]
    fn grouped_with_commas() {
        assert_eq!(parse_amount("1,250,000"), Some(1_250_000.0));
    }

    #[test]
    fn persian_digits_and_separator() {
        assert_eq!(parse_amount("۱٬۲۵۰"), Some(1250.0));
        assert_eq!(parse_amount("۲،۵۰۰"), Some(2500.0));
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!(parse_amount("  42.5 "), Some(42.5));
    }

    #[test]
    fn negative() {
        assert_eq!(parse_amount("-3"), Some(-3.0));
    }

    #[test]
    fn empty_is_none() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("  ,, "), None);
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("12x"), None);
    }

    #[test]
    fn non_finite_is_none() {
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn default_fallback() {
        assert_eq!(parse_amount_or("", 0.0), 0.0);
        assert_eq!(parse_amount_or("oops", 1.0), 1.0);
        assert_eq!(parse_amount_or("7", 1.0), 7.0);
    }
}
