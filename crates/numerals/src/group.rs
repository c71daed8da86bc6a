//! Thousands-separated display formatting.

/// Formats an amount for display with `,` thousands separators.
///
/// Whole numbers print without decimals (`1,234,567`); anything with a
/// fractional part prints with exactly two decimals (`1,234.50`).
/// Non-finite values fall back to their plain `Display` form.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if (value - value.trunc()).abs() < 1e-9 {
        group_fixed(value.trunc(), 0)
    } else {
        group_fixed(value, 2)
    }
}

/// Formats an amount compactly: like [`group_thousands`], but trailing
/// fractional zeros are dropped (`1,234.5`, never `1,234.50`).
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if (value - value.trunc()).abs() < 1e-6 {
        return group_fixed(value.trunc(), 0);
    }
    let text = group_fixed(value, 2);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn group_fixed(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
    // "-0.00" is printed as "0.00"
    if value < 0.0 && text.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_integers_have_no_separator() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(7.0), "7");
        assert_eq!(group_thousands(999.0), "999");
    }

    #[test]
    fn thousands() {
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1_234_567.0), "1,234,567");
        assert_eq!(group_thousands(100_000.0), "100,000");
    }

    #[test]
    fn fractional_two_decimals() {
        assert_eq!(group_thousands(1234.5), "1,234.50");
        assert_eq!(group_thousands(0.25), "0.25");
    }

    #[test]
    fn negative_values() {
        assert_eq!(group_thousands(-1_500_000.0), "-1,500,000");
        assert_eq!(group_thousands(-12.75), "-12.75");
    }

    #[test]
    fn non_finite_passthrough() {
        assert_eq!(group_thousands(f64::NAN), "NaN");
        assert_eq!(group_thousands(f64::INFINITY), "inf");
    }

    #[test]
    fn compact_trims_zeros() {
        assert_eq!(format_compact(1234.5), "1,234.5");
        assert_eq!(format_compact(2.25), "2.25");
        assert_eq!(format_compact(15.0), "15");
        assert_eq!(format_compact(1_000_000.0), "1,000,000");
    }

    #[test]
    fn compact_rounds_tiny_fraction_away() {
        assert_eq!(format_compact(5.001), "5");
        assert_eq!(format_compact(-0.001), "0");
    }
}
