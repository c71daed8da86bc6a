//! Persian number words for amounts ("یک میلیون و دویست هزار تومان").

use std::borrow::Cow;

use crate::error::NumeralsError;
use crate::parse::parse_amount;

const ONES: [&str; 10] = [
    "صفر", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه",
];

/// Words for 10..=19, indexed by `n - 10`.
const TEENS: [&str; 10] = [
    "ده", "یازده", "دوازده", "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
];

/// Words for the tens digit; indices 0 and 1 are covered by `ONES`/`TEENS`.
const TENS: [&str; 10] = [
    "", "", "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود",
];

const HUNDREDS: [&str; 10] = [
    "", "صد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
];

/// Titles of successive groups of three digits.
const GROUPS: [&str; 5] = ["", "هزار", "میلیون", "میلیارد", "تریلیون"];

const JOINER: &str = " و ";

const NEGATIVE: &str = "منفی";

const TOMAN: &str = "تومان";

/// Writes an integer out in Persian words.
///
/// Groups beyond trillions are titled `۱۰^N`.
pub fn number_to_words(value: i64) -> String {
    if value == 0 {
        return ONES[0].to_string();
    }

    let mut rest = value.unsigned_abs();
    let mut groups: Vec<String> = Vec::new();
    let mut index = 0usize;
    while rest > 0 {
        let chunk = (rest % 1000) as usize;
        if chunk != 0 {
            let words = chunk_to_words(chunk);
            let title = group_title(index);
            if title.is_empty() {
                groups.push(words);
            } else {
                groups.push(format!("{words} {title}"));
            }
        }
        rest /= 1000;
        index += 1;
    }
    groups.reverse();

    let text = groups.join(JOINER);
    if value < 0 {
        format!("{NEGATIVE} {text}")
    } else {
        text
    }
}

/// Rounds an amount half away from zero and writes it out in Persian words.
///
/// # Errors
///
/// Returns [`NumeralsError::NonFinite`] for NaN/infinite input and
/// [`NumeralsError::OutOfRange`] when the rounded amount exceeds `i64`.
pub fn amount_to_words(amount: f64) -> Result<String, NumeralsError> {
    if !amount.is_finite() {
        return Err(NumeralsError::NonFinite { value: amount });
    }
    let rounded = amount.round();
    if rounded.abs() >= i64::MAX as f64 {
        return Err(NumeralsError::OutOfRange { value: amount });
    }
    Ok(number_to_words(rounded as i64))
}

/// Amount in words followed by the currency unit, e.g. `"پنج هزار تومان"`.
///
/// # Errors
///
/// Same as [`amount_to_words`].
pub fn amount_to_toman_words(amount: f64) -> Result<String, NumeralsError> {
    amount_to_words(amount).map(|words| format!("{words} {TOMAN}"))
}

/// Parses typed amount text (see [`parse_amount`]) and renders it in toman words.
///
/// # Errors
///
/// Returns [`NumeralsError::NotANumber`] when the text is not a number, plus
/// the errors of [`amount_to_words`].
pub fn amount_text_to_toman_words(text: &str) -> Result<String, NumeralsError> {
    let amount = parse_amount(text).ok_or_else(|| NumeralsError::NotANumber {
        input: text.to_string(),
    })?;
    amount_to_toman_words(amount)
}

fn chunk_to_words(n: usize) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(3);
    let hundreds = n / 100;
    let tens_units = n % 100;

    if hundreds > 0 {
        parts.push(HUNDREDS[hundreds]);
    }
    match tens_units {
        0 => {}
        1..=9 => parts.push(ONES[tens_units]),
        10..=19 => parts.push(TEENS[tens_units - 10]),
        _ => {
            parts.push(TENS[tens_units / 10]);
            if tens_units % 10 != 0 {
                parts.push(ONES[tens_units % 10]);
            }
        }
    }
    parts.join(JOINER)
}

fn group_title(index: usize) -> Cow<'static, str> {
    match GROUPS.get(index) {
        Some(title) => Cow::Borrowed(*title),
        None => Cow::Owned(format!("۱۰^{}", index * 3)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(number_to_words(0), "صفر");
    }

    #[test]
    fn units_and_teens() {
        assert_eq!(number_to_words(5), "پنج");
        assert_eq!(number_to_words(10), "ده");
        assert_eq!(number_to_words(15), "پانزده");
        assert_eq!(number_to_words(19), "نوزده");
    }

    #[test]
    fn tens_with_units() {
        assert_eq!(number_to_words(20), "بیست");
        assert_eq!(number_to_words(21), "بیست و یک");
        assert_eq!(number_to_words(99), "نود و نه");
    }

    #[test]
    fn hundreds() {
        assert_eq!(number_to_words(100), "صد");
        assert_eq!(number_to_words(105), "صد و پنج");
        assert_eq!(number_to_words(999), "نهصد و نود و نه");
    }

    #[test]
    fn groups() {
        assert_eq!(number_to_words(1000), "یک هزار");
        assert_eq!(number_to_words(2_000_000), "دو میلیون");
        assert_eq!(
            number_to_words(1_250_000),
            "یک میلیون و دویست و پنجاه هزار"
        );
        assert_eq!(number_to_words(1_000_001), "یک میلیون و یک");
    }

    #[test]
    fn beyond_trillions() {
        assert_eq!(number_to_words(1_000_000_000_000_000), "یک ۱۰^15");
    }

    #[test]
    fn negative() {
        assert_eq!(number_to_words(-7), "منفی هفت");
    }

    #[test]
    fn i64_min_does_not_overflow() {
        assert!(number_to_words(i64::MIN).starts_with(NEGATIVE));
    }

    #[test]
    fn amount_rounds_half_away_from_zero() {
        assert_eq!(amount_to_words(2.5).unwrap(), "سه");
        assert_eq!(amount_to_words(-2.5).unwrap(), "منفی سه");
        assert_eq!(amount_to_words(2.4).unwrap(), "دو");
    }

    #[test]
    fn amount_non_finite() {
        assert_eq!(
            amount_to_words(f64::NAN).unwrap_err().to_string(),
            "amount must be finite, got NaN"
        );
    }

    #[test]
    fn amount_out_of_range() {
        assert!(matches!(
            amount_to_words(1e30),
            Err(NumeralsError::OutOfRange { .. })
        ));
    }

    #[test]
    fn toman_suffix() {
        assert_eq!(amount_to_toman_words(5000.0).unwrap(), "پنج هزار تومان");
    }

    #[test]
    fn toman_from_text() {
        assert_eq!(
            amount_text_to_toman_words("۱۲,۰۰۰").unwrap(),
            "دوازده هزار تومان"
        );
        assert_eq!(
            amount_text_to_toman_words("n/a").unwrap_err(),
            NumeralsError::NotANumber {
                input: "n/a".to_string()
            }
        );
    }
}
