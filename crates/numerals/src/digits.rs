//! Persian, Arabic-Indic and Latin digit conversion.

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Replaces ASCII digits with Persian digits, leaving everything else as is.
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_digit() {
                PERSIAN_DIGITS[(c as u8 - b'0') as usize]
            } else {
                c
            }
        })
        .collect()
}

/// Replaces Persian (`۰`..`۹`) and Arabic-Indic (`٠`..`٩`) digits with ASCII
/// digits. The Arabic decimal separator `٫` becomes `.`.
pub fn to_latin_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => latin(c as u32 - 0x06F0),
            '\u{0660}'..='\u{0669}' => latin(c as u32 - 0x0660),
            '٫' => '.',
            _ => c,
        })
        .collect()
}

fn latin(d: u32) -> char {
    char::from_digit(d, 10).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persian_digits_all() {
        assert_eq!(to_persian_digits("0123456789"), "۰۱۲۳۴۵۶۷۸۹");
    }

    #[test]
    fn persian_digits_keeps_separators() {
        assert_eq!(to_persian_digits("1402/01/01"), "۱۴۰۲/۰۱/۰۱");
        assert_eq!(to_persian_digits("INV-7"), "INV-۷");
    }

    #[test]
    fn latin_from_persian() {
        assert_eq!(to_latin_digits("۱۴۰۲-۰۱-۰۱"), "1402-01-01");
    }

    #[test]
    fn latin_from_arabic_indic() {
        assert_eq!(to_latin_digits("٢٠٢٣"), "2023");
    }

    #[test]
    fn latin_decimal_separator() {
        assert_eq!(to_latin_digits("۱٫۵"), "1.5");
    }

    #[test]
    fn roundtrip_ascii() {
        let text = "sale 2024 row 15";
        assert_eq!(to_latin_digits(&to_persian_digits(text)), text);
    }
}
