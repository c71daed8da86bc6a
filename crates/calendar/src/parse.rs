//! Parsing of date strings and the adapters used by Jalali date inputs.
//!
//! A Jalali date input shows `1402/01/01` to the user and keeps the
//! Gregorian ISO date (`2023-03-21`) in a hidden field for submission; a
//! form pre-filled from the server goes the other way.

use chrono::NaiveDate;
use hesab_numerals::to_latin_digits;

use crate::convert::{gregorian_to_jalali, is_loose_month_day, jalali_to_gregorian};
use crate::error::CalendarError;

/// Splits `YYYY-MM-DD` or `YYYY/MM/DD` into numeric parts.
///
/// Persian and Arabic-Indic digits are accepted and surrounding whitespace is
/// ignored. Ranges are not checked here.
///
/// # Errors
///
/// Returns [`CalendarError::Malformed`] when there are not exactly three
/// parts and [`CalendarError::NotNumeric`] when a part is not all digits.
pub fn parse_date_parts(text: &str) -> Result<(i32, u32, u32), CalendarError> {
    let normalized = to_latin_digits(text.trim());
    let parts: Vec<&str> = normalized.split(['-', '/']).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(CalendarError::Malformed {
            input: text.to_string(),
        });
    };
    Ok((parse_part(year)?, parse_part(month)?, parse_part(day)?))
}

/// Converts the text of a Jalali date input to the ISO Gregorian date that
/// is submitted to the server.
///
/// Uses the loose conversion: a day up to 31 is accepted in any month.
///
/// # Errors
///
/// Parsing errors from [`parse_date_parts`], plus
/// [`CalendarError::InvalidMonth`] / [`CalendarError::DayOutOfRange`].
///
/// # Examples
///
/// ```
/// use hesab_calendar::jalali_input_to_iso;
///
/// assert_eq!(jalali_input_to_iso("۱۴۰۲/۰۱/۰۱").unwrap(), "2023-03-21");
/// assert!(jalali_input_to_iso("1402/13/01").is_err());
/// ```
pub fn jalali_input_to_iso(text: &str) -> Result<String, CalendarError> {
    let (year, month, day) = parse_date_parts(text)?;
    check_loose(month, day)?;
    let (gy, gm, gd) = jalali_to_gregorian(year, month, day).ok_or(CalendarError::YearOutOfRange {
        year: i64::from(year),
    })?;
    Ok(format!("{gy:04}-{gm:02}-{gd:02}"))
}

/// Converts a server-provided ISO Gregorian date to Jalali text joined by `sep`.
///
/// # Errors
///
/// Same as [`jalali_input_to_iso`].
pub fn iso_to_jalali(text: &str, sep: &str) -> Result<String, CalendarError> {
    let (year, month, day) = parse_date_parts(text)?;
    check_loose(month, day)?;
    let (jy, jm, jd) = gregorian_to_jalali(year, month, day).ok_or(CalendarError::YearOutOfRange {
        year: i64::from(year),
    })?;
    Ok(format!("{jy:04}{sep}{jm:02}{sep}{jd:02}"))
}

/// Parses a strict ISO `YYYY-MM-DD` date, returning `None` for empty or
/// invalid input.
pub fn parse_gregorian_date(value: &str) -> Option<NaiveDate> {
    let raw = to_latin_digits(value.trim());
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok()
}

/// Like [`parse_gregorian_date`], returning `fallback` on empty or invalid input.
pub fn parse_gregorian_date_or(value: &str, fallback: NaiveDate) -> NaiveDate {
    parse_gregorian_date(value).unwrap_or(fallback)
}

fn parse_part<T: std::str::FromStr>(part: &str) -> Result<T, CalendarError> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarError::NotNumeric {
            part: part.to_string(),
        });
    }
    part.parse().map_err(|_| CalendarError::NotNumeric {
        part: part.to_string(),
    })
}

fn check_loose(month: u32, day: u32) -> Result<(), CalendarError> {
    if is_loose_month_day(month, day) {
        return Ok(());
    }
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Err(CalendarError::DayOutOfRange { day })
}
