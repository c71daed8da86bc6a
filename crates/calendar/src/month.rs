//! Month lengths, leap years and month names.

use crate::convert::{is_gregorian_leap_i64, jalali_day_count};

/// Persian names of the Jalali months (index 0 = Farvardin).
pub const JALALI_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Persian weekday names, starting from Saturday (the first day of the week).
pub const JALALI_WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
];

const GREGORIAN_DAYS_PER_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if the Jalali year has 366 days.
///
/// Derived from the same day arithmetic as the conversion, so Esfand 30 of a
/// leap year always round-trips.
pub fn is_jalali_leap(year: i32) -> bool {
    let year = i64::from(year);
    jalali_day_count(year + 1, 1, 1) - jalali_day_count(year, 1, 1) == 366
}

/// Returns `true` for Gregorian leap years.
pub fn is_gregorian_leap(year: i32) -> bool {
    is_gregorian_leap_i64(i64::from(year))
}

/// Number of days in a Jalali month, or `None` if `month` is not in 1..=12.
pub fn jalali_month_days(year: i32, month: u32) -> Option<u32> {
    match month {
        1..=6 => Some(31),
        7..=11 => Some(30),
        12 if is_jalali_leap(year) => Some(30),
        12 => Some(29),
        _ => None,
    }
}

/// Number of days in a Gregorian month, or `None` if `month` is not in 1..=12.
pub fn gregorian_month_days(year: i32, month: u32) -> Option<u32> {
    match month {
        2 if is_gregorian_leap(year) => Some(29),
        1..=12 => Some(GREGORIAN_DAYS_PER_MONTH[month as usize]),
        _ => None,
    }
}

/// Persian name of a Jalali month, or `None` if `month` is not in 1..=12.
pub fn jalali_month_name(month: u32) -> Option<&'static str> {
    let index = month.checked_sub(1)? as usize;
    JALALI_MONTH_NAMES.get(index).copied()
}
