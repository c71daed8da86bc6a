//! Jalali <-> Gregorian conversion by linear day arithmetic.
//!
//! Each direction counts days from a fixed epoch offset and decomposes the
//! count into the target calendar's cycles: 33-year (12053 days) and 4-year
//! (1461 days) cycles for Jalali, 400-year (146097 days), century (36524
//! days) and 4-year cycles for Gregorian. No lookup table beyond the month
//! offsets is used.

/// Cumulative days before each Gregorian month in a common year.
const GREGORIAN_MONTH_OFFSETS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

const GREGORIAN_EPOCH_OFFSET: i64 = 355_666;
const JALALI_EPOCH_OFFSET: i64 = -355_668;
const JALALI_YEAR_SHIFT: i64 = 1595;

const DAYS_PER_33_YEARS: i64 = 12_053;
const DAYS_PER_400_YEARS: i64 = 146_097;
const DAYS_PER_CENTURY: i64 = 36_524;
const DAYS_PER_4_YEARS: i64 = 1_461;

/// Days in the first six Jalali months.
const FIRST_HALF_DAYS: i64 = 186;

/// Converts a Gregorian date to Jalali `(year, month, day)`.
///
/// Returns `None` when `month` is not in 1..=12 or `day` is not in 1..=31.
/// The day is not checked against the month length: `2023-04-31` is accepted
/// and lands on the day after `2023-04-30`.
///
/// # Examples
///
/// ```
/// use hesab_calendar::gregorian_to_jalali;
///
/// assert_eq!(gregorian_to_jalali(2023, 3, 21), Some((1402, 1, 1)));
/// assert_eq!(gregorian_to_jalali(2023, 13, 1), None);
/// ```
pub fn gregorian_to_jalali(year: i32, month: u32, day: u32) -> Option<(i32, u32, u32)> {
    if !is_loose_month_day(month, day) {
        return None;
    }
    let (jy, jm, jd) = jalali_from_days(gregorian_day_count(i64::from(year), month, day));
    Some((i32::try_from(jy).ok()?, jm, jd))
}

/// Converts a Jalali date to Gregorian `(year, month, day)`.
///
/// Returns `None` when `month` is not in 1..=12 or `day` is not in 1..=31.
/// As with [`gregorian_to_jalali`], `1402-12-30` is accepted even though 1402
/// is a common year; it resolves to the first day of 1403.
///
/// # Examples
///
/// ```
/// use hesab_calendar::jalali_to_gregorian;
///
/// assert_eq!(jalali_to_gregorian(1402, 1, 1), Some((2023, 3, 21)));
/// assert_eq!(jalali_to_gregorian(1402, 0, 1), None);
/// ```
pub fn jalali_to_gregorian(year: i32, month: u32, day: u32) -> Option<(i32, u32, u32)> {
    if !is_loose_month_day(month, day) {
        return None;
    }
    let (gy, gm, gd) = gregorian_from_days(jalali_day_count(i64::from(year), month, day));
    Some((i32::try_from(gy).ok()?, gm, gd))
}

/// Month in 1..=12 and day in 1..=31, without checking the month's length.
pub(crate) fn is_loose_month_day(month: u32, day: u32) -> bool {
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

/// Day count of a Gregorian date, relative to the offset used for the
/// Jalali decomposition.
pub(crate) fn gregorian_day_count(year: i64, month: u32, day: u32) -> i64 {
    let leap_year = if month > 2 { year + 1 } else { year };
    GREGORIAN_EPOCH_OFFSET
        + 365 * year
        + (leap_year + 3).div_euclid(4)
        - (leap_year + 99).div_euclid(100)
        + (leap_year + 399).div_euclid(400)
        + i64::from(day)
        + GREGORIAN_MONTH_OFFSETS[(month - 1) as usize]
}

/// Day count of a Jalali date, relative to the offset used for the
/// Gregorian decomposition.
pub(crate) fn jalali_day_count(year: i64, month: u32, day: u32) -> i64 {
    let shifted = year + JALALI_YEAR_SHIFT;
    let month = i64::from(month);
    let month_offset = if month < 7 {
        (month - 1) * 31
    } else {
        (month - 7) * 30 + FIRST_HALF_DAYS
    };
    JALALI_EPOCH_OFFSET
        + 365 * shifted
        + shifted.div_euclid(33) * 8
        + (shifted.rem_euclid(33) + 3) / 4
        + i64::from(day)
        + month_offset
}

pub(crate) fn jalali_from_days(days: i64) -> (i64, u32, u32) {
    let mut year = -JALALI_YEAR_SHIFT + 33 * days.div_euclid(DAYS_PER_33_YEARS);
    let mut days = days.rem_euclid(DAYS_PER_33_YEARS);
    year += 4 * (days / DAYS_PER_4_YEARS);
    days %= DAYS_PER_4_YEARS;
    if days > 365 {
        year += (days - 1) / 365;
        days = (days - 1) % 365;
    }
    // days is now the 0-based day of the Jalali year (0..=365)
    let (month, day) = if days < FIRST_HALF_DAYS {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - FIRST_HALF_DAYS) / 30, 1 + (days - FIRST_HALF_DAYS) % 30)
    };
    (year, month as u32, day as u32)
}

pub(crate) fn gregorian_from_days(days: i64) -> (i64, u32, u32) {
    let mut year = 400 * days.div_euclid(DAYS_PER_400_YEARS);
    let mut days = days.rem_euclid(DAYS_PER_400_YEARS);
    if days > DAYS_PER_CENTURY {
        days -= 1;
        year += 100 * (days / DAYS_PER_CENTURY);
        days %= DAYS_PER_CENTURY;
        if days >= 365 {
            days += 1;
        }
    }
    year += 4 * (days / DAYS_PER_4_YEARS);
    days %= DAYS_PER_4_YEARS;
    if days > 365 {
        year += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let mut day = days + 1;
    let mut month = 1u32;
    for length in gregorian_month_lengths(year) {
        if day <= length {
            break;
        }
        day -= length;
        month += 1;
    }
    (year, month, day as u32)
}

fn gregorian_month_lengths(year: i64) -> [i64; 12] {
    let february = if is_gregorian_leap_i64(year) { 29 } else { 28 };
    [31, february, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
}

pub(crate) fn is_gregorian_leap_i64(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
