//! Strictly validated Jalali and Gregorian dates.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use hesab_numerals::to_persian_digits;

use crate::convert::{gregorian_day_count, gregorian_from_days, jalali_day_count, jalali_from_days};
use crate::error::CalendarError;
use crate::month::{
    JALALI_WEEKDAY_NAMES, gregorian_month_days, jalali_month_days, jalali_month_name,
};
use crate::parse::parse_date_parts;

/// Largest absolute year accepted by the typed dates. Keeps every
/// conversion result inside `i32`.
pub const MAX_YEAR: i32 = 1_000_000;

/// A date in the Jalali (Persian solar Hijri) calendar.
///
/// Unlike [`crate::jalali_to_gregorian`], the constructor rejects days past
/// the end of the month, so Esfand 30 only exists in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    year: i32,
    month: u32,
    day: u32,
}

impl JalaliDate {
    /// Creates a new `JalaliDate`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`], [`CalendarError::InvalidMonth`]
    /// or [`CalendarError::InvalidDay`].
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        check_year(year)?;
        let max_day = jalali_month_days(year, month).ok_or(CalendarError::InvalidMonth { month })?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.day
    }

    /// Returns the Persian month name.
    pub fn month_name(self) -> &'static str {
        jalali_month_name(self.month).unwrap_or_default()
    }

    /// Day of the week, 0 = Saturday through 6 = Friday.
    pub fn weekday(self) -> u32 {
        // the Jalali day count is a multiple of 7 on Saturdays
        jalali_day_count(i64::from(self.year), self.month, self.day).rem_euclid(7) as u32
    }

    /// Persian weekday name.
    pub fn weekday_name(self) -> &'static str {
        JALALI_WEEKDAY_NAMES[self.weekday() as usize]
    }

    /// Converts to the Gregorian calendar.
    pub fn to_gregorian(self) -> GregorianDate {
        let (year, month, day) =
            gregorian_from_days(jalali_day_count(i64::from(self.year), self.month, self.day));
        GregorianDate {
            year: year as i32,
            month,
            day,
        }
    }

    /// Formats as `YYYY{sep}MM{sep}DD`.
    pub fn format(self, sep: &str) -> String {
        format!("{:04}{sep}{:02}{sep}{:02}", self.year, self.month, self.day)
    }

    /// Formats as `YYYY{sep}MM{sep}DD` with Persian digits.
    pub fn format_persian(self, sep: &str) -> String {
        to_persian_digits(&self.format(sep))
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format("/"))
    }
}

impl FromStr for JalaliDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_date_parts(s)?;
        Self::new(year, month, day)
    }
}

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u32,
    day: u32,
}

impl GregorianDate {
    /// Creates a new `GregorianDate`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`], [`CalendarError::InvalidMonth`]
    /// or [`CalendarError::InvalidDay`].
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        check_year(year)?;
        let max_day =
            gregorian_month_days(year, month).ok_or(CalendarError::InvalidMonth { month })?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.day
    }

    /// Converts to the Jalali calendar.
    pub fn to_jalali(self) -> JalaliDate {
        let (year, month, day) =
            jalali_from_days(gregorian_day_count(i64::from(self.year), self.month, self.day));
        JalaliDate {
            year: year as i32,
            month,
            day,
        }
    }

    /// Formats as ISO `YYYY-MM-DD`, the only format the server accepts.
    pub fn to_iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Converts to a `chrono::NaiveDate`, or `None` outside chrono's range.
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl From<JalaliDate> for GregorianDate {
    fn from(date: JalaliDate) -> Self {
        date.to_gregorian()
    }
}

impl From<GregorianDate> for JalaliDate {
    fn from(date: GregorianDate) -> Self {
        date.to_jalali()
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso())
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_date_parts(s)?;
        Self::new(year, month, day)
    }
}

fn check_year(year: i32) -> Result<(), CalendarError> {
    if !(-MAX_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange {
            year: i64::from(year),
        });
    }
    Ok(())
}
