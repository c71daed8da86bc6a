//! Jalali-dated reference codes and the "now" payload of the live clock.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::Serialize;

use crate::date::GregorianDate;

/// `YYYYMMDD-HHMMSS` with the date part in the Jalali calendar.
pub fn jalali_reference_core(at: &NaiveDateTime) -> String {
    let date = GregorianDate::from(at.date()).to_jalali();
    format!(
        "{:04}{:02}{:02}-{}",
        date.year(),
        date.month(),
        date.day(),
        at.format("%H%M%S")
    )
}

/// Document reference such as `INV-14020101-091500`.
pub fn jalali_reference(prefix: &str, at: &NaiveDateTime) -> String {
    format!("{prefix}-{}", jalali_reference_core(at))
}

/// Current date in both calendars, as rendered by the clock widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NowInfo {
    /// Gregorian ISO date.
    pub greg_date: String,
    /// Jalali date, `YYYY-MM-DD`.
    pub jalali_date: String,
    /// `YYYYMMDD-HHMMSS` reference core.
    pub jalali_reference: String,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
}

impl NowInfo {
    /// Builds the payload for a given instant, using its local wall-clock time.
    pub fn at<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        let local = at.naive_local();
        let greg = GregorianDate::from(local.date());
        Self {
            greg_date: greg.to_iso(),
            jalali_date: greg.to_jalali().format("-"),
            jalali_reference: jalali_reference_core(&local),
            timestamp: at.timestamp(),
        }
    }

    /// Builds the payload for the current local time.
    pub fn now() -> Self {
        Self::at(&Local::now())
    }
}
