//! Error types for the hesab-calendar crate.

/// Error type for all fallible operations in the hesab-calendar crate.
///
/// The loose conversion functions ([`crate::gregorian_to_jalali`],
/// [`crate::jalali_to_gregorian`]) signal failure with `None`; this enum is
/// used by the string layer and the strict date constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a date string does not have three parts.
    #[error("malformed date: {input:?} (expected YYYY-MM-DD or YYYY/MM/DD)")]
    Malformed {
        /// The text that was provided.
        input: String,
    },

    /// Returned when a date part contains anything but digits.
    #[error("date part is not numeric: {part:?}")]
    NotNumeric {
        /// The offending part.
        part: String,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a day is outside 1..=31.
    #[error("invalid day: {day} (must be 1..=31)")]
    DayOutOfRange {
        /// The invalid day number that was provided.
        day: u32,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u32,
        /// The month for which the day is invalid.
        month: u32,
        /// The maximum valid day for the given month.
        max_day: u32,
    },

    /// Returned when a year is outside the supported range.
    #[error("year {year} is out of the supported range")]
    YearOutOfRange {
        /// The year that was provided.
        year: i64,
    },
}
