//! # hesab-calendar
//!
//! Jalali (Persian solar Hijri) <-> Gregorian date conversion by proleptic
//! day arithmetic, with no calendar library underneath.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(gy, gm, gd)"] -->|"gregorian_to_jalali()"| B["(jy, jm, jd)"]
//!     B -->|"jalali_to_gregorian()"| A
//!     C["GregorianDate"] -->|".to_jalali()"| D["JalaliDate"]
//!     D -->|".to_gregorian()"| C
//!     E["'1402/01/01'"] -->|"jalali_input_to_iso()"| F["'2023-03-21'"]
//!     F -->|"iso_to_jalali()"| E
//!     G["NaiveDateTime"] -->|"jalali_reference()"| H["'INV-14020101-091500'"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use hesab_calendar::{JalaliDate, gregorian_to_jalali, jalali_to_gregorian};
//!
//! // Loose conversion of raw parts
//! assert_eq!(gregorian_to_jalali(2023, 3, 21), Some((1402, 1, 1)));
//! assert_eq!(jalali_to_gregorian(1402, 1, 1), Some((2023, 3, 21)));
//! assert_eq!(jalali_to_gregorian(1402, 13, 1), None);
//!
//! // Strictly validated dates
//! let esfand_30: JalaliDate = "1403/12/30".parse().unwrap();
//! assert_eq!(esfand_30.to_gregorian().to_iso(), "2025-03-20");
//! assert!("1402/12/30".parse::<JalaliDate>().is_err());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `convert` | Loose conversion of `(year, month, day)` triples |
//! | `month` | Month lengths, leap years, month and weekday names |
//! | `date` | Strict `JalaliDate` / `GregorianDate` types |
//! | `parse` | Date strings and date-input adapters |
//! | `reference` | Jalali reference codes and now-info |
//! | `error` | Error types |

mod convert;
mod date;
mod error;
mod month;
mod parse;
mod reference;

pub use convert::{gregorian_to_jalali, jalali_to_gregorian};
pub use date::{GregorianDate, JalaliDate, MAX_YEAR};
pub use error::CalendarError;
pub use month::{
    JALALI_MONTH_NAMES, JALALI_WEEKDAY_NAMES, gregorian_month_days, is_gregorian_leap, is_jalali_leap,
    jalali_month_days, jalali_month_name,
};
pub use parse::{
    iso_to_jalali, jalali_input_to_iso, parse_date_parts, parse_gregorian_date,
    parse_gregorian_date_or,
};
pub use reference::{NowInfo, jalali_reference, jalali_reference_core};
