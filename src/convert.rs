//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};
use hesab_calendar::{GregorianDate, JalaliDate};
use hesab_numerals::to_persian_digits;
use hesab_search::{ApiBase, MAX_LIMIT};

use crate::config::*;

/// How dates and amounts are rendered on output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    separator: String,
    persian_digits: bool,
}

impl DisplayOptions {
    /// Jalali date with the configured separator and digits.
    pub fn jalali(&self, date: JalaliDate) -> String {
        self.digits(date.format(&self.separator))
    }

    /// Gregorian date, always ISO so it can be fed back to a date input.
    pub fn gregorian(&self, date: GregorianDate) -> String {
        date.to_iso()
    }

    /// Applies the configured digit set.
    pub fn digits(&self, text: String) -> String {
        if self.persian_digits {
            to_persian_digits(&text)
        } else {
            text
        }
    }
}

/// Builds the [`ApiBase`] from `[api].url_prefix`.
pub fn build_api_base(api: &ApiToml) -> Result<ApiBase> {
    ApiBase::new(&api.url_prefix).context("invalid [api].url_prefix")
}

/// Builds the output [`DisplayOptions`] from the `[display]` section.
///
/// The separator must be one to three characters and contain no digits.
pub fn build_display(display: &DisplayToml) -> Result<DisplayOptions> {
    let sep = &display.date_separator;
    let len = sep.chars().count();
    if !(1..=3).contains(&len) {
        bail!("[display].date_separator must be 1 to 3 characters, got {sep:?}");
    }
    if sep.chars().any(|c| c.is_numeric()) {
        bail!("[display].date_separator must not contain digits, got {sep:?}");
    }
    Ok(DisplayOptions {
        separator: sep.clone(),
        persian_digits: display.persian_digits,
    })
}

/// Validates `[search].default_limit`.
pub fn build_search_limit(search: &SearchToml) -> Result<usize> {
    check_limit(search.default_limit).context("invalid [search].default_limit")
}

/// Validates a result limit against what the search endpoint accepts.
pub fn check_limit(limit: usize) -> Result<usize> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        bail!("limit must be between 1 and {MAX_LIMIT}, got {limit}");
    }
    Ok(limit)
}

/// Validates `[sales].max_rows`.
pub fn build_max_rows(sales: &SalesToml) -> Result<usize> {
    if sales.max_rows == 0 {
        bail!("[sales].max_rows must be at least 1");
    }
    Ok(sales.max_rows)
}
