//! Date commands: calendar conversion, month lengths and the current date.

use anyhow::{Context, Result};
use hesab_calendar::{
    GregorianDate, JalaliDate, NowInfo, is_jalali_leap, jalali_month_days, jalali_month_name,
    parse_date_parts,
};
use tracing::{debug, info_span};

use crate::cli::{DateArgs, DateCommand};
use crate::config::HesabConfig;
use crate::convert::{self, DisplayOptions};

pub fn run(args: DateArgs, config: &HesabConfig) -> Result<()> {
    let display = convert::build_display(&config.display)?;
    let line = match args.command {
        DateCommand::ToJalali { date } => {
            let _cmd = info_span!("date_to_jalali").entered();
            to_jalali(&date, &display)?
        }
        DateCommand::ToGregorian { date } => {
            let _cmd = info_span!("date_to_gregorian").entered();
            to_gregorian(&date, &display)?
        }
        DateCommand::Month { year, month } => {
            let _cmd = info_span!("date_month").entered();
            month_summary(year, month, &display)?
        }
    };
    println!("{line}");
    Ok(())
}

/// Print the current date in both calendars as JSON.
pub fn now() -> Result<()> {
    let _cmd = info_span!("now").entered();
    let info = NowInfo::now();
    let json = serde_json::to_string_pretty(&info).context("failed to serialize now-info")?;
    println!("{json}");
    Ok(())
}

fn to_jalali(text: &str, display: &DisplayOptions) -> Result<String> {
    let (year, month, day) =
        parse_date_parts(text).with_context(|| format!("invalid Gregorian date {text:?}"))?;
    let date = GregorianDate::new(year, month, day)
        .with_context(|| format!("invalid Gregorian date {text:?}"))?;
    let jalali = date.to_jalali();
    debug!(gregorian = %date, jalali = %jalali, "converted");
    Ok(format!(
        "{} ({} {} {})",
        display.jalali(jalali),
        jalali.weekday_name(),
        display.digits(jalali.day().to_string()),
        jalali.month_name()
    ))
}

fn to_gregorian(text: &str, display: &DisplayOptions) -> Result<String> {
    let date: JalaliDate = text
        .parse()
        .with_context(|| format!("invalid Jalali date {text:?}"))?;
    let gregorian = date.to_gregorian();
    debug!(jalali = %date, gregorian = %gregorian, "converted");
    Ok(display.gregorian(gregorian))
}

fn month_summary(year: i32, month: u32, display: &DisplayOptions) -> Result<String> {
    let days = jalali_month_days(year, month)
        .with_context(|| format!("month must be between 1 and 12, got {month}"))?;
    let name = jalali_month_name(month).unwrap_or_default();
    let leap = if is_jalali_leap(year) { ", leap year" } else { "" };
    Ok(format!(
        "{name} {}: {} days{leap}",
        display.digits(year.to_string()),
        display.digits(days.to_string())
    ))
}
