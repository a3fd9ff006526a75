// src/datetime.rs — Calendar arithmetic and date formatting (chrono)

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Write;

use crate::infra::errors::HelperError;

/// Date-time layouts tried by [`parse_date`], after RFC 3339.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Date-only layouts tried by [`parse_date`]; the time is midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y"];

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// 365 or 366.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Longest a month can be in any year (February counts as 29).
pub fn max_day_of_month(month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(29),
        _ => None,
    }
}

/// Length of `month` in `year`; `None` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Parse a date or date-time in one of the common layouts.
///
/// RFC 3339 input keeps its wall-clock time (the offset is dropped).
pub fn parse_date(input: &str) -> Result<NaiveDateTime, HelperError> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_local());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(input, format) {
            return Ok(d.and_time(NaiveTime::MIN));
        }
    }

    Err(HelperError::DateParse {
        input: input.to_string(),
    })
}

/// Re-format a date string with a strftime pattern.
pub fn format(input: &str, format: &str) -> Result<String, HelperError> {
    let dt = parse_date(input)?;
    let mut out = String::new();
    write!(out, "{}", dt.format(format)).map_err(|_| HelperError::DateFormat {
        format: format.to_string(),
    })?;
    Ok(out)
}

/// Whole years from `birth` to `today`, never negative.
pub fn age_at(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Age in whole years as of the local date.
pub fn age(input: &str) -> Result<u32, HelperError> {
    let birth = parse_date(input)?.date();
    Ok(age_at(birth, Local::now().date_naive()))
}
