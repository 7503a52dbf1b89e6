use chrono::{Datelike, Months, NaiveDate};

use crate::error::{RangeError, RangeResult};

/// First day of `month` (1-based) in `year`.
pub fn month_start(year: i32, month: u32) -> RangeResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(RangeError::DateOutOfRange("month start"))
}

/// Last day of `month` (1-based) in `year`, leap years included.
pub fn month_end(year: i32, month: u32) -> RangeResult<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    month_start(next_year, next_month)?
        .pred_opt()
        .ok_or(RangeError::DateOutOfRange("month end"))
}

/// Zero-based quarter index (0..=3) of `date`.
#[must_use]
pub fn quarter_index(date: NaiveDate) -> u32 {
    date.month0() / 3
}

/// Year and zero-based quarter index of the quarter before the one holding `date`.
#[must_use]
pub fn previous_quarter(date: NaiveDate) -> (i32, u32) {
    match quarter_index(date) {
        0 => (date.year() - 1, 3),
        q => (date.year(), q - 1),
    }
}

/// Year and 1-based month of the month before the one holding `date`.
#[must_use]
pub fn previous_month(date: NaiveDate) -> (i32, u32) {
    match date.month() {
        1 => (date.year() - 1, 12),
        m => (date.year(), m - 1),
    }
}

/// Steps back `count` calendar months, clamping the day to the target
/// month's length (31 Aug minus 6 months is 28/29 Feb).
pub fn months_before(date: NaiveDate, count: u32) -> RangeResult<NaiveDate> {
    date.checked_sub_months(Months::new(count))
        .ok_or(RangeError::DateOutOfRange("months before"))
}

#[must_use]
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}
