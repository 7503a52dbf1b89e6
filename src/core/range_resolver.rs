use chrono::{Datelike, NaiveDate};

use crate::core::primitives::{
    month_end, month_start, months_before, previous_month, previous_quarter,
};
use crate::core::{Interval, RangeOption};
use crate::error::{RangeError, RangeResult};

/// Number of calendar months covered by `RangeOption::Last6Months`.
pub const SIX_MONTHS: u32 = 6;

/// Maps a preset option to concrete calendar bounds relative to `now`.
///
/// - `LastMonth`: first to last day of the month before `now`'s month.
/// - `LastQuarter`: first to last day of the quarter before `now`'s quarter.
/// - `Last6Months`: `now` minus six calendar months through `now`.
/// - `LastYear`: 1 January of the previous year through `now`.
///
/// Every returned interval is complete and satisfies `from <= to <= now`.
/// `Custom` has no relative definition and yields
/// [`RangeError::UnresolvableOption`].
pub fn resolve_range(option: RangeOption, now: NaiveDate) -> RangeResult<Interval> {
    match option {
        RangeOption::LastMonth => {
            let (year, month) = previous_month(now);
            Ok(Interval::closed(
                month_start(year, month)?,
                month_end(year, month)?,
            ))
        }
        RangeOption::LastQuarter => {
            let (year, quarter) = previous_quarter(now);
            let first_month = quarter * 3 + 1;
            Ok(Interval::closed(
                month_start(year, first_month)?,
                month_end(year, first_month + 2)?,
            ))
        }
        RangeOption::Last6Months => Ok(Interval::closed(months_before(now, SIX_MONTHS)?, now)),
        RangeOption::LastYear => Ok(Interval::closed(month_start(now.year() - 1, 1)?, now)),
        RangeOption::Custom => Err(RangeError::UnresolvableOption(option)),
    }
}
