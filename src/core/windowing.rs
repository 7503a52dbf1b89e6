use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{Interval, RangeOption, TimeSeriesPoint};
use crate::error::{RangeError, RangeResult};

/// Trailing period-unit counts used for preset windows.
///
/// A "period unit" is one sample of the series, so a monthly series shows
/// one point for `LastMonth`, three for `LastQuarter` and six for
/// `Last6Months`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowTuning {
    pub last_month_units: usize,
    pub last_quarter_units: usize,
    pub last_six_months_units: usize,
}

impl Default for WindowTuning {
    fn default() -> Self {
        Self {
            last_month_units: 1,
            last_quarter_units: 3,
            last_six_months_units: 6,
        }
    }
}

impl WindowTuning {
    pub fn validate(self) -> RangeResult<Self> {
        if self.last_month_units == 0
            || self.last_quarter_units == 0
            || self.last_six_months_units == 0
        {
            return Err(RangeError::InvalidConfig(
                "window tuning unit counts must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Trailing count for `option`, or `None` when the option is not a
    /// tail slice (`LastYear` shows everything, `Custom` filters by date).
    #[must_use]
    pub fn trailing_units(self, option: RangeOption) -> Option<usize> {
        match option {
            RangeOption::LastMonth => Some(self.last_month_units),
            RangeOption::LastQuarter => Some(self.last_quarter_units),
            RangeOption::Last6Months => Some(self.last_six_months_units),
            RangeOption::LastYear | RangeOption::Custom => None,
        }
    }
}

/// Returns the visible slice of `series` for `option` using default tuning.
///
/// See [`window_for_tuned`].
#[must_use]
pub fn window_for<'a, V>(
    option: RangeOption,
    series: &'a [TimeSeriesPoint<V>],
    interval: Option<Interval>,
) -> &'a [TimeSeriesPoint<V>] {
    window_for_tuned(option, series, interval, WindowTuning::default())
}

/// Returns the visible slice of an ascending `series`.
///
/// Presets take a trailing slice, `LastYear` takes the whole series.
/// `Custom` with a complete interval keeps points inside the inclusive
/// bounds; `Custom` without one falls back to the `Last6Months` slice so a
/// half-finished pick never blanks the chart.
///
/// The result borrows from `series`; nothing is copied or reordered.
#[must_use]
pub fn window_for_tuned<'a, V>(
    option: RangeOption,
    series: &'a [TimeSeriesPoint<V>],
    interval: Option<Interval>,
    tuning: WindowTuning,
) -> &'a [TimeSeriesPoint<V>] {
    match option {
        RangeOption::LastYear => series,
        RangeOption::Custom => match interval.and_then(Interval::bounds) {
            Some((from, to)) => points_in_date_window(series, from, to),
            None => trailing(series, tuning.last_six_months_units),
        },
        preset => match tuning.trailing_units(preset) {
            Some(units) => trailing(series, units),
            None => series,
        },
    }
}

/// Last `units` points of `series` (all of it when shorter).
#[must_use]
pub fn trailing<V>(series: &[TimeSeriesPoint<V>], units: usize) -> &[TimeSeriesPoint<V>] {
    &series[series.len().saturating_sub(units)..]
}

/// Points whose timestamp falls inside the inclusive `[from, to]` window.
///
/// Relies on ascending order, so the match is one contiguous slice found by
/// binary search. An inverted window yields an empty slice.
#[must_use]
pub fn points_in_date_window<V>(
    series: &[TimeSeriesPoint<V>],
    from: NaiveDate,
    to: NaiveDate,
) -> &[TimeSeriesPoint<V>] {
    if from > to {
        return &series[..0];
    }
    let start = series.partition_point(|point| point.timestamp < from);
    let end = series.partition_point(|point| point.timestamp <= to);
    &series[start..end]
}
