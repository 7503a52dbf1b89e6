use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::primitives::format_date_label;
use crate::error::{RangeError, RangeResult};

/// One sample of an ascending, deduplicated time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint<V> {
    pub timestamp: NaiveDate,
    pub values: V,
}

impl<V> TimeSeriesPoint<V> {
    #[must_use]
    pub fn new(timestamp: NaiveDate, values: V) -> Self {
        Self { timestamp, values }
    }
}

/// Calendar interval with inclusive bounds.
///
/// `to == None` marks a pending custom pick. Finalized intervals always carry
/// both bounds with `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
}

impl Interval {
    #[must_use]
    pub fn closed(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to: Some(to) }
    }

    #[must_use]
    pub fn pending(from: NaiveDate) -> Self {
        Self { from, to: None }
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.to.is_some()
    }

    /// Returns `(from, to)` when both bounds are set.
    #[must_use]
    pub fn bounds(self) -> Option<(NaiveDate, NaiveDate)> {
        self.to.map(|to| (self.from, to))
    }

    /// Inclusive membership test. Pending intervals contain nothing.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        match self.to {
            Some(to) => self.from <= date && date <= to,
            None => false,
        }
    }

    /// Display label such as `1 Jan 2026 - 31 Jan 2026`.
    #[must_use]
    pub fn label(self) -> String {
        let from = format_date_label(self.from);
        match self.to {
            Some(to) => format!("{from} - {}", format_date_label(to)),
            None => format!("{from} - …"),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Reporting window the operator can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeOption {
    LastMonth,
    LastQuarter,
    #[serde(rename = "last-6-months")]
    Last6Months,
    LastYear,
    Custom,
}

impl RangeOption {
    pub const ALL: [RangeOption; 5] = [
        Self::LastMonth,
        Self::LastQuarter,
        Self::Last6Months,
        Self::LastYear,
        Self::Custom,
    ];

    /// Presets resolve from the clock alone; `Custom` needs a user pick.
    #[must_use]
    pub fn is_preset(self) -> bool {
        !matches!(self, Self::Custom)
    }

    #[must_use]
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::LastMonth => "last-month",
            Self::LastQuarter => "last-quarter",
            Self::Last6Months => "last-6-months",
            Self::LastYear => "last-year",
            Self::Custom => "custom",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LastMonth => "Last month",
            Self::LastQuarter => "Last quarter",
            Self::Last6Months => "Last 6 months",
            Self::LastYear => "Last year",
            Self::Custom => "Custom range",
        }
    }
}

impl fmt::Display for RangeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl FromStr for RangeOption {
    type Err = RangeError;

    fn from_str(input: &str) -> RangeResult<Self> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.as_query_value() == trimmed)
            .ok_or_else(|| RangeError::UnknownRangeOption(trimmed.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{Interval, RangeOption};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn query_values_parse_back_to_the_same_option() {
        for option in RangeOption::ALL {
            let parsed: RangeOption = option.as_query_value().parse().expect("parse");
            assert_eq!(parsed, option);
        }
    }

    #[test]
    fn unknown_option_name_is_rejected() {
        let err = "last-week".parse::<RangeOption>().expect_err("must fail");
        assert!(format!("{err}").contains("last-week"));
    }

    #[test]
    fn serde_names_match_query_values() {
        let json = serde_json::to_string(&RangeOption::Last6Months).expect("serialize");
        assert_eq!(json, "\"last-6-months\"");
        let option: RangeOption = serde_json::from_str("\"last-quarter\"").expect("deserialize");
        assert_eq!(option, RangeOption::LastQuarter);
    }

    #[test]
    fn pending_interval_contains_nothing() {
        let pending = Interval::pending(date(2026, 1, 1));
        assert!(!pending.contains(date(2026, 1, 1)));
        assert_eq!(pending.bounds(), None);
    }

    #[test]
    fn interval_label_formats_both_bounds() {
        let interval = Interval::closed(date(2026, 1, 1), date(2026, 1, 31));
        assert_eq!(interval.label(), "1 Jan 2026 - 31 Jan 2026");
        assert_eq!(Interval::pending(date(2026, 1, 1)).label(), "1 Jan 2026 - …");
    }
}
