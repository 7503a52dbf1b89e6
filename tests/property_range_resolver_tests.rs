use chart_range::core::{RangeOption, resolve_range};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn now_strategy() -> impl Strategy<Value = NaiveDate> {
    let base = NaiveDate::from_ymd_opt(1900, 1, 1).expect("base date");
    (0i64..100_000).prop_map(move |offset| base + Duration::days(offset))
}

fn preset_strategy() -> impl Strategy<Value = RangeOption> {
    prop_oneof![
        Just(RangeOption::LastMonth),
        Just(RangeOption::LastQuarter),
        Just(RangeOption::Last6Months),
        Just(RangeOption::LastYear),
    ]
}

proptest! {
    #[test]
    fn resolved_presets_are_ordered_and_never_in_the_future(
        now in now_strategy(),
        option in preset_strategy(),
    ) {
        let interval = resolve_range(option, now).expect("resolve");
        let (from, to) = interval.bounds().expect("complete interval");
        prop_assert!(from <= to);
        prop_assert!(to <= now);
    }

    #[test]
    fn calendar_presets_start_on_the_first_of_a_month(
        now in now_strategy(),
        option in prop_oneof![
            Just(RangeOption::LastMonth),
            Just(RangeOption::LastQuarter),
            Just(RangeOption::LastYear),
        ],
    ) {
        use chrono::Datelike;

        let interval = resolve_range(option, now).expect("resolve");
        prop_assert_eq!(interval.from.day(), 1);
    }

    #[test]
    fn last_quarter_spans_three_whole_months(now in now_strategy()) {
        use chrono::Datelike;

        let interval = resolve_range(RangeOption::LastQuarter, now).expect("resolve");
        let to = interval.to.expect("complete interval");
        prop_assert_eq!(interval.from.month0() % 3, 0);
        prop_assert_eq!(to.month0(), interval.from.month0() + 2);
        prop_assert!(to.succ_opt().map(|next| next.day() == 1).unwrap_or(true));
    }
}
