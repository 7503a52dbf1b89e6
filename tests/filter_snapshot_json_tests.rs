use chart_range::api::{
    FILTER_SNAPSHOT_JSON_SCHEMA_V1, FilterController, FilterControllerConfig, FilterSnapshot,
};
use chart_range::core::{Interval, RangeOption, TimeSeriesPoint};
use chart_range::interaction::CustomRangeState;
use chart_range::sink::NullSink;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn controller(now: NaiveDate) -> FilterController<u32, NullSink> {
    let series = (1..=28)
        .map(|day| TimeSeriesPoint::new(date(2026, 2, day), day))
        .collect();
    let mut controller =
        FilterController::new(NullSink::default(), FilterControllerConfig::default())
            .expect("controller init");
    controller.set_series(series, now).expect("set series");
    controller
}

#[test]
fn snapshot_captures_custom_selection() {
    let now = date(2026, 3, 10);
    let mut controller = controller(now);
    controller
        .change(
            RangeOption::Custom,
            Some(Interval::closed(date(2026, 2, 10), date(2026, 2, 12))),
            now,
        )
        .expect("change");

    let snapshot = controller.snapshot(now).expect("snapshot");
    assert_eq!(snapshot.option, RangeOption::Custom);
    assert_eq!(snapshot.label, "10 Feb 2026 - 12 Feb 2026");
    assert_eq!(snapshot.point_count, 3);
    assert_eq!(
        snapshot.timestamps,
        vec![date(2026, 2, 10), date(2026, 2, 11), date(2026, 2, 12)]
    );
    assert_eq!(snapshot.custom_state, CustomRangeState::Idle);
}

#[test]
fn snapshot_reports_pick_in_progress() {
    let now = date(2026, 3, 10);
    let mut controller = controller(now);
    controller.begin_custom(now);

    let snapshot = controller.snapshot(now).expect("snapshot");
    assert_eq!(snapshot.option, RangeOption::LastYear);
    assert_eq!(snapshot.custom_state, CustomRangeState::PartialFrom);
    assert_eq!(snapshot.pending_pick, Some(Interval::pending(now)));
}

#[test]
fn snapshot_json_contract_round_trips() {
    let now = date(2026, 3, 10);
    let controller = controller(now);
    let snapshot = controller.snapshot(now).expect("snapshot");

    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {FILTER_SNAPSHOT_JSON_SCHEMA_V1}")));
    assert!(json.contains("\"last-year\""));

    let parsed = FilterSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, snapshot);
}

#[test]
fn snapshot_json_accepts_bare_payload() {
    let now = date(2026, 3, 10);
    let snapshot = controller(now).snapshot(now).expect("snapshot");
    let bare = serde_json::to_string(&snapshot).expect("serialize");

    let parsed = FilterSnapshot::from_json_compat_str(&bare).expect("parse");
    assert_eq!(parsed, snapshot);
}

#[test]
fn snapshot_json_rejects_unknown_schema_version() {
    let now = date(2026, 3, 10);
    let snapshot = controller(now).snapshot(now).expect("snapshot");
    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 99");

    let err = FilterSnapshot::from_json_compat_str(&json).expect_err("must fail");
    assert!(format!("{err}").contains("unsupported snapshot schema version"));
}

#[test]
fn snapshot_json_checks_version_before_reading_payload() {
    let err = FilterSnapshot::from_json_compat_str(r#"{"schema_version": 2, "snapshot": null}"#)
        .expect_err("must fail");
    assert!(format!("{err}").contains("unsupported snapshot schema version: 2"));
}

#[test]
fn snapshot_json_contract_without_payload_is_rejected() {
    let err = FilterSnapshot::from_json_compat_str(r#"{"schema_version": 1}"#)
        .expect_err("must fail");
    assert!(format!("{err}").contains("no `snapshot` field"));
}
