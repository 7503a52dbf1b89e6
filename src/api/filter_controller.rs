use chrono::NaiveDate;
use tracing::{debug, trace, warn};

use crate::core::{
    Interval, RangeOption, TimeSeriesPoint, WindowTuning, resolve_range, window_for_tuned,
};
use crate::error::{RangeError, RangeResult};
use crate::interaction::{CustomRangeValidator, correct_pick};
use crate::sink::{WindowSink, WindowUpdate};

use super::{FilterControllerConfig, validate_series};

/// Owns the selection state of one view and publishes finalized windows.
///
/// The sink only ever sees complete, corrected intervals. While a custom
/// pick is half done the previous window stays in place.
pub struct FilterController<V, S: WindowSink<V>> {
    sink: S,
    tuning: WindowTuning,
    option: RangeOption,
    // Only `Some` while `option` is `Custom`.
    custom_interval: Option<Interval>,
    validator: CustomRangeValidator,
    series: Vec<TimeSeriesPoint<V>>,
}

impl<V, S: WindowSink<V>> FilterController<V, S> {
    pub fn new(sink: S, config: FilterControllerConfig) -> RangeResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            sink,
            tuning: config.window_tuning,
            option: config.initial_option,
            custom_interval: None,
            validator: CustomRangeValidator::new(),
            series: Vec::new(),
        })
    }

    #[must_use]
    pub fn option(&self) -> RangeOption {
        self.option
    }

    #[must_use]
    pub fn custom_interval(&self) -> Option<Interval> {
        self.custom_interval
    }

    #[must_use]
    pub fn series(&self) -> &[TimeSeriesPoint<V>] {
        &self.series
    }

    #[must_use]
    pub fn tuning(&self) -> WindowTuning {
        self.tuning
    }

    #[must_use]
    pub fn validator(&self) -> &CustomRangeValidator {
        &self.validator
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Replaces the series and republishes the active window.
    ///
    /// The series must already be strictly ascending; it is never sorted or
    /// deduplicated here. The previous series is kept if the sink rejects
    /// the new window.
    pub fn set_series(
        &mut self,
        series: Vec<TimeSeriesPoint<V>>,
        now: NaiveDate,
    ) -> RangeResult<()> {
        if let Err(err) = validate_series(&series) {
            warn!(error = %err, count = series.len(), "rejecting unordered series");
            return Err(err);
        }
        debug!(count = series.len(), option = %self.option, "set series");
        let selection = Selection {
            option: self.option,
            custom_interval: self.custom_interval,
        };
        publish_window(&mut self.sink, self.tuning, selection, &series, now)?;
        self.series = series;
        Ok(())
    }

    /// Applies a selection event.
    ///
    /// Presets drop any stored custom interval and publish immediately.
    /// `Custom` publishes only with a complete `interval`, which is corrected
    /// against `now` first; otherwise the active window is retained and
    /// `Ok(false)` is returned.
    ///
    /// State is committed only after the sink accepts the window, so a sink
    /// error leaves the previous selection active. Both publishing paths
    /// close any pick in progress in the validator.
    pub fn change(
        &mut self,
        option: RangeOption,
        interval: Option<Interval>,
        now: NaiveDate,
    ) -> RangeResult<bool> {
        if option.is_preset() {
            self.apply(
                Selection {
                    option,
                    custom_interval: None,
                },
                now,
            )?;
            self.validator.reset();
            return Ok(true);
        }

        match interval.filter(|interval| interval.is_complete()) {
            Some(interval) => {
                self.apply_custom(interval, now)?;
                self.validator.reset();
                Ok(true)
            }
            None => {
                self.retain();
                Ok(false)
            }
        }
    }

    /// Opens a two-click custom pick anchored at `today`.
    pub fn begin_custom(&mut self, today: NaiveDate) {
        self.validator.begin(today);
    }

    /// Feeds one custom pick through the validator and applies it once final.
    ///
    /// The validator stays `Finalized` after a successful apply.
    pub fn pick_custom(&mut self, pick: Interval, now: NaiveDate) -> RangeResult<bool> {
        match self.validator.select(pick, now) {
            Some(interval) => {
                self.apply_custom(interval, now)?;
                Ok(true)
            }
            None => {
                self.retain();
                Ok(false)
            }
        }
    }

    /// Interval backing the active option.
    pub fn active_interval(&self, now: NaiveDate) -> RangeResult<Interval> {
        Selection {
            option: self.option,
            custom_interval: self.custom_interval,
        }
        .interval(now)
    }

    /// Interval and visible slice for the active option.
    pub fn current_window(
        &self,
        now: NaiveDate,
    ) -> RangeResult<(Interval, &[TimeSeriesPoint<V>])> {
        let interval = self.active_interval(now)?;
        Ok((interval, self.visible_points()))
    }

    fn visible_points(&self) -> &[TimeSeriesPoint<V>] {
        window_for_tuned(self.option, &self.series, self.custom_interval, self.tuning)
    }

    fn retain(&self) {
        debug!(
            active = %self.option,
            "custom range not finalized; retaining active window"
        );
    }

    fn apply_custom(&mut self, interval: Interval, now: NaiveDate) -> RangeResult<()> {
        self.apply(
            Selection {
                option: RangeOption::Custom,
                custom_interval: Some(correct_pick(interval, now).interval),
            },
            now,
        )
    }

    fn apply(&mut self, selection: Selection, now: NaiveDate) -> RangeResult<()> {
        publish_window(&mut self.sink, self.tuning, selection, &self.series, now)?;

        if let (Some(dropped), None) = (self.custom_interval, selection.custom_interval) {
            debug!(interval = %dropped, "discarding custom interval");
        }
        self.option = selection.option;
        self.custom_interval = selection.custom_interval;
        Ok(())
    }
}

/// Resolves `selection` against `series` and hands the window to `sink`.
fn publish_window<V, S: WindowSink<V>>(
    sink: &mut S,
    tuning: WindowTuning,
    selection: Selection,
    series: &[TimeSeriesPoint<V>],
    now: NaiveDate,
) -> RangeResult<()> {
    let interval = selection.interval(now)?;
    let points = window_for_tuned(selection.option, series, selection.custom_interval, tuning);
    trace!(
        option = %selection.option,
        interval = %interval,
        count = points.len(),
        "publish window"
    );
    sink.publish(WindowUpdate {
        option: selection.option,
        interval,
        points,
    })
    .inspect_err(|err| {
        warn!(error = %err, option = %selection.option, "sink rejected window");
    })
}

/// Option plus the custom interval backing it, before or after commit.
#[derive(Debug, Clone, Copy)]
struct Selection {
    option: RangeOption,
    custom_interval: Option<Interval>,
}

impl Selection {
    fn interval(self, now: NaiveDate) -> RangeResult<Interval> {
        match self.option {
            RangeOption::Custom => self.custom_interval.ok_or_else(|| {
                RangeError::InvalidData("custom option active without an interval".to_owned())
            }),
            preset => resolve_range(preset, now),
        }
    }
}
