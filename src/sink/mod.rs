mod null_sink;
mod recording_sink;

pub use null_sink::NullSink;
pub use recording_sink::{RecordedWindow, RecordingSink};

use crate::api::validate_series;
use crate::core::{Interval, RangeOption, TimeSeriesPoint};
use crate::error::{RangeError, RangeResult};

/// A finalized window handed to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowUpdate<'a, V> {
    pub option: RangeOption,
    pub interval: Interval,
    pub points: &'a [TimeSeriesPoint<V>],
}

impl<V> WindowUpdate<'_, V> {
    /// Checks the invariants every published window carries.
    pub fn validate(&self) -> RangeResult<()> {
        let Some((from, to)) = self.interval.bounds() else {
            return Err(RangeError::InvalidData(
                "published interval must have both bounds".to_owned(),
            ));
        };
        if from > to {
            return Err(RangeError::InvalidData(format!(
                "published interval is inverted: {from} > {to}"
            )));
        }
        validate_series(self.points)
    }
}

/// Contract implemented by whatever draws or forwards the window.
///
/// Sinks only ever receive fully resolved intervals, never a pending pick.
pub trait WindowSink<V> {
    fn publish(&mut self, update: WindowUpdate<'_, V>) -> RangeResult<()>;
}
