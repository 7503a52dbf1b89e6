use crate::core::{Interval, RangeOption, TimeSeriesPoint};
use crate::error::RangeResult;
use crate::sink::{WindowSink, WindowUpdate};

/// Owned copy of one published window.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedWindow<V> {
    pub option: RangeOption,
    pub interval: Interval,
    pub points: Vec<TimeSeriesPoint<V>>,
}

/// Sink that keeps every update it receives, oldest first.
#[derive(Debug, Clone)]
pub struct RecordingSink<V> {
    pub updates: Vec<RecordedWindow<V>>,
}

impl<V> Default for RecordingSink<V> {
    fn default() -> Self {
        Self {
            updates: Vec::new(),
        }
    }
}

impl<V> RecordingSink<V> {
    #[must_use]
    pub fn last(&self) -> Option<&RecordedWindow<V>> {
        self.updates.last()
    }
}

impl<V: Clone> WindowSink<V> for RecordingSink<V> {
    fn publish(&mut self, update: WindowUpdate<'_, V>) -> RangeResult<()> {
        update.validate()?;
        self.updates.push(RecordedWindow {
            option: update.option,
            interval: update.interval,
            points: update.points.to_vec(),
        });
        Ok(())
    }
}
