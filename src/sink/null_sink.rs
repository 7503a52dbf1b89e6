use crate::core::Interval;
use crate::error::RangeResult;
use crate::sink::{WindowSink, WindowUpdate};

/// Headless sink for tests and views without a chart attached.
///
/// It still validates each update so invariant breaks surface early.
#[derive(Debug, Default)]
pub struct NullSink {
    pub publish_count: usize,
    pub last_point_count: usize,
    pub last_interval: Option<Interval>,
}

impl<V> WindowSink<V> for NullSink {
    fn publish(&mut self, update: WindowUpdate<'_, V>) -> RangeResult<()> {
        update.validate()?;
        self.publish_count += 1;
        self.last_point_count = update.points.len();
        self.last_interval = Some(update.interval);
        Ok(())
    }
}
