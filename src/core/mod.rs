pub mod primitives;
pub mod range_resolver;
pub mod types;
pub mod windowing;

pub use range_resolver::resolve_range;
pub use types::{Interval, RangeOption, TimeSeriesPoint};
pub use windowing::{WindowTuning, points_in_date_window, trailing, window_for, window_for_tuned};
