use crate::core::{RangeOption, TimeSeriesPoint};
use crate::error::{RangeError, RangeResult};

use super::FilterControllerConfig;

/// Rejects series that are not strictly ascending by timestamp.
///
/// The reported index is the first point that breaks the order, so a
/// duplicate timestamp points at the second occurrence.
pub fn validate_series<V>(series: &[TimeSeriesPoint<V>]) -> RangeResult<()> {
    match series
        .windows(2)
        .position(|pair| pair[0].timestamp >= pair[1].timestamp)
    {
        Some(index) => Err(RangeError::UnorderedSeries { index: index + 1 }),
        None => Ok(()),
    }
}

pub(super) fn validate_controller_config(
    config: FilterControllerConfig,
) -> RangeResult<FilterControllerConfig> {
    if config.initial_option == RangeOption::Custom {
        return Err(RangeError::InvalidConfig(
            "initial option must be a preset; custom needs a finalized interval".to_owned(),
        ));
    }
    config.window_tuning.validate()?;
    Ok(config)
}
