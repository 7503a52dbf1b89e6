use thiserror::Error;

use crate::core::RangeOption;

pub type RangeResult<T> = Result<T, RangeError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("unknown range option: {0:?}")]
    UnknownRangeOption(String),

    /// Raised when a preset-only path is asked to resolve an option that has
    /// no relative definition.
    #[error("range option `{0}` cannot be resolved from the clock alone")]
    UnresolvableOption(RangeOption),

    #[error("date arithmetic out of range: {0}")]
    DateOutOfRange(&'static str),

    #[error("series must be strictly ascending by timestamp (violated at index {index})")]
    UnorderedSeries { index: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
