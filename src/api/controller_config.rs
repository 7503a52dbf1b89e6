use serde::{Deserialize, Serialize};

use crate::core::{RangeOption, WindowTuning};
use crate::error::{RangeError, RangeResult};

use super::validation::validate_controller_config;

/// Per-view filter bootstrap configuration.
///
/// Serializable so hosts can ship view defaults alongside their own settings
/// instead of inventing an ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterControllerConfig {
    #[serde(default = "default_initial_option")]
    pub initial_option: RangeOption,
    #[serde(default)]
    pub window_tuning: WindowTuning,
}

impl Default for FilterControllerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterControllerConfig {
    /// Starts on `LastYear` with default window tuning.
    #[must_use]
    pub fn new() -> Self {
        Self {
            initial_option: default_initial_option(),
            window_tuning: WindowTuning::default(),
        }
    }

    #[must_use]
    pub fn with_initial_option(mut self, option: RangeOption) -> Self {
        self.initial_option = option;
        self
    }

    #[must_use]
    pub fn with_window_tuning(mut self, tuning: WindowTuning) -> Self {
        self.window_tuning = tuning;
        self
    }

    pub fn validate(self) -> RangeResult<Self> {
        validate_controller_config(self)
    }

    pub fn to_json_pretty(self) -> RangeResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| RangeError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> RangeResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| RangeError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

fn default_initial_option() -> RangeOption {
    RangeOption::LastYear
}
