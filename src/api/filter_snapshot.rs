use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{Interval, RangeOption};
use crate::error::{RangeError, RangeResult};
use crate::interaction::CustomRangeState;
use crate::sink::WindowSink;

use super::FilterController;

pub const FILTER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of a controller's selection, used by regression tests
/// and debugging tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSnapshot {
    pub option: RangeOption,
    pub interval: Interval,
    pub label: String,
    pub custom_state: CustomRangeState,
    pub pending_pick: Option<Interval>,
    pub point_count: usize,
    pub timestamps: Vec<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: FilterSnapshot,
}

impl FilterSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> RangeResult<String> {
        serde_json::to_string_pretty(&FilterSnapshotJsonContractV1 {
            schema_version: FILTER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        })
        .map_err(|e| RangeError::InvalidData(format!("snapshot contract serialization: {e}")))
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    ///
    /// A payload carrying `schema_version` is always read as a contract, so an
    /// unknown version is reported as such instead of as a shape mismatch.
    pub fn from_json_compat_str(input: &str) -> RangeResult<Self> {
        let mut value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| RangeError::InvalidData(format!("snapshot json: {e}")))?;

        let snapshot = match value.get("schema_version").cloned() {
            None => value,
            Some(version) => {
                if version.as_u64() != Some(u64::from(FILTER_SNAPSHOT_JSON_SCHEMA_V1)) {
                    return Err(RangeError::InvalidData(format!(
                        "unsupported snapshot schema version: {version}"
                    )));
                }
                value.get_mut("snapshot").map(serde_json::Value::take).ok_or_else(|| {
                    RangeError::InvalidData("snapshot contract has no `snapshot` field".to_owned())
                })?
            }
        };

        serde_json::from_value(snapshot)
            .map_err(|e| RangeError::InvalidData(format!("snapshot payload: {e}")))
    }
}

impl<V, S: WindowSink<V>> FilterController<V, S> {
    /// Captures the active option, its interval and the visible timestamps.
    pub fn snapshot(&self, now: NaiveDate) -> RangeResult<FilterSnapshot> {
        let (interval, points) = self.current_window(now)?;
        Ok(FilterSnapshot {
            option: self.option(),
            interval,
            label: interval.label(),
            custom_state: self.validator().state(),
            pending_pick: self.validator().pending(),
            point_count: points.len(),
            timestamps: points.iter().map(|point| point.timestamp).collect(),
        })
    }
}
