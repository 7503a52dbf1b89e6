//! Per-view orchestration: selection state, configuration and snapshots.

mod controller_config;
mod filter_controller;
mod filter_snapshot;
mod validation;

pub use controller_config::FilterControllerConfig;
pub use filter_controller::FilterController;
pub use filter_snapshot::{
    FILTER_SNAPSHOT_JSON_SCHEMA_V1, FilterSnapshot, FilterSnapshotJsonContractV1,
};
pub use validation::validate_series;
