//! chart-range: reporting-window selection for time-series charts.
//!
//! Turns a preset ("last quarter") or a two-click custom pick into a concrete
//! calendar interval and the matching slice of an ascending time series.
//! Pure resolution and windowing live in `core`, the pick state machine in
//! `interaction`, and per-view orchestration in `api`. Rendering is left to
//! whatever implements `sink::WindowSink`.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod sink;
pub mod telemetry;

pub use api::{FilterController, FilterControllerConfig};
pub use error::{RangeError, RangeResult};
