mod custom_range;

use serde::{Deserialize, Serialize};

pub use custom_range::{CorrectedPick, CustomRangeValidator, correct_pick};

/// Lifecycle of a two-click custom range pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomRangeState {
    /// No pick in progress.
    Idle,
    /// `from` is chosen, `to` is still open.
    PartialFrom,
    /// Both bounds are set and the interval has been handed out.
    Finalized,
}
