use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::core::Interval;

use super::CustomRangeState;

/// Result of normalizing a raw user pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectedPick {
    pub interval: Interval,
    /// `to` was in the future and got clamped to `now`.
    pub clamped_to_now: bool,
    /// `from` was after `to` and got pulled forward to `to`.
    pub pulled_from_forward: bool,
}

/// Normalizes a raw pick into the nearest valid interval.
///
/// Corrections apply in order:
/// 1. a defined `to` later than `now` becomes `now`;
/// 2. with both bounds defined, a `from` later than `to` becomes `to`.
///
/// The later pick wins: the earlier bound moves, never the other way round.
#[must_use]
pub fn correct_pick(pick: Interval, now: NaiveDate) -> CorrectedPick {
    let mut interval = pick;
    let mut clamped_to_now = false;
    let mut pulled_from_forward = false;

    if let Some(to) = interval.to {
        if to > now {
            interval.to = Some(now);
            clamped_to_now = true;
        }
    }

    if let Some(to) = interval.to {
        if interval.from > to {
            interval.from = to;
            pulled_from_forward = true;
        }
    }

    CorrectedPick {
        interval,
        clamped_to_now,
        pulled_from_forward,
    }
}

/// Finite state machine for a two-click custom date range.
///
/// `begin` opens a pick anchored at today, each `select` adopts a corrected
/// pick, and the first complete pick is reported as the authoritative
/// interval. Nothing here ever rejects a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomRangeValidator {
    state: CustomRangeState,
    pending: Option<Interval>,
}

impl Default for CustomRangeValidator {
    fn default() -> Self {
        Self {
            state: CustomRangeState::Idle,
            pending: None,
        }
    }
}

impl CustomRangeValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> CustomRangeState {
        self.state
    }

    /// Interval accumulated so far, finalized or not.
    #[must_use]
    pub fn pending(&self) -> Option<Interval> {
        self.pending
    }

    /// Starts a new pick at `{from: today, to: None}`.
    pub fn begin(&mut self, today: NaiveDate) {
        trace!(from = %today, previous_state = ?self.state, "begin custom range pick");
        self.pending = Some(Interval::pending(today));
        self.state = CustomRangeState::PartialFrom;
    }

    /// Adopts a corrected `pick`.
    ///
    /// Returns the interval once both bounds are defined and moves to
    /// `Finalized`. Returns `None` while `to` is still open; callers must not
    /// treat that as a filter change.
    pub fn select(&mut self, pick: Interval, now: NaiveDate) -> Option<Interval> {
        let corrected = correct_pick(pick, now);
        if corrected.clamped_to_now || corrected.pulled_from_forward {
            debug!(
                raw = ?pick,
                corrected = ?corrected.interval,
                clamped_to_now = corrected.clamped_to_now,
                pulled_from_forward = corrected.pulled_from_forward,
                "corrected custom range pick"
            );
        }

        let interval = corrected.interval;
        self.pending = Some(interval);
        if interval.is_complete() {
            self.state = CustomRangeState::Finalized;
            debug!(interval = %interval, "custom range finalized");
            Some(interval)
        } else {
            self.state = CustomRangeState::PartialFrom;
            trace!(from = %interval.from, "custom range awaiting second pick");
            None
        }
    }

    /// Drops any pick in progress and returns to `Idle`.
    pub fn reset(&mut self) {
        self.pending = None;
        self.state = CustomRangeState::Idle;
    }
}
