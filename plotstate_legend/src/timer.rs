// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned timer handles driven by host timestamps.
//!
//! Nothing here talks to a platform timer. The host passes a monotonic
//! millisecond clock into [`LegendScrollController::advance`] and asks
//! [`LegendScrollController::next_deadline`] when it should wake up next. A
//! timer that is dropped or cleared can therefore never fire again.
//!
//! [`LegendScrollController::advance`]: crate::LegendScrollController::advance
//! [`LegendScrollController::next_deadline`]: crate::LegendScrollController::next_deadline

use smallvec::SmallVec;

/// Monotonic host time in milliseconds.
pub type Millis = u64;

/// A repeating timer with a fixed period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    period: Millis,
    next_due: Millis,
}

impl Interval {
    /// Starts an interval whose first tick is one `period` after `now`.
    ///
    /// A zero period is bumped to one millisecond so the timer cannot spin.
    #[must_use]
    pub fn start(now: Millis, period: Millis) -> Self {
        let period = period.max(1);
        Self {
            period,
            next_due: now.saturating_add(period),
        }
    }

    /// Time of the next tick.
    #[must_use]
    pub fn due(&self) -> Millis {
        self.next_due
    }

    /// Consumes the pending tick and schedules the following one.
    ///
    /// Returns the time the consumed tick was due.
    pub fn fire(&mut self) -> Millis {
        let at = self.next_due;
        self.next_due = at.saturating_add(self.period);
        at
    }
}

/// Pending one-shot deadlines, kept in ascending order.
///
/// Every programmatic scroll arms its own settle timeout, so a held button can
/// have a couple in flight at once.
#[derive(Clone, Debug, Default)]
pub struct Timeouts {
    pending: SmallVec<[Millis; 4]>,
}

impl Timeouts {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a timeout at `deadline`.
    pub fn arm(&mut self, deadline: Millis) {
        let at = self.pending.partition_point(|&t| t <= deadline);
        self.pending.insert(at, deadline);
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn earliest(&self) -> Option<Millis> {
        self.pending.first().copied()
    }

    /// Removes and returns the earliest deadline if it is due at `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<Millis> {
        match self.earliest() {
            Some(t) if t <= now => Some(self.pending.remove(0)),
            _ => None,
        }
    }

    /// Number of pending deadlines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Cancels everything. Safe to call when already empty.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
