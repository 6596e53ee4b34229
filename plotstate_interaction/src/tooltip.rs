// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! De-duplication of tooltip notifications.
//!
//! The rendering backend reports a tooltip frame on every pointer move. The
//! embedding application only wants to hear when the `(active, label)` pair
//! actually changes, including moving onto or off the plot.
//!
//! ```
//! use plotstate_interaction::tooltip::{TooltipChangeNotifier, TooltipObservation};
//!
//! let mut notifier = TooltipChangeNotifier::new();
//! let jan = TooltipObservation::new(true, Some("Jan".into()));
//!
//! assert!(notifier.observe(&jan));
//! assert!(!notifier.observe(&jan));
//! assert!(notifier.observe(&TooltipObservation::new(false, Some("Jan".into()))));
//! ```

use alloc::string::String;

/// The part of a tooltip frame that decides whether to notify.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TooltipObservation {
    /// Whether the pointer is over a data position.
    pub active: bool,
    /// The index label under the pointer, if the backend supplies one.
    pub label: Option<String>,
}

impl TooltipObservation {
    /// Creates an observation.
    #[must_use]
    pub fn new(active: bool, label: Option<String>) -> Self {
        Self { active, label }
    }
}

/// Remembers the last delivered observation for one chart.
#[derive(Clone, Debug, Default)]
pub struct TooltipChangeNotifier {
    last: Option<TooltipObservation>,
}

impl TooltipChangeNotifier {
    /// Creates a notifier that has delivered nothing yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Returns `true` if `observation` differs from the last delivered one.
    ///
    /// The very first observation is always delivered.
    #[must_use]
    pub fn should_deliver(&self, observation: &TooltipObservation) -> bool {
        self.last.as_ref() != Some(observation)
    }

    /// Records `observation` as delivered.
    pub fn mark_delivered(&mut self, observation: TooltipObservation) {
        self.last = Some(observation);
    }

    /// Checks and records in one step. Returns `true` when the caller should
    /// invoke its callback.
    pub fn observe(&mut self, observation: &TooltipObservation) -> bool {
        if !self.should_deliver(observation) {
            log::trace!("tooltip frame suppressed: {observation:?}");
            return false;
        }
        self.mark_delivered(observation.clone());
        true
    }

    /// The last delivered observation.
    #[must_use]
    pub fn last_delivered(&self) -> Option<&TooltipObservation> {
        self.last.as_ref()
    }

    /// Forgets the last delivered observation.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
