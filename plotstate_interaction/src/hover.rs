// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hovered-element tracking: compute enter/leave transitions as the pointer
//! moves between chart elements.
//!
//! Charts have a flat element set (no nesting), so at most one element is
//! hovered and each update yields at most a leave followed by an enter.
//!
//! ## Minimal example
//!
//! ```
//! use plotstate_interaction::hover::{HoverEvent, HoverState};
//!
//! let mut hover = HoverState::new();
//! assert_eq!(hover.update(Some(3)).as_slice(), &[HoverEvent::Enter(3)]);
//! assert_eq!(
//!     hover.update(Some(4)).as_slice(),
//!     &[HoverEvent::Leave(3), HoverEvent::Enter(4)]
//! );
//! assert!(hover.update(Some(4)).is_empty());
//! assert_eq!(hover.clear().as_slice(), &[HoverEvent::Leave(4)]);
//! ```

use smallvec::SmallVec;

/// A hover transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer entered an element.
    Enter(K),
    /// The pointer left an element.
    Leave(K),
}

/// Transitions produced by one update, leave first.
pub type HoverTransitions<K> = SmallVec<[HoverEvent<K>; 2]>;

/// The element currently under the pointer.
#[derive(Clone, Debug)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> HoverState<K> {
    /// Nothing hovered.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// The hovered element.
    #[must_use]
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }
}

impl<K: Clone + PartialEq> HoverState<K> {
    /// Moves the hover to `next`, returning the transitions.
    pub fn update(&mut self, next: Option<K>) -> HoverTransitions<K> {
        let mut out = HoverTransitions::new();
        if self.current == next {
            return out;
        }
        if let Some(prev) = self.current.take() {
            out.push(HoverEvent::Leave(prev));
        }
        if let Some(next) = next {
            out.push(HoverEvent::Enter(next.clone()));
            self.current = Some(next);
        }
        out
    }

    /// Leaves the hovered element, if any.
    pub fn clear(&mut self) -> HoverTransitions<K> {
        self.update(None)
    }
}
