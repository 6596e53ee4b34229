// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Horizontal scroll direction of the legend strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards `scroll_left == 0`.
    Left,
    /// Towards the end of the content.
    Right,
}

/// Raw measurements of the legend's scroll container.
///
/// All values are in the host's layout units (typically CSS or logical pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current horizontal scroll offset.
    pub scroll_left: f64,
    /// Full width of the scrollable content.
    pub scroll_width: f64,
    /// Visible width of the container.
    pub client_width: f64,
}

impl ScrollMetrics {
    /// Largest reachable `scroll_left`.
    #[must_use]
    pub fn max_scroll_left(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

/// Which directions can still scroll, derived from [`ScrollMetrics`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Content is hidden to the left.
    pub can_scroll_left: bool,
    /// Content is hidden to the right.
    pub can_scroll_right: bool,
}

impl ScrollState {
    /// Derives the state from a measurement.
    ///
    /// - `can_scroll_left = scroll_left > 0`
    /// - `can_scroll_right = scroll_width - client_width > scroll_left`
    #[must_use]
    pub fn from_metrics(metrics: &ScrollMetrics) -> Self {
        Self {
            can_scroll_left: metrics.scroll_left > 0.0,
            can_scroll_right: metrics.scroll_width - metrics.client_width > metrics.scroll_left,
        }
    }

    /// Returns `true` if scrolling towards `direction` would reveal content.
    #[must_use]
    pub fn can_scroll(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.can_scroll_left,
            Direction::Right => self.can_scroll_right,
        }
    }

    /// Returns `true` if any content is hidden.
    #[must_use]
    pub fn has_overflow(&self) -> bool {
        self.can_scroll_left || self.can_scroll_right
    }
}
