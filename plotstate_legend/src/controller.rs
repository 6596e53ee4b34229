// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press-and-hold page scrolling for an overflowing legend strip.
//!
//! ## Usage
//!
//! 1) Call [`LegendScrollController::remeasure`] on mount, on resize, on native
//!    scroll events, and whenever the legend content changes.
//! 2) Forward scroll-button pointer presses to [`LegendScrollController::pointer_down`]
//!    / [`LegendScrollController::pointer_up`], and key events to
//!    [`LegendScrollController::key_down`] / [`LegendScrollController::key_up`].
//! 3) Wake up at [`LegendScrollController::next_deadline`] and call
//!    [`LegendScrollController::advance`] with the current time.
//! 4) Call [`LegendScrollController::teardown`] when the legend unmounts (dropping
//!    the controller does the same).
//!
//! ## Minimal example
//!
//! ```
//! use plotstate_legend::{
//!     Direction, LegendConfig, LegendScrollController, ScrollContainer, ScrollMetrics,
//! };
//!
//! struct Strip(ScrollMetrics);
//!
//! impl ScrollContainer for Strip {
//!     fn metrics(&self) -> ScrollMetrics { self.0 }
//!     fn gutter_width(&self) -> f64 { 0.0 }
//!     fn scroll_to(&mut self, left: f64) {
//!         self.0.scroll_left = left.clamp(0.0, self.0.max_scroll_left());
//!     }
//! }
//!
//! let mut strip = Strip(ScrollMetrics { scroll_left: 0.0, scroll_width: 500.0, client_width: 200.0 });
//! let mut legend = LegendScrollController::new(LegendConfig::default().with_slider(true));
//! legend.remeasure(&strip);
//! assert!(legend.state().can_scroll_right);
//!
//! // Press: one page immediately, then one per 300 ms tick.
//! legend.pointer_down(Direction::Right, 0, &mut strip);
//! assert_eq!(strip.0.scroll_left, 200.0);
//!
//! // Release before the first tick: nothing else fires.
//! legend.pointer_up();
//! legend.advance(1_000, &mut strip);
//! assert_eq!(strip.0.scroll_left, 200.0);
//! ```

use crate::config::LegendConfig;
use crate::entry::LegendLayout;
use crate::metrics::{Direction, ScrollMetrics, ScrollState};
use crate::timer::{Interval, Millis, Timeouts};

/// The scrollable element the legend lives in.
///
/// Implemented by the host over whatever it renders into.
pub trait ScrollContainer {
    /// Current measurements.
    fn metrics(&self) -> ScrollMetrics;

    /// Width of the fixed scroll-button gutter that overlaps the strip.
    fn gutter_width(&self) -> f64;

    /// Starts a smooth scroll to `left`.
    ///
    /// The host may clamp; the controller re-measures once the scroll settles.
    fn scroll_to(&mut self, left: f64);
}

/// What started the current hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoldSource {
    /// A scroll button is held down.
    Pointer,
    /// An arrow key is held down.
    Key,
}

/// Coarse state of the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollPhase {
    /// Nothing is held.
    #[default]
    Idle,
    /// A left button or `ArrowLeft` is held.
    ScrollingLeft,
    /// A right button or `ArrowRight` is held.
    ScrollingRight,
}

/// Keys the legend cares about, as mapped by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Anything else.
    Other,
}

impl Key {
    fn direction(self) -> Option<Direction> {
        match self {
            Self::ArrowLeft => Some(Direction::Left),
            Self::ArrowRight => Some(Direction::Right),
            Self::Other => None,
        }
    }
}

/// What the host should do with a key event after the legend has seen it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Suppress the platform default (page scrolling).
    pub prevent_default: bool,
    /// Do not deliver the event to ancestor handlers.
    pub stop_propagation: bool,
}

impl KeyOutcome {
    /// The legend consumed the key.
    pub const HANDLED: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };

    /// The legend ignored the key.
    pub const IGNORED: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };
}

#[derive(Clone, Copy, Debug)]
struct Hold {
    direction: Direction,
    source: HoldSource,
    repeat: Interval,
}

/// State machine for one legend strip.
///
/// The controller owns every timer it starts: the press-and-hold repeat and
/// the post-scroll settle timeouts. [`LegendScrollController::teardown`] is
/// the single place they are cancelled.
#[derive(Debug)]
pub struct LegendScrollController {
    config: LegendConfig,
    state: ScrollState,
    hold: Option<Hold>,
    settle: Timeouts,
}

impl LegendScrollController {
    /// Creates an idle controller. Nothing is measured yet, so nothing overflows.
    #[must_use]
    pub fn new(config: LegendConfig) -> Self {
        Self {
            config,
            state: ScrollState::default(),
            hold: None,
            settle: Timeouts::new(),
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &LegendConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// Turning the slider off stops any hold and drops pending timers.
    pub fn set_config(&mut self, config: LegendConfig) {
        self.config = config;
        if !config.enable_slider {
            self.teardown();
        }
    }

    /// Last computed scroll state.
    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ScrollPhase {
        match self.hold {
            None => ScrollPhase::Idle,
            Some(Hold {
                direction: Direction::Left,
                ..
            }) => ScrollPhase::ScrollingLeft,
            Some(Hold {
                direction: Direction::Right,
                ..
            }) => ScrollPhase::ScrollingRight,
        }
    }

    /// Returns `true` when slider mode is on and the content overflows.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.config.enable_slider && self.state.has_overflow()
    }

    /// Layout the legend should use right now.
    #[must_use]
    pub fn layout(&self) -> LegendLayout {
        if self.is_active() {
            LegendLayout::Slider
        } else {
            LegendLayout::Wrap
        }
    }

    /// Returns `true` if the scroll button for `direction` should be disabled.
    #[must_use]
    pub fn is_disabled(&self, direction: Direction) -> bool {
        !self.is_active() || !self.state.can_scroll(direction)
    }

    /// Recomputes [`ScrollState`] from the container.
    ///
    /// A held direction that can no longer scroll stops immediately.
    pub fn remeasure<C: ScrollContainer + ?Sized>(&mut self, container: &C) {
        self.state = ScrollState::from_metrics(&container.metrics());
        if let Some(hold) = self.hold
            && self.is_disabled(hold.direction)
        {
            log::debug!("legend scroll {:?} disabled while held; stopping", hold.direction);
            self.hold = None;
        }
    }

    /// A scroll button was pressed.
    ///
    /// Scrolls one page right away and keeps scrolling on every repeat tick
    /// until [`LegendScrollController::pointer_up`]. Returns `false` if the
    /// direction is disabled.
    pub fn pointer_down<C: ScrollContainer + ?Sized>(
        &mut self,
        direction: Direction,
        now: Millis,
        container: &mut C,
    ) -> bool {
        self.press(direction, HoldSource::Pointer, now, container)
    }

    /// The scroll button was released. Safe to call when nothing is held.
    pub fn pointer_up(&mut self) {
        self.release(HoldSource::Pointer);
    }

    /// A key went down while the legend had focus.
    ///
    /// Arrow keys scroll like the matching button and must not reach ancestors.
    /// Auto-repeated key-downs for an already held arrow are absorbed.
    pub fn key_down<C: ScrollContainer + ?Sized>(
        &mut self,
        key: Key,
        now: Millis,
        container: &mut C,
    ) -> KeyOutcome {
        if !self.config.enable_slider {
            return KeyOutcome::IGNORED;
        }
        let Some(direction) = key.direction() else {
            return KeyOutcome::IGNORED;
        };
        let already_held = matches!(
            self.hold,
            Some(Hold { direction: d, source: HoldSource::Key, .. }) if d == direction
        );
        if !already_held {
            self.press(direction, HoldSource::Key, now, container);
        }
        KeyOutcome::HANDLED
    }

    /// A key went up while the legend had focus.
    pub fn key_up(&mut self, key: Key) -> KeyOutcome {
        if !self.config.enable_slider || key.direction().is_none() {
            return KeyOutcome::IGNORED;
        }
        self.release(HoldSource::Key);
        KeyOutcome::HANDLED
    }

    /// Earliest time [`LegendScrollController::advance`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        let tick = self.hold.map(|h| h.repeat.due());
        match (tick, self.settle.earliest()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fires every timer that is due at `now`, in time order.
    ///
    /// Settle timeouts run before a repeat tick due at the same instant, so the
    /// tick sees fresh measurements. Returns the number of page scrolls issued.
    pub fn advance<C: ScrollContainer + ?Sized>(&mut self, now: Millis, container: &mut C) -> usize {
        let mut scrolls = 0;
        loop {
            let settle = self.settle.earliest().filter(|&t| t <= now);
            let tick = self.hold.map(|h| h.repeat.due()).filter(|&t| t <= now);
            match (settle, tick) {
                (Some(s), t) if t.is_none_or(|t| s <= t) => {
                    self.settle.pop_due(s);
                    self.remeasure(container);
                }
                (_, Some(_)) => {
                    let Some(hold) = self.hold.as_mut() else {
                        break;
                    };
                    let at = hold.repeat.fire();
                    let direction = hold.direction;
                    if self.is_disabled(direction) {
                        log::debug!("legend scroll {direction:?} disabled at tick; stopping");
                        self.hold = None;
                    } else if self.scroll_page(direction, at, container) {
                        scrolls += 1;
                    }
                }
                _ => break,
            }
        }
        scrolls
    }

    /// Cancels the hold and every pending timer. Idempotent.
    pub fn teardown(&mut self) {
        if self.hold.is_some() || !self.settle.is_empty() {
            log::debug!(
                "legend teardown: cancelling hold={} settle_timers={}",
                self.hold.is_some(),
                self.settle.len()
            );
        }
        self.hold = None;
        self.settle.clear();
    }

    fn press<C: ScrollContainer + ?Sized>(
        &mut self,
        direction: Direction,
        source: HoldSource,
        now: Millis,
        container: &mut C,
    ) -> bool {
        if self.is_disabled(direction) {
            return false;
        }
        log::debug!("legend scroll {direction:?} started by {source:?}");
        self.scroll_page(direction, now, container);
        self.hold = Some(Hold {
            direction,
            source,
            repeat: Interval::start(now, self.config.repeat_interval_ms),
        });
        true
    }

    fn release(&mut self, source: HoldSource) {
        if let Some(hold) = self.hold
            && hold.source == source
        {
            log::debug!("legend scroll {:?} released", hold.direction);
            self.hold = None;
        }
    }

    /// Issues one page scroll and arms its settle timeout.
    fn scroll_page<C: ScrollContainer + ?Sized>(
        &mut self,
        direction: Direction,
        now: Millis,
        container: &mut C,
    ) -> bool {
        let metrics = container.metrics();
        let page = metrics.client_width - container.gutter_width();
        if page <= 0.0 {
            return false;
        }
        let target = match direction {
            Direction::Left => metrics.scroll_left - page,
            Direction::Right => metrics.scroll_left + page,
        };
        container.scroll_to(target);
        self.settle
            .arm(now.saturating_add(self.config.settle_delay_ms.max(1)));
        true
    }
}

impl Default for LegendScrollController {
    fn default() -> Self {
        Self::new(LegendConfig::default())
    }
}

impl Drop for LegendScrollController {
    fn drop(&mut self) {
        self.teardown();
    }
}
