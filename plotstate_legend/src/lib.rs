// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotstate Legend: headless state for a chart's category legend.
//!
//! A legend either wraps its entries onto several lines or, in *slider* mode,
//! lays them out in one horizontally scrollable strip with a pair of scroll
//! buttons. This crate owns the slider side of that:
//!
//! - [`ScrollState`]: which directions still have hidden content, derived
//!   from [`ScrollMetrics`] of the host's scroll container.
//! - [`LegendScrollController`]: press-and-hold and arrow-key page scrolling
//!   on a fixed cadence, with a settle delay before re-measuring after each
//!   smooth scroll.
//! - [`LegendEntry`] / [`visible_entries`]: the legend payload handed over by
//!   the rendering backend, minus hidden series.
//!
//! The controller is driven entirely by the host: it never reads a clock and
//! never spawns a timer. Hosts pass monotonic millisecond timestamps in and
//! ask [`LegendScrollController::next_deadline`] when to call back. Because the
//! timers are plain owned values, releasing a button, disabling a direction,
//! or dropping the controller cancels them for good.
//!
//! ## Keyboard
//!
//! With slider mode on, `ArrowLeft` / `ArrowRight` on the focused legend behave
//! exactly like holding the matching button. [`LegendScrollController::key_down`]
//! returns a [`KeyOutcome`] asking the host to prevent the default action and
//! stop propagation so the page (or an enclosing widget) does not scroll too.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod entry;
mod metrics;
pub mod timer;

pub use config::{
    DEFAULT_REPEAT_INTERVAL_MS, DEFAULT_SETTLE_DELAY_MS, LegendConfig, LegendConfigError,
};
pub use controller::{
    HoldSource, Key, KeyOutcome, LegendScrollController, ScrollContainer, ScrollPhase,
};
pub use entry::{LegendEntry, LegendKind, LegendLayout, visible_entries};
pub use metrics::{Direction, ScrollMetrics, ScrollState};
