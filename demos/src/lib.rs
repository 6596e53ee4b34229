// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Plotstate demos.

use plotstate_legend::{ScrollContainer, ScrollMetrics};

/// Installs `env_logger`, showing Plotstate's debug output unless `RUST_LOG`
/// says otherwise.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("plotstate=debug,info"),
    )
    .format_timestamp_millis()
    .try_init();
}

/// A legend strip standing in for a real scroll container.
///
/// Scrolls land instantly and are clamped like a browser clamps `scrollLeft`.
#[derive(Clone, Debug)]
pub struct SimulatedStrip {
    /// Current metrics.
    pub metrics: ScrollMetrics,
    /// Width of the scroll-button gutter.
    pub gutter: f64,
}

impl SimulatedStrip {
    /// A strip of `content_width` shown through a `viewport_width` window.
    pub fn new(content_width: f64, viewport_width: f64, gutter: f64) -> Self {
        Self {
            metrics: ScrollMetrics {
                scroll_left: 0.0,
                scroll_width: content_width,
                client_width: viewport_width,
            },
            gutter,
        }
    }
}

impl ScrollContainer for SimulatedStrip {
    fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    fn gutter_width(&self) -> f64 {
        self.gutter
    }

    fn scroll_to(&mut self, left: f64) {
        self.metrics.scroll_left = left.clamp(0.0, self.metrics.max_scroll_left());
        log::info!("strip scrolled to {:.0}", self.metrics.scroll_left);
    }
}
