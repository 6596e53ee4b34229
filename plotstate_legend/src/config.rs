// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::timer::Millis;

/// Default cadence of press-and-hold scrolling.
pub const DEFAULT_REPEAT_INTERVAL_MS: Millis = 300;

/// Default wait after a smooth scroll before re-measuring.
pub const DEFAULT_SETTLE_DELAY_MS: Millis = 400;

/// Errors raised by [`LegendConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LegendConfigError {
    /// The repeat interval must be positive.
    #[error("legend repeat interval must be at least 1 ms")]
    ZeroRepeatInterval,
    /// The settle delay must be positive.
    #[error("legend settle delay must be at least 1 ms")]
    ZeroSettleDelay,
}

/// Legend behavior and sizing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LegendConfig {
    /// Lay overflowing legends out as a horizontally scrollable strip.
    ///
    /// When `false` the legend wraps and has no scroll affordance.
    pub enable_slider: bool,
    /// Cadence of page scrolls while a button or arrow key is held.
    pub repeat_interval_ms: Millis,
    /// Delay after a page scroll before scroll state is recomputed.
    pub settle_delay_ms: Millis,
    /// Space added below the measured legend height.
    pub height_padding: f64,
    /// Height reserved before the legend has been measured.
    pub fallback_height: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            enable_slider: false,
            repeat_interval_ms: DEFAULT_REPEAT_INTERVAL_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            height_padding: 20.0,
            fallback_height: 60.0,
        }
    }
}

impl LegendConfig {
    /// Builder-style setter for [`LegendConfig::enable_slider`].
    #[must_use]
    pub fn with_slider(mut self, enable: bool) -> Self {
        self.enable_slider = enable;
        self
    }

    /// Builder-style setter for both timer durations.
    #[must_use]
    pub fn with_timing(mut self, repeat_interval_ms: Millis, settle_delay_ms: Millis) -> Self {
        self.repeat_interval_ms = repeat_interval_ms;
        self.settle_delay_ms = settle_delay_ms;
        self
    }

    /// Checks the timer durations.
    pub fn validate(&self) -> Result<(), LegendConfigError> {
        if self.repeat_interval_ms == 0 {
            return Err(LegendConfigError::ZeroRepeatInterval);
        }
        if self.settle_delay_ms == 0 {
            return Err(LegendConfigError::ZeroSettleDelay);
        }
        Ok(())
    }

    /// Height to reserve for the legend given its last measured height.
    #[must_use]
    pub fn legend_height(&self, measured: Option<f64>) -> f64 {
        match measured {
            Some(h) => h + self.height_padding,
            None => self.fallback_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_timing_constants() {
        let c = LegendConfig::default();
        assert!(!c.enable_slider);
        assert_eq!(c.repeat_interval_ms, 300);
        assert_eq!(c.settle_delay_ms, 400);
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn zero_timings_are_rejected() {
        let c = LegendConfig::default().with_timing(0, 400);
        assert_eq!(c.validate(), Err(LegendConfigError::ZeroRepeatInterval));
        let c = LegendConfig::default().with_timing(300, 0);
        assert_eq!(c.validate(), Err(LegendConfigError::ZeroSettleDelay));
    }

    #[test]
    fn height_uses_padding_or_fallback() {
        let c = LegendConfig::default();
        assert_eq!(c.legend_height(None), 60.0);
        assert_eq!(c.legend_height(Some(32.0)), 52.0);
    }
}
