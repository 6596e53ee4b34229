// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use plotstate_data::PaletteError;
use plotstate_legend::LegendConfigError;

/// Errors raised while building a [`ChartShell`](crate::ChartShell).
///
/// Only construction can fail. Once a chart exists, every interaction path
/// degrades instead of erroring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The palette is unusable.
    #[error(transparent)]
    Palette(#[from] PaletteError),
    /// The legend timing is unusable.
    #[error(transparent)]
    Legend(#[from] LegendConfigError),
}
