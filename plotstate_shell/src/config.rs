// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use plotstate_data::Category;
use plotstate_legend::LegendConfig;

/// Default name of the field holding each row's index label.
pub const DEFAULT_INDEX_KEY: &str = "name";

/// Chart-level configuration shared by every chart type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChartConfig {
    /// Series to draw, in legend and color order.
    ///
    /// Ignored by charts that take their categories from the data rows.
    pub categories: Vec<Category>,
    /// Field holding each row's index label (the x axis of area and bar charts).
    pub index: String,
    /// Whether the legend is drawn.
    pub show_legend: bool,
    /// Whether tooltips are drawn.
    pub show_tooltip: bool,
    /// Legend behavior.
    pub legend: LegendConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            index: String::from(DEFAULT_INDEX_KEY),
            show_legend: true,
            show_tooltip: true,
            legend: LegendConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Builder-style setter for [`ChartConfig::categories`].
    #[must_use]
    pub fn with_categories<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Category>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style setter for [`ChartConfig::index`].
    #[must_use]
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    /// Builder-style setter for [`ChartConfig::show_legend`].
    #[must_use]
    pub fn with_legend_shown(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    /// Builder-style setter for [`ChartConfig::show_tooltip`].
    #[must_use]
    pub fn with_tooltip_shown(mut self, show: bool) -> Self {
        self.show_tooltip = show;
        self
    }

    /// Builder-style setter for [`ChartConfig::legend`].
    #[must_use]
    pub fn with_legend(mut self, legend: LegendConfig) -> Self {
        self.legend = legend;
        self
    }
}
