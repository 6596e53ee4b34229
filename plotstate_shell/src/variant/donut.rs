// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use plotstate_data::{Category, DataPoint, Dataset, category_name};
use plotstate_interaction::selection::EventType;

use super::{ChartVariant, Resolved};
use crate::config::ChartConfig;
use crate::tooltip::TooltipItem;

/// Formats the sum shown in a donut's center.
pub type ValueFormatter = fn(f64) -> String;

/// Plain `Display` formatting.
#[must_use]
pub fn default_value_formatter(value: f64) -> String {
    format!("{value}")
}

/// Ring or full disc.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DonutVariant {
    /// A ring with room for a center label.
    #[default]
    Donut,
    /// A full disc; never shows a center label.
    Pie,
}

/// Donut-specific configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DonutConfig {
    /// Ring or disc.
    pub variant: DonutVariant,
    /// Whether the donut shows a center label.
    pub show_label: bool,
    /// Fixed center label; when absent the formatted total is shown.
    pub label: Option<String>,
    /// Field naming each slice.
    pub category_key: String,
    /// Field holding each slice's value.
    pub value_key: String,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            variant: DonutVariant::Donut,
            show_label: true,
            label: None,
            category_key: String::from("name"),
            value_key: String::from("value"),
        }
    }
}

impl DonutConfig {
    /// Builder-style setter for [`DonutConfig::variant`].
    #[must_use]
    pub fn with_variant(mut self, variant: DonutVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Builder-style setter for [`DonutConfig::label`].
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder-style setter for [`DonutConfig::show_label`].
    #[must_use]
    pub fn with_label_shown(mut self, show: bool) -> Self {
        self.show_label = show;
        self
    }

    /// Builder-style setter for the slice name and value fields.
    #[must_use]
    pub fn with_keys(mut self, category_key: impl Into<String>, value_key: impl Into<String>) -> Self {
        self.category_key = category_key.into();
        self.value_key = value_key.into();
        self
    }
}

/// Donut and pie charts: one slice per row.
///
/// Slices are named by a data field, so categories come from the rows
/// rather than from [`ChartConfig::categories`].
#[derive(Clone, Debug)]
pub struct Donut {
    /// Donut configuration.
    pub config: DonutConfig,
    /// Formatter for the default center label.
    pub value_formatter: ValueFormatter,
}

impl Default for Donut {
    fn default() -> Self {
        Self::new(DonutConfig::default())
    }
}

impl Donut {
    /// A donut using [`default_value_formatter`].
    #[must_use]
    pub fn new(config: DonutConfig) -> Self {
        Self {
            config,
            value_formatter: default_value_formatter,
        }
    }

    /// Builder-style setter for [`Donut::value_formatter`].
    #[must_use]
    pub fn with_value_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.value_formatter = formatter;
        self
    }

    /// The center label for `data`, if this chart shows one.
    #[must_use]
    pub fn center_label(&self, data: &Dataset) -> Option<String> {
        if self.config.variant != DonutVariant::Donut || !self.config.show_label {
            return None;
        }
        Some(match &self.config.label {
            Some(label) => label.clone(),
            None => (self.value_formatter)(data.sum(&self.config.value_key)),
        })
    }

    fn slice_name(&self, row: &DataPoint) -> Option<Category> {
        row.get(&self.config.category_key)
            .and_then(category_name)
            .map(Category::new)
    }
}

/// A slice reported by the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Sector {
    /// Row index.
    pub index: usize,
    /// The row record.
    pub payload: DataPoint,
}

impl ChartVariant for Donut {
    type Element = Sector;

    const EVENT_TYPE: EventType = EventType::Sector;

    fn categories(&self, _config: &ChartConfig, data: &Dataset) -> Vec<Category> {
        data.first_seen(&self.config.category_key)
    }

    fn resolve(&self, sector: &Sector) -> Option<Resolved> {
        Some(Resolved {
            category: self.slice_name(&sector.payload)?,
            point: sector.payload.clone(),
            index: sector.index,
        })
    }

    fn index_key<'a>(&'a self, _config: &'a ChartConfig) -> &'a str {
        &self.config.category_key
    }

    fn tooltip_category(&self, item: &TooltipItem) -> Category {
        self.slice_name(&item.payload)
            .unwrap_or_else(|| item.data_key.clone())
    }
}
