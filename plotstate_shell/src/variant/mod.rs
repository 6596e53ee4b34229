// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-chart-type adapters.
//!
//! A [`ChartVariant`] knows the shape of the elements its rendering backend
//! reports and turns them into the series and record the shared selection
//! logic works with. It also decides which chart-specific rules apply, such
//! as the flat-series rule for area charts. It carries no selection state.

mod area;
mod bar;
mod donut;

pub use area::{Area, Dot};
pub use bar::{Bar, BarShape};
pub use donut::{Donut, DonutConfig, DonutVariant, Sector, ValueFormatter, default_value_formatter};

use alloc::vec::Vec;

use plotstate_data::{Category, DataPoint, Dataset};
use plotstate_interaction::selection::EventType;

use crate::config::ChartConfig;
use crate::tooltip::TooltipItem;

/// Identifies an element for hover tracking: its series and its row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementKey {
    /// Series of the element.
    pub category: Category,
    /// Row index of the element in the dataset.
    pub index: usize,
}

/// An element resolved to the selection vocabulary.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    /// Series the element belongs to.
    pub category: Category,
    /// Record compared against the active point.
    pub point: DataPoint,
    /// Row index of the element.
    pub index: usize,
}

impl Resolved {
    /// Hover key of the element.
    #[must_use]
    pub fn key(&self) -> ElementKey {
        ElementKey {
            category: self.category.clone(),
            index: self.index,
        }
    }
}

/// A chart type plugged into [`ChartShell`](crate::ChartShell).
pub trait ChartVariant {
    /// Element reported by the rendering backend for clicks and hovers.
    type Element;

    /// Event type emitted when one of this chart's elements is clicked.
    const EVENT_TYPE: EventType;

    /// Categories of the chart, in legend and color order.
    ///
    /// Defaults to the configured series list.
    fn categories(&self, config: &ChartConfig, data: &Dataset) -> Vec<Category> {
        let _ = data;
        config.categories.clone()
    }

    /// Resolves `element` to its series and record.
    ///
    /// Returns `None` when the element cannot be attributed to a series; such
    /// clicks are swallowed without changing the selection.
    fn resolve(&self, element: &Self::Element) -> Option<Resolved>;

    /// Whether clicks on `category` use the flat-series rule.
    fn flat_series(&self, data: &Dataset, category: &str) -> bool {
        let _ = (data, category);
        false
    }

    /// Field holding the index label shown in tooltips.
    fn index_key<'a>(&'a self, config: &'a ChartConfig) -> &'a str {
        &config.index
    }

    /// Series named by a tooltip item.
    fn tooltip_category(&self, item: &TooltipItem) -> Category {
        item.data_key.clone()
    }
}
