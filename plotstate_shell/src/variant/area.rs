// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use plotstate_data::{Category, DataPoint, Dataset};
use plotstate_interaction::selection::EventType;

use super::{ChartVariant, Resolved};

/// Area charts: one filled series per category, clickable point markers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Area;

/// A point marker reported by the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    /// Series the marker was drawn for.
    pub category: Category,
    /// Row index.
    pub index: usize,
    /// The row record.
    pub payload: DataPoint,
}

impl ChartVariant for Area {
    type Element = Dot;

    const EVENT_TYPE: EventType = EventType::Dot;

    fn resolve(&self, dot: &Dot) -> Option<Resolved> {
        Some(Resolved {
            category: dot.category.clone(),
            point: dot.payload.clone(),
            index: dot.index,
        })
    }

    fn flat_series(&self, data: &Dataset, category: &str) -> bool {
        data.has_single_distinct_value(category)
    }
}
