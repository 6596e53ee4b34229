// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use plotstate_data::{Category, DataPoint, Value};
use plotstate_interaction::selection::EventType;

use super::{ChartVariant, Resolved};

/// Field added to a bar's record to hold the bar's own value.
const BAR_VALUE_KEY: &str = "value";

/// Bar charts: one bar per row and category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bar;

/// A bar reported by the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct BarShape {
    /// Series the bar was drawn for.
    pub category: Category,
    /// Row index.
    pub index: usize,
    /// The row record.
    pub payload: DataPoint,
    /// The bar's value.
    pub value: Value,
    /// Geometry as the backend laid it out; width and height may be negative.
    pub rect: Rect,
}

impl ChartVariant for Bar {
    type Element = BarShape;

    const EVENT_TYPE: EventType = EventType::Bar;

    /// A bar's record is its row with the bar's value under `value`.
    fn resolve(&self, bar: &BarShape) -> Option<Resolved> {
        let mut point = bar.payload.clone();
        point.insert(BAR_VALUE_KEY, bar.value.clone());
        Some(Resolved {
            category: bar.category.clone(),
            point,
            index: bar.index,
        })
    }
}
