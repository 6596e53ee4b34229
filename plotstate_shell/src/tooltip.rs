// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip frames as reported by the backend, and as handed to the application.

use alloc::string::String;
use alloc::vec::Vec;

use plotstate_data::{Category, DataPoint, Value};
use plotstate_legend::LegendKind;

/// One series under the pointer, as reported by the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipItem {
    /// Series key the backend drew the item for.
    pub data_key: Category,
    /// The series' value at this position.
    pub value: Value,
    /// The row record.
    pub payload: DataPoint,
    /// Marker kind; [`LegendKind::None`] items are hidden series.
    pub kind: LegendKind,
}

/// A tooltip frame: the backend sends one on every pointer move.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipFrame {
    /// Whether the pointer is over a data position.
    pub active: bool,
    /// Series under the pointer.
    pub payload: Vec<TooltipItem>,
    /// Index label under the pointer.
    pub label: Option<String>,
}

/// A cleaned tooltip row.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipEntry<C> {
    /// Series of the row.
    pub category: Category,
    /// Value of the series at this position.
    pub value: Value,
    /// Index label of the row, or null when the row lacks the index field.
    pub index: Value,
    /// Series color.
    pub color: C,
    /// The row record.
    pub payload: DataPoint,
}

/// What tooltip callbacks and renderers receive.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipProps<C> {
    /// Whether the pointer is over a data position.
    pub active: bool,
    /// Visible series under the pointer.
    pub payload: Vec<TooltipEntry<C>>,
    /// Index label under the pointer.
    pub label: Option<String>,
}

/// What to draw for a tooltip frame.
#[derive(Clone, Debug, PartialEq)]
pub enum TooltipContent<C, R> {
    /// The built-in tooltip with these props.
    Default(TooltipProps<C>),
    /// Output of the application's custom renderer.
    Custom(R),
}
