// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styling derived from the current selection.
//!
//! Everything here is a pure function of an [`ActiveSelection`] and the
//! element being drawn. Renderers call it for every element on every render;
//! nothing is cached or patched incrementally, so a selection change that
//! dims many elements at once can never leave one of them stale.

use plotstate_data::DataPoint;

use crate::selection::ActiveSelection;

/// Opacity of an element drawn normally.
pub const NORMAL_OPACITY: f64 = 1.0;

/// Opacity of a dimmed shape (area, bar, dot, sector).
pub const DIMMED_SHAPE_OPACITY: f64 = 0.3;

/// Opacity of a dimmed legend item.
pub const DIMMED_LEGEND_OPACITY: f64 = 0.4;

/// An element being styled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Element<'a> {
    /// A legend item for a category.
    LegendItem(&'a str),
    /// A whole series shape, such as an area's stroke and fill.
    Series(&'a str),
    /// One data element: a bar, a dot or a sector.
    Point {
        /// The element's series.
        category: &'a str,
        /// The element's record.
        point: &'a DataPoint,
    },
}

impl Element<'_> {
    /// The category the element belongs to.
    #[must_use]
    pub fn category(&self) -> &str {
        match *self {
            Self::LegendItem(category) | Self::Series(category) | Self::Point { category, .. } => {
                category
            }
        }
    }
}

/// Primary or secondary styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// Drawn normally.
    #[default]
    Normal,
    /// Drawn at reduced opacity.
    Dimmed,
}

impl Emphasis {
    /// Returns `true` for [`Emphasis::Dimmed`].
    #[must_use]
    pub fn is_dimmed(self) -> bool {
        self == Self::Dimmed
    }
}

/// Computes the emphasis of `element` under `selection`.
#[must_use]
pub fn emphasis(selection: &ActiveSelection, element: Element<'_>) -> Emphasis {
    let Some(active_category) = selection.active_category() else {
        return Emphasis::Normal;
    };
    let other_category = active_category.as_str() != element.category();
    let dimmed = match element {
        Element::LegendItem(_) => other_category,
        Element::Series(_) => other_category || selection.active_point().is_some(),
        Element::Point { category, point } => {
            other_category
                || (selection.active_point().is_some() && !selection.is_point(point, category))
        }
    };
    if dimmed {
        Emphasis::Dimmed
    } else {
        Emphasis::Normal
    }
}

/// Opacity to draw `element` with under `selection`.
#[must_use]
pub fn opacity(selection: &ActiveSelection, element: Element<'_>) -> f64 {
    match (emphasis(selection, element), element) {
        (Emphasis::Normal, _) => NORMAL_OPACITY,
        (Emphasis::Dimmed, Element::LegendItem(_)) => DIMMED_LEGEND_OPACITY,
        (Emphasis::Dimmed, _) => DIMMED_SHAPE_OPACITY,
    }
}

/// Whether an area chart draws a marker at `point` of `category`.
///
/// The active point always gets a marker. A flat series gets one at every
/// point, so that a series with a single value is still visible, unless the
/// series is dimmed.
#[must_use]
pub fn marker_visible(
    selection: &ActiveSelection,
    category: &str,
    point: &DataPoint,
    flat_series: bool,
) -> bool {
    if selection.is_point(point, category) {
        return true;
    }
    flat_series && !emphasis(selection, Element::Series(category)).is_dimmed()
}
