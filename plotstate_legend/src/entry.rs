// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use plotstate_data::Category;

/// Marker shape the rendering backend associates with a legend entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LegendKind {
    /// Line marker.
    Line,
    /// Filled square (the usual choice for areas and bars).
    #[default]
    Square,
    /// Filled rectangle.
    Rect,
    /// Filled circle.
    Circle,
    /// Hidden series: present in the backend payload but never drawn.
    None,
}

/// One legend entry as reported by the rendering backend.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegendEntry<C> {
    /// Series name.
    pub value: Category,
    /// Color key of the series.
    pub color: C,
    /// Marker kind.
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: LegendKind,
}

impl<C> LegendEntry<C> {
    /// Returns `false` for entries of kind [`LegendKind::None`].
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.kind != LegendKind::None
    }
}

/// Entries that should be drawn, in payload order.
pub fn visible_entries<C>(entries: &[LegendEntry<C>]) -> impl Iterator<Item = &LegendEntry<C>> {
    entries.iter().filter(|entry| entry.is_visible())
}

/// How the legend lays out its entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendLayout {
    /// A wrapping row of entries with no scroll affordance.
    #[default]
    Wrap,
    /// A single horizontally scrollable row with scroll buttons.
    Slider,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn hidden_entries_are_filtered() {
        let entries = vec![
            LegendEntry {
                value: Category::from("sales"),
                color: 0_u8,
                kind: LegendKind::Square,
            },
            LegendEntry {
                value: Category::from("baseline"),
                color: 1,
                kind: LegendKind::None,
            },
            LegendEntry {
                value: Category::from("profit"),
                color: 2,
                kind: LegendKind::Line,
            },
        ];
        let shown: Vec<&str> = visible_entries(&entries)
            .map(|e| e.value.as_str())
            .collect();
        assert_eq!(shown, vec!["sales", "profit"]);
    }
}
