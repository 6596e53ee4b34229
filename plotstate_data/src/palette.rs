// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Palettes and the category → color assignment.
//!
//! ## Minimal example
//!
//! ```
//! use plotstate_data::{BaseColor, CategoryColorMap, Palette};
//!
//! let palette = Palette::new([BaseColor::Blue, BaseColor::Rose]).unwrap();
//! let colors = CategoryColorMap::build(["sales", "profit", "sales", "cost"], &palette);
//!
//! assert_eq!(colors.get("sales"), Some(&BaseColor::Blue));
//! assert_eq!(colors.get("profit"), Some(&BaseColor::Rose));
//! // Third distinct category wraps around the palette.
//! assert_eq!(colors.get("cost"), Some(&BaseColor::Blue));
//! ```

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::category::Category;

/// Errors raised when building a [`Palette`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// A palette needs at least one color to cycle through.
    #[error("palette must contain at least one color")]
    Empty,
}

/// Named theme colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[allow(missing_docs, reason = "Variants are self-describing color names")]
pub enum BaseColor {
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl BaseColor {
    /// Lowercase name, as used by class-based styling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slate => "slate",
            Self::Gray => "gray",
            Self::Zinc => "zinc",
            Self::Neutral => "neutral",
            Self::Stone => "stone",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Amber => "amber",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Green => "green",
            Self::Emerald => "emerald",
            Self::Teal => "teal",
            Self::Cyan => "cyan",
            Self::Sky => "sky",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::Purple => "purple",
            Self::Fuchsia => "fuchsia",
            Self::Pink => "pink",
            Self::Rose => "rose",
        }
    }
}

impl fmt::Display for BaseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme order used when no palette is configured.
pub const DEFAULT_PALETTE: [BaseColor; 22] = [
    BaseColor::Blue,
    BaseColor::Cyan,
    BaseColor::Sky,
    BaseColor::Indigo,
    BaseColor::Violet,
    BaseColor::Purple,
    BaseColor::Fuchsia,
    BaseColor::Slate,
    BaseColor::Gray,
    BaseColor::Zinc,
    BaseColor::Neutral,
    BaseColor::Stone,
    BaseColor::Red,
    BaseColor::Orange,
    BaseColor::Amber,
    BaseColor::Yellow,
    BaseColor::Lime,
    BaseColor::Green,
    BaseColor::Emerald,
    BaseColor::Teal,
    BaseColor::Pink,
    BaseColor::Rose,
];

/// A non-empty, ordered sequence of color keys.
///
/// `C` is whatever the styling layer uses to name a color; [`BaseColor`] is the
/// built-in choice.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Palette<C> {
    colors: Vec<C>,
}

impl<C> Palette<C> {
    /// Creates a palette, rejecting an empty color list.
    pub fn new(colors: impl IntoIterator<Item = C>) -> Result<Self, PaletteError> {
        let colors: Vec<C> = colors.into_iter().collect();
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { colors })
    }

    /// Number of colors. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The color used for the `index`-th category, wrapping around.
    #[must_use]
    pub fn cycle(&self, index: usize) -> &C {
        &self.colors[index % self.colors.len()]
    }

    /// The first color; used as the fallback for unknown categories.
    #[must_use]
    pub fn first(&self) -> &C {
        &self.colors[0]
    }

    /// The colors in order.
    #[must_use]
    pub fn colors(&self) -> &[C] {
        &self.colors
    }
}

impl Default for Palette<BaseColor> {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, C: serde::Deserialize<'de>> serde::Deserialize<'de> for Palette<C> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let colors = Vec::<C>::deserialize(deserializer)?;
        Self::new(colors).map_err(serde::de::Error::custom)
    }
}

/// Ordered mapping from [`Category`] to a color key.
///
/// The `i`-th distinct category, in first-seen order, gets `palette[i % len]`.
/// The map is built in one go and never patched: rebuild it whenever the
/// category list changes.
#[derive(Clone, Debug)]
pub struct CategoryColorMap<C> {
    entries: Vec<(Category, C)>,
    index: HashMap<Category, usize>,
    fallback: C,
}

impl<C: Clone> CategoryColorMap<C> {
    /// Assigns colors to `categories` in first-seen order. Repeats are ignored.
    pub fn build<I>(categories: I, palette: &Palette<C>) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut entries: Vec<(Category, C)> = Vec::new();
        let mut index: HashMap<Category, usize> = HashMap::new();
        for name in categories {
            let name = name.as_ref();
            if index.contains_key(name) {
                continue;
            }
            let slot = entries.len();
            let category = Category::new(name);
            index.insert(category.clone(), slot);
            entries.push((category, palette.cycle(slot).clone()));
        }
        Self {
            entries,
            index,
            fallback: palette.first().clone(),
        }
    }
}

impl<C> CategoryColorMap<C> {
    /// Returns the color assigned to `category`, if it is known.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&C> {
        self.index.get(category).map(|&slot| &self.entries[slot].1)
    }

    /// Returns the assigned color, or the palette's first color for an unknown category.
    ///
    /// Unknown categories show up when the backend reports a point from a
    /// dataset that was swapped mid-render; the chart keeps drawing.
    pub fn color_or_fallback(&self, category: &str) -> &C {
        match self.get(category) {
            Some(color) => color,
            None => {
                log::warn!("category `{category}` has no assigned color; using palette fallback");
                &self.fallback
            }
        }
    }

    /// Returns `true` if `category` was part of the build input.
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.index.contains_key(category)
    }

    /// Position of `category` in first-seen order.
    #[must_use]
    pub fn position(&self, category: &str) -> Option<usize> {
        self.index.get(category).copied()
    }

    /// Number of distinct categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no categories were given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(category, color)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&Category, &C)> + '_ {
        self.entries.iter().map(|(category, color)| (category, color))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> + '_ {
        self.entries.iter().map(|(category, _)| category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_palette_is_rejected() {
        assert_eq!(
            Palette::<BaseColor>::new(vec![]).unwrap_err(),
            PaletteError::Empty
        );
    }

    #[test]
    fn fallback_is_first_palette_color() {
        let palette = Palette::new([BaseColor::Emerald, BaseColor::Red]).unwrap();
        let colors = CategoryColorMap::build(["a"], &palette);
        assert_eq!(colors.color_or_fallback("missing"), &BaseColor::Emerald);
        assert!(!colors.contains("missing"));
    }

    #[test]
    fn default_palette_starts_with_blue() {
        let palette = Palette::default();
        assert_eq!(palette.first(), &BaseColor::Blue);
        assert_eq!(palette.len(), 22);
        assert_eq!(palette.cycle(22), &BaseColor::Blue);
    }

    #[test]
    fn positions_follow_first_seen_order() {
        let colors = CategoryColorMap::build(["b", "a", "b", "c"], &Palette::default());
        assert_eq!(colors.position("b"), Some(0));
        assert_eq!(colors.position("a"), Some(1));
        assert_eq!(colors.position("c"), Some(2));
        let names: Vec<&str> = colors.categories().map(Category::as_str).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}
