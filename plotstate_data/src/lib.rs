// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotstate Data: the data vocabulary shared by the chart interaction crates.
//!
//! Charts are drawn from a [`Dataset`] of row records ([`DataPoint`]), with one
//! or more named series ([`Category`]). This crate provides:
//!
//! - [`Value`] and [`DataPoint`]: plain data with *structural* identity.
//! - [`deep_equal`] / [`records_equal`]: the equality used to decide whether a
//!   clicked shape is the active one. Mismatched key sets compare unequal,
//!   nothing panics.
//! - [`Palette`] and [`CategoryColorMap`]: stable color assignment in
//!   first-seen category order, cycling through the palette.
//! - [`Dataset`] queries such as the flat-series rule
//!   ([`Dataset::has_single_distinct_value`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use plotstate_data::{DataPoint, Dataset, deep_equal, Value};
//!
//! let data = Dataset::new(vec![
//!     DataPoint::new().with("month", "Jan").with("sales", 10),
//!     DataPoint::new().with("month", "Feb").with("sales", 10),
//! ]);
//!
//! // The sales series never changes value.
//! assert!(data.has_single_distinct_value("sales"));
//!
//! // Identity is structural, not positional.
//! let clicked = DataPoint::new().with("month", "Jan").with("sales", 10);
//! assert_eq!(data.get(0), Some(&clicked));
//! assert!(!deep_equal(&Value::from(1), &Value::from("1")));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod category;
mod dataset;
mod equal;
mod palette;
mod value;

pub use category::Category;
pub use dataset::{Dataset, category_name};
pub use equal::{deep_equal, points_equal, records_equal};
pub use palette::{BaseColor, CategoryColorMap, DEFAULT_PALETTE, Palette, PaletteError};
pub use value::{DataPoint, Value};
