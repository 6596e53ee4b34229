// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotstate Shell: interactive area, bar and donut charts over a rendering
//! backend you supply.
//!
//! [`ChartShell`] composes the shared pieces:
//!
//! - `plotstate_data`: category colors and structural point identity.
//! - `plotstate_legend`: legend overflow scrolling.
//! - `plotstate_interaction`: selection, emphasis, hover and tooltip
//!   de-duplication.
//!
//! It then adapts them to one chart type through a [`ChartVariant`]:
//! [`Area`], [`Bar`] or [`Donut`]. The backend draws shapes and reports
//! element clicks, hovers, tooltip frames and its legend payload. The shell
//! answers with styling (color, opacity, cursor, markers, center label) and
//! reports selection changes to the application.
//!
//! ## Click routing
//!
//! Clicks are routed through a two-level tree (see [`propagation`]). Legend
//! items and elements stop propagation, so the chart root's "clear selection"
//! handler only sees clicks on the background. The root handler exists only
//! while something is selected, and nothing is clickable at all until a
//! value-change listener is registered.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use plotstate_data::{Category, DataPoint, Dataset};
//! use plotstate_shell::{Area, ChartConfig, ChartShell, Dot};
//!
//! let data = Dataset::new(vec![
//!     DataPoint::new().with("month", "Jan").with("sales", 10).with("profit", 3),
//!     DataPoint::new().with("month", "Feb").with("sales", 14).with("profit", 5),
//! ]);
//! let config = ChartConfig::default()
//!     .with_index("month")
//!     .with_categories(["sales", "profit"]);
//! let mut chart = ChartShell::<Area>::new(Area, config).unwrap().with_data(data.clone());
//!
//! let events = Rc::new(RefCell::new(Vec::new()));
//! let sink = events.clone();
//! chart.set_on_value_change(move |event| {
//!     sink.borrow_mut().push(event.map(|e| e.to_record()));
//! });
//!
//! let dot = Dot {
//!     category: Category::from("sales"),
//!     index: 1,
//!     payload: data.rows()[1].clone(),
//! };
//! assert!(chart.click_element(&dot).stop_propagation);
//! assert_eq!(chart.series_style("profit").opacity, 0.3);
//!
//! chart.click_background();
//! assert_eq!(events.borrow().len(), 2);
//! assert!(events.borrow()[1].is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
pub mod propagation;
mod shell;
pub mod tooltip;
pub mod variant;

pub use config::{ChartConfig, DEFAULT_INDEX_KEY};
pub use error::ConfigError;
pub use shell::{
    BarStyle, ChartShell, ClickResult, Cursor, ElementStyle, LegendItem, TooltipCallback,
    TooltipRenderer, ValueChangeCallback,
};
pub use variant::{
    Area, Bar, BarShape, ChartVariant, Donut, DonutConfig, DonutVariant, Dot, ElementKey,
    Resolved, Sector,
};
