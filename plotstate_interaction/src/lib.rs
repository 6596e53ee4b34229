// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotstate Interaction: the click, hover and tooltip state shared by every
//! chart type.
//!
//! - [`selection`]: the selection state machine. Legend clicks select a
//!   category, element clicks select a point, background clicks clear, and
//!   repeating a click on the active thing toggles it off.
//! - [`visual`]: pure emphasis and opacity derivation from the selection.
//! - [`tooltip`]: suppresses tooltip callbacks whose `(active, label)` pair
//!   did not change.
//! - [`hover`]: enter/leave transitions for the element under the pointer.
//!
//! None of these types know about a particular chart type or rendering
//! backend; `plotstate_shell` wires them to one.
//!
//! ## Minimal example
//!
//! ```
//! use plotstate_data::DataPoint;
//! use plotstate_interaction::selection::{EventType, PointClick, SelectionMachine};
//! use plotstate_interaction::visual::{Element, Emphasis, emphasis};
//!
//! let mut sel = SelectionMachine::new(true);
//! let jan = DataPoint::new().with("month", "Jan").with("sales", 10);
//! let feb = DataPoint::new().with("month", "Feb").with("sales", 12);
//!
//! sel.click_point(PointClick::new(jan.clone(), "sales", EventType::Bar));
//!
//! let style = |point: &DataPoint| emphasis(sel.active(), Element::Point { category: "sales", point });
//! assert_eq!(style(&jan), Emphasis::Normal);
//! assert_eq!(style(&feb), Emphasis::Dimmed);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod hover;
pub mod selection;
pub mod tooltip;
pub mod visual;
