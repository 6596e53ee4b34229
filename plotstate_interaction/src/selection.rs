// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-driven selection of a category or a single data point.
//!
//! ## Transitions
//!
//! | Input | From | To | Emits |
//! |-------|------|----|-------|
//! | legend click `c` | `Category(c)` | `None` | [`ValueChange::Cleared`] |
//! | legend click `c` | anything else | `Category(c)` | category event |
//! | point click `p, c` | `Point(p, c)` | `None` | [`ValueChange::Cleared`] |
//! | point click `p, c` on a flat series | active category is `c` | `None` | [`ValueChange::Cleared`] |
//! | point click `p, c` | anything else | `Point(p, c)` | point event |
//! | background click | any selection | `None` | [`ValueChange::Cleared`] |
//! | background click | `None` | `None` | nothing |
//!
//! A machine built with `interactive = false` ignores every click and emits
//! nothing: with no listener there is nothing to select for.
//!
//! ## Minimal example
//!
//! ```
//! use plotstate_data::{Category, DataPoint};
//! use plotstate_interaction::selection::{
//!     ActiveSelection, EventType, PointClick, SelectionMachine, ValueChange,
//! };
//!
//! let mut sel = SelectionMachine::new(true);
//!
//! let change = sel.click_category(Category::from("sales")).unwrap();
//! assert_eq!(change.event().unwrap().event_type, EventType::Category);
//!
//! // Clicking the same legend item again clears the selection.
//! assert_eq!(sel.click_category(Category::from("sales")), Some(ValueChange::Cleared));
//! assert_eq!(sel.active(), &ActiveSelection::None);
//!
//! // Point selection.
//! let jan = DataPoint::new().with("month", "Jan").with("sales", 10);
//! sel.click_point(PointClick::new(jan.clone(), "sales", EventType::Dot));
//! assert!(sel.active().is_point(&jan, "sales"));
//! ```

use plotstate_data::{Category, DataPoint, records_equal};

/// The currently highlighted thing, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ActiveSelection {
    /// Nothing is highlighted.
    #[default]
    None,
    /// A whole category (series) is highlighted.
    Category(Category),
    /// One data point is highlighted; its category counts as the active one.
    Point {
        /// The point's record, compared structurally.
        point: DataPoint,
        /// The series the point belongs to.
        category: Category,
    },
}

impl ActiveSelection {
    /// Returns `true` when nothing is highlighted.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The active category, either selected directly or through a point.
    #[must_use]
    pub fn active_category(&self) -> Option<&Category> {
        match self {
            Self::None => None,
            Self::Category(category) | Self::Point { category, .. } => Some(category),
        }
    }

    /// The active point and its category.
    #[must_use]
    pub fn active_point(&self) -> Option<(&DataPoint, &Category)> {
        match self {
            Self::Point { point, category } => Some((point, category)),
            _ => None,
        }
    }

    /// Returns `true` if `point` in `category` is the active point.
    #[must_use]
    pub fn is_point(&self, point: &DataPoint, category: &str) -> bool {
        match self {
            Self::Point {
                point: active,
                category: active_category,
            } => active_category.as_str() == category && records_equal(active, point),
            _ => false,
        }
    }
}

/// What kind of element produced an [`InteractionEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EventType {
    /// A legend item.
    Category,
    /// An area/line point marker.
    Dot,
    /// A bar.
    Bar,
    /// A donut or pie sector.
    Sector,
}

impl EventType {
    /// Wire name of the event type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Dot => "dot",
            Self::Bar => "bar",
            Self::Sector => "sector",
        }
    }
}

/// Field name carrying the event type in [`InteractionEvent::to_record`].
pub const EVENT_TYPE_KEY: &str = "eventType";

/// Field name carrying the clicked category in [`InteractionEvent::to_record`].
pub const CATEGORY_CLICKED_KEY: &str = "categoryClicked";

/// A selection reported to the embedding application.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionEvent {
    /// What was clicked.
    pub event_type: EventType,
    /// The category that became active.
    pub category_clicked: Category,
    /// The clicked point's fields; empty for legend clicks.
    pub fields: DataPoint,
}

impl InteractionEvent {
    /// Flattens the event into `{eventType, categoryClicked, ...fields}`.
    ///
    /// Point fields are applied last, so a data column named `eventType` or
    /// `categoryClicked` wins over the metadata.
    #[must_use]
    pub fn to_record(&self) -> DataPoint {
        let mut record = DataPoint::new()
            .with(EVENT_TYPE_KEY, self.event_type.as_str())
            .with(CATEGORY_CLICKED_KEY, self.category_clicked.as_str());
        record.merge_from(&self.fields);
        record
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for InteractionEvent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

/// A change to report through `on_value_change`.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueChange {
    /// Something became active.
    Selected(InteractionEvent),
    /// The selection was cleared (reported as `null`).
    Cleared,
}

impl ValueChange {
    /// The event, or `None` for [`ValueChange::Cleared`].
    #[must_use]
    pub fn event(&self) -> Option<&InteractionEvent> {
        match self {
            Self::Selected(event) => Some(event),
            Self::Cleared => None,
        }
    }
}

/// A click on a concrete data element, already resolved to a point.
#[derive(Clone, Debug, PartialEq)]
pub struct PointClick {
    /// The element's record.
    pub point: DataPoint,
    /// The series the element belongs to.
    pub category: Category,
    /// Kind of element.
    pub event_type: EventType,
    /// Whether the flat-series rule applies to this click.
    ///
    /// When set and `category` is already the active category, the click
    /// counts as hitting the active point. Callers set it when their chart
    /// type uses the rule and the series has a single distinct value.
    pub flat_series: bool,
}

impl PointClick {
    /// A click with the flat-series rule off.
    #[must_use]
    pub fn new(point: DataPoint, category: impl Into<Category>, event_type: EventType) -> Self {
        Self {
            point,
            category: category.into(),
            event_type,
            flat_series: false,
        }
    }

    /// Builder-style setter for [`PointClick::flat_series`].
    #[must_use]
    pub fn with_flat_series(mut self, flat_series: bool) -> Self {
        self.flat_series = flat_series;
        self
    }
}

/// The shared selection state machine for area, bar and donut charts.
#[derive(Clone, Debug, Default)]
pub struct SelectionMachine {
    active: ActiveSelection,
    interactive: bool,
    revision: u64,
}

impl SelectionMachine {
    /// Creates a machine with nothing selected.
    ///
    /// `interactive` should be `true` only when someone listens for value
    /// changes; otherwise every click is ignored.
    #[must_use]
    pub const fn new(interactive: bool) -> Self {
        Self {
            active: ActiveSelection::None,
            interactive,
            revision: 0,
        }
    }

    /// Current selection.
    #[must_use]
    pub fn active(&self) -> &ActiveSelection {
        &self.active
    }

    /// Returns `true` if clicks are handled.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Turns click handling on or off. Turning it off clears the selection silently.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
        if !interactive {
            self.clear();
        }
    }

    /// Counter bumped whenever the selection changes.
    ///
    /// Renderers can compare it to decide whether derived styling is stale.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the chart root should carry a "click to clear" handler.
    ///
    /// Only interactive charts with an active selection have one.
    #[must_use]
    pub fn background_handler_attached(&self) -> bool {
        self.interactive && !self.active.is_none()
    }

    /// A legend item for `category` was clicked.
    pub fn click_category(&mut self, category: Category) -> Option<ValueChange> {
        if !self.interactive {
            return None;
        }
        if matches!(&self.active, ActiveSelection::Category(active) if *active == category) {
            self.set(ActiveSelection::None);
            return Some(ValueChange::Cleared);
        }
        let event = InteractionEvent {
            event_type: EventType::Category,
            category_clicked: category.clone(),
            fields: DataPoint::new(),
        };
        self.set(ActiveSelection::Category(category));
        Some(ValueChange::Selected(event))
    }

    /// A data element was clicked.
    pub fn click_point(&mut self, click: PointClick) -> Option<ValueChange> {
        if !self.interactive {
            return None;
        }
        let already_active = self.active.is_point(&click.point, &click.category);
        let flat_series_hit =
            click.flat_series && self.active.active_category() == Some(&click.category);
        if already_active || flat_series_hit {
            self.set(ActiveSelection::None);
            return Some(ValueChange::Cleared);
        }
        let event = InteractionEvent {
            event_type: click.event_type,
            category_clicked: click.category.clone(),
            fields: click.point.clone(),
        };
        self.set(ActiveSelection::Point {
            point: click.point,
            category: click.category,
        });
        Some(ValueChange::Selected(event))
    }

    /// The chart background was clicked (no element or legend item was hit).
    pub fn click_background(&mut self) -> Option<ValueChange> {
        if !self.background_handler_attached() {
            return None;
        }
        self.set(ActiveSelection::None);
        Some(ValueChange::Cleared)
    }

    /// Clears the selection without emitting. Returns `true` if anything changed.
    pub fn clear(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.set(ActiveSelection::None);
        true
    }

    fn set(&mut self, next: ActiveSelection) {
        log::debug!("selection: {:?} -> {:?}", self.active, next);
        self.active = next;
        self.revision = self.revision.wrapping_add(1);
    }
}
