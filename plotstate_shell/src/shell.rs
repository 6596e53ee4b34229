// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;
use plotstate_data::{BaseColor, Category, CategoryColorMap, Dataset, Palette};
use plotstate_interaction::hover::{HoverState, HoverTransitions};
use plotstate_interaction::selection::{
    ActiveSelection, InteractionEvent, PointClick, SelectionMachine, ValueChange,
};
use plotstate_interaction::tooltip::{TooltipChangeNotifier, TooltipObservation};
use plotstate_interaction::visual::{self, Element, Emphasis};
use plotstate_legend::{LegendEntry, LegendKind, LegendScrollController, visible_entries};

use crate::config::ChartConfig;
use crate::error::ConfigError;
use crate::propagation::{self, ChartNode, Outcome};
use crate::tooltip::{TooltipContent, TooltipEntry, TooltipFrame, TooltipProps};
use crate::variant::{Area, Bar, BarShape, ChartVariant, Donut, Dot, ElementKey};

/// Receives every selection change; `None` means the selection was cleared.
pub type ValueChangeCallback = Box<dyn FnMut(Option<&InteractionEvent>)>;

/// Receives tooltip props whenever the `(active, label)` pair changes.
pub type TooltipCallback<C> = Box<dyn FnMut(&TooltipProps<C>)>;

/// Renders a custom tooltip.
pub type TooltipRenderer<C, R> = Box<dyn Fn(&TooltipProps<C>) -> R>;

/// Pointer cursor over data elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// The platform default.
    #[default]
    Default,
    /// A pointing hand: elements are clickable.
    Pointer,
}

/// Result of routing one click.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClickResult {
    /// The click was handled by a legend item or element; the host must not
    /// deliver it to enclosing handlers.
    pub stop_propagation: bool,
    /// The selection change that was reported, if any.
    pub change: Option<ValueChange>,
}

/// Derived styling of one element or series.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementStyle<C> {
    /// Series color.
    pub color: C,
    /// Primary or secondary styling.
    pub emphasis: Emphasis,
    /// Opacity matching `emphasis`.
    pub opacity: f64,
    /// Whether the pointer is over it (draw the backend's active shape).
    pub hovered: bool,
}

/// Derived styling of a bar, with normalized geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct BarStyle<C> {
    /// Bar rectangle with non-negative width and height.
    pub rect: Rect,
    /// Color and emphasis.
    pub style: ElementStyle<C>,
}

/// A legend item ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem<C> {
    /// Series name.
    pub category: Category,
    /// Series color.
    pub color: C,
    /// Primary or secondary styling.
    pub emphasis: Emphasis,
    /// Opacity matching `emphasis`.
    pub opacity: f64,
}

/// One interactive chart: shared selection, legend and tooltip state behind a
/// per-chart-type [`ChartVariant`].
///
/// The shell adapts rendering-backend callbacks (element clicks, hovers,
/// tooltip frames, the legend payload) to the neutral state machines and
/// derives per-element styling from them. It holds no selection logic of
/// its own.
///
/// `C` is the color key type and `R` is the output of a custom tooltip
/// renderer.
pub struct ChartShell<V, C = BaseColor, R = ()> {
    variant: V,
    config: ChartConfig,
    palette: Palette<C>,
    data: Dataset,
    categories: Vec<Category>,
    colors: CategoryColorMap<C>,
    selection: SelectionMachine,
    hover: HoverState<ElementKey>,
    tooltip: TooltipChangeNotifier,
    legend: LegendScrollController,
    legend_payload: Vec<LegendEntry<C>>,
    on_value_change: Option<ValueChangeCallback>,
    tooltip_callback: Option<TooltipCallback<C>>,
    custom_tooltip: Option<TooltipRenderer<C, R>>,
}

impl<V: fmt::Debug, C: fmt::Debug, R> fmt::Debug for ChartShell<V, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartShell")
            .field("variant", &self.variant)
            .field("config", &self.config)
            .field("categories", &self.categories)
            .field("selection", &self.selection)
            .field("legend", &self.legend)
            .field("on_value_change", &self.on_value_change.is_some())
            .field("tooltip_callback", &self.tooltip_callback.is_some())
            .field("custom_tooltip", &self.custom_tooltip.is_some())
            .finish_non_exhaustive()
    }
}

impl<V: ChartVariant, R> ChartShell<V, BaseColor, R> {
    /// Creates a chart with the default theme palette.
    pub fn new(variant: V, config: ChartConfig) -> Result<Self, ConfigError> {
        Self::with_palette(variant, config, Palette::default())
    }
}

impl<V: ChartVariant, C: Clone, R> ChartShell<V, C, R> {
    /// Creates a chart with a custom palette.
    pub fn with_palette(
        variant: V,
        config: ChartConfig,
        palette: Palette<C>,
    ) -> Result<Self, ConfigError> {
        config.legend.validate()?;
        let data = Dataset::default();
        let categories = variant.categories(&config, &data);
        let colors = CategoryColorMap::build(&categories, &palette);
        Ok(Self {
            legend: LegendScrollController::new(config.legend),
            variant,
            config,
            palette,
            data,
            categories,
            colors,
            selection: SelectionMachine::new(false),
            hover: HoverState::new(),
            tooltip: TooltipChangeNotifier::new(),
            legend_payload: Vec::new(),
            on_value_change: None,
            tooltip_callback: None,
            custom_tooltip: None,
        })
    }

    /// Creates a chart from a list of colors, rejecting an empty list.
    pub fn with_colors(
        variant: V,
        config: ChartConfig,
        colors: impl IntoIterator<Item = C>,
    ) -> Result<Self, ConfigError> {
        let palette = Palette::new(colors)?;
        Self::with_palette(variant, config, palette)
    }

    /// Builder-style variant of [`ChartShell::set_data`].
    #[must_use]
    pub fn with_data(mut self, data: Dataset) -> Self {
        self.set_data(data);
        self
    }

    /// The chart type adapter.
    #[must_use]
    pub fn variant(&self) -> &V {
        &self.variant
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Current dataset.
    #[must_use]
    pub fn data(&self) -> &Dataset {
        &self.data
    }

    /// Categories in legend and color order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Current category colors.
    #[must_use]
    pub fn colors(&self) -> &CategoryColorMap<C> {
        &self.colors
    }

    /// Current selection.
    #[must_use]
    pub fn active(&self) -> &ActiveSelection {
        self.selection.active()
    }

    /// The selection machine, for inspection.
    #[must_use]
    pub fn selection(&self) -> &SelectionMachine {
        &self.selection
    }

    /// The legend scroll controller.
    #[must_use]
    pub fn legend(&self) -> &LegendScrollController {
        &self.legend
    }

    /// The legend scroll controller, for forwarding pointer, key, resize and
    /// timer events from the host.
    pub fn legend_mut(&mut self) -> &mut LegendScrollController {
        &mut self.legend
    }

    /// Returns `true` when a value-change listener is registered.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.selection.is_interactive()
    }

    /// Cursor to show over data elements.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        if self.is_interactive() {
            Cursor::Pointer
        } else {
            Cursor::Default
        }
    }

    /// Whether the chart root currently has its "click to clear" handler.
    #[must_use]
    pub fn root_handles_clicks(&self) -> bool {
        self.selection.background_handler_attached()
    }

    /// Registers the value-change listener, which makes the chart interactive.
    pub fn set_on_value_change(
        &mut self,
        callback: impl FnMut(Option<&InteractionEvent>) + 'static,
    ) {
        self.on_value_change = Some(Box::new(callback));
        self.selection.set_interactive(true);
    }

    /// Removes the value-change listener. The chart becomes inert and its
    /// selection is dropped without notification.
    pub fn clear_on_value_change(&mut self) {
        self.on_value_change = None;
        self.selection.set_interactive(false);
    }

    /// Registers the tooltip-change listener.
    pub fn set_tooltip_callback(&mut self, callback: impl FnMut(&TooltipProps<C>) + 'static) {
        self.tooltip_callback = Some(Box::new(callback));
        self.tooltip.reset();
    }

    /// Replaces the built-in tooltip with a custom renderer.
    pub fn set_custom_tooltip(&mut self, render: impl Fn(&TooltipProps<C>) -> R + 'static) {
        self.custom_tooltip = Some(Box::new(render));
    }

    /// Replaces the dataset. Colors are rebuilt and selection and hover reset
    /// without notification.
    pub fn set_data(&mut self, data: Dataset) {
        self.data = data;
        self.rebuild();
    }

    /// Replaces the configured series list, with the same resets as
    /// [`ChartShell::set_data`].
    pub fn set_categories<I>(&mut self, categories: I)
    where
        I: IntoIterator,
        I::Item: Into<Category>,
    {
        self.config.categories = categories.into_iter().map(Into::into).collect();
        self.rebuild();
    }

    /// Replaces the palette and rebuilds colors. The selection is kept.
    pub fn set_palette(&mut self, palette: Palette<C>) {
        self.palette = palette;
        self.colors = CategoryColorMap::build(&self.categories, &self.palette);
    }

    /// Replaces the configuration.
    ///
    /// A changed series list resets the chart like [`ChartShell::set_categories`].
    pub fn set_config(&mut self, config: ChartConfig) -> Result<(), ConfigError> {
        config.legend.validate()?;
        self.legend.set_config(config.legend);
        let categories_changed = config.categories != self.config.categories;
        self.config = config;
        if categories_changed {
            self.rebuild();
        }
        Ok(())
    }

    /// Stores the legend payload reported by the backend.
    pub fn set_legend_payload(&mut self, entries: Vec<LegendEntry<C>>) {
        self.legend_payload = entries;
    }

    /// Routes a click on `node` through the chart and reports the resulting
    /// change to the value-change listener.
    pub fn click(&mut self, node: ChartNode<'_, V::Element>) -> ClickResult {
        let seq = propagation::path(node);
        let mut result = ClickResult::default();
        let variant = &self.variant;
        let data = &self.data;
        let selection = &mut self.selection;
        let stopped = propagation::run(&seq, &mut result, |d, out| {
            // Inert charts attach no handlers.
            if !selection.is_interactive() {
                return Outcome::Continue;
            }
            match d.node {
                ChartNode::LegendItem(category) => {
                    out.change = selection.click_category(category.clone());
                    Outcome::Stop
                }
                ChartNode::Element(element) => {
                    if let Some(resolved) = variant.resolve(element) {
                        let flat = variant.flat_series(data, &resolved.category);
                        let click =
                            PointClick::new(resolved.point, resolved.category, V::EVENT_TYPE)
                                .with_flat_series(flat);
                        out.change = selection.click_point(click);
                    } else {
                        log::warn!("clicked element has no series; selection unchanged");
                    }
                    Outcome::Stop
                }
                ChartNode::Root => {
                    if selection.background_handler_attached() {
                        out.change = selection.click_background();
                    }
                    Outcome::Continue
                }
            }
        });
        result.stop_propagation = stopped;
        if let Some(change) = &result.change
            && let Some(callback) = self.on_value_change.as_mut()
        {
            callback(change.event());
        }
        result
    }

    /// A legend item was clicked.
    pub fn click_legend_item(&mut self, category: &Category) -> ClickResult {
        self.click(ChartNode::LegendItem(category))
    }

    /// A data element was clicked.
    pub fn click_element(&mut self, element: &V::Element) -> ClickResult {
        self.click(ChartNode::Element(element))
    }

    /// The chart background was clicked.
    pub fn click_background(&mut self) -> ClickResult {
        self.click(ChartNode::Root)
    }

    /// The pointer moved onto `element`, or off every element.
    pub fn hover(&mut self, element: Option<&V::Element>) -> HoverTransitions<ElementKey> {
        let key = element
            .and_then(|element| self.variant.resolve(element))
            .map(|resolved| resolved.key());
        self.hover.update(key)
    }

    /// The hovered element's key.
    #[must_use]
    pub fn hovered(&self) -> Option<&ElementKey> {
        self.hover.current()
    }

    /// Handles a tooltip frame from the backend.
    ///
    /// The tooltip listener, if any, hears about the frame only when its
    /// `(active, label)` pair changed. Returns what to draw: nothing when
    /// tooltips are off or the pointer is not over data.
    pub fn tooltip_frame(&mut self, frame: TooltipFrame) -> Option<TooltipContent<C, R>> {
        let props = self.tooltip_props(frame);
        if let Some(callback) = self.tooltip_callback.as_mut() {
            let observation = TooltipObservation::new(props.active, props.label.clone());
            if self.tooltip.observe(&observation) {
                callback(&props);
            }
        }
        if !self.config.show_tooltip || !props.active {
            return None;
        }
        Some(match &self.custom_tooltip {
            Some(render) => TooltipContent::Custom(render(&props)),
            None => TooltipContent::Default(props),
        })
    }

    /// Color of `category`, falling back to the first palette color.
    #[must_use]
    pub fn color(&self, category: &str) -> &C {
        self.colors.color_or_fallback(category)
    }

    /// Styling of a whole series (an area's stroke and fill).
    #[must_use]
    pub fn series_style(&self, category: &str) -> ElementStyle<C> {
        let element = Element::Series(category);
        ElementStyle {
            color: self.color(category).clone(),
            emphasis: visual::emphasis(self.active(), element),
            opacity: visual::opacity(self.active(), element),
            hovered: self
                .hover
                .current()
                .is_some_and(|key| key.category.as_str() == category),
        }
    }

    /// Styling of a data element.
    #[must_use]
    pub fn element_style(&self, element: &V::Element) -> ElementStyle<C> {
        let Some(resolved) = self.variant.resolve(element) else {
            return ElementStyle {
                color: self.palette.first().clone(),
                emphasis: Emphasis::Normal,
                opacity: visual::NORMAL_OPACITY,
                hovered: false,
            };
        };
        let target = Element::Point {
            category: &resolved.category,
            point: &resolved.point,
        };
        ElementStyle {
            color: self.color(&resolved.category).clone(),
            emphasis: visual::emphasis(self.active(), target),
            opacity: visual::opacity(self.active(), target),
            hovered: self.hover.current() == Some(&resolved.key()),
        }
    }

    /// Legend items to draw, in order.
    ///
    /// Uses the backend's legend payload once one was reported, otherwise the
    /// chart's categories. Empty when the legend is hidden.
    #[must_use]
    pub fn legend_items(&self) -> Vec<LegendItem<C>> {
        if !self.config.show_legend {
            return Vec::new();
        }
        let active = self.active();
        let item = |category: &Category| LegendItem {
            category: category.clone(),
            color: self.color(category).clone(),
            emphasis: visual::emphasis(active, Element::LegendItem(category)),
            opacity: visual::opacity(active, Element::LegendItem(category)),
        };
        if self.legend_payload.is_empty() {
            self.categories.iter().map(item).collect()
        } else {
            visible_entries(&self.legend_payload)
                .map(|entry| item(&entry.value))
                .collect()
        }
    }

    /// Height to reserve for the legend given its last measured height.
    #[must_use]
    pub fn legend_height(&self, measured: Option<f64>) -> f64 {
        self.legend.config().legend_height(measured)
    }

    fn tooltip_props(&self, frame: TooltipFrame) -> TooltipProps<C> {
        let index_key = self.variant.index_key(&self.config);
        let payload = frame
            .payload
            .into_iter()
            .filter(|item| item.kind != LegendKind::None)
            .map(|item| {
                let category = self.variant.tooltip_category(&item);
                TooltipEntry {
                    color: self.color(&category).clone(),
                    index: item.payload.get(index_key).cloned().unwrap_or_default(),
                    value: item.value,
                    payload: item.payload,
                    category,
                }
            })
            .collect();
        TooltipProps {
            active: frame.active,
            payload,
            label: frame.label,
        }
    }

    fn rebuild(&mut self) {
        self.categories = self.variant.categories(&self.config, &self.data);
        self.colors = CategoryColorMap::build(&self.categories, &self.palette);
        if self.selection.clear() {
            log::debug!("chart data changed; selection reset");
        }
        self.hover.clear();
    }
}

impl<C: Clone, R> ChartShell<Area, C, R> {
    /// Whether to draw a marker for `dot`.
    #[must_use]
    pub fn marker_visible(&self, dot: &Dot) -> bool {
        let flat = self.variant.flat_series(&self.data, &dot.category);
        visual::marker_visible(self.active(), &dot.category, &dot.payload, flat)
    }
}

impl<C: Clone, R> ChartShell<Bar, C, R> {
    /// Styling and normalized geometry of `bar`.
    #[must_use]
    pub fn bar_style(&self, bar: &BarShape) -> BarStyle<C> {
        BarStyle {
            rect: bar.rect.abs(),
            style: self.element_style(bar),
        }
    }
}

impl<C: Clone, R> ChartShell<Donut, C, R> {
    /// Text for the donut's center, if shown.
    #[must_use]
    pub fn center_label(&self) -> Option<String> {
        self.variant.center_label(&self.data)
    }
}
