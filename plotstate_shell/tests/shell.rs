// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `plotstate_shell` crate.
//!
//! Each test drives a chart the way a rendering backend would: element
//! clicks, background clicks, hovers and tooltip frames, and checks what the
//! application hears through its callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Rect;
use plotstate_data::{BaseColor, Category, DataPoint, Dataset, PaletteError, Value};
use plotstate_interaction::hover::HoverEvent;
use plotstate_interaction::selection::{ActiveSelection, ValueChange};
use plotstate_interaction::visual::Emphasis;
use plotstate_legend::{LegendConfig, LegendConfigError, LegendEntry, LegendKind};
use plotstate_shell::tooltip::{TooltipContent, TooltipFrame, TooltipItem};
use plotstate_shell::{
    Area, Bar, BarShape, ChartConfig, ChartShell, ConfigError, Cursor, Donut, DonutConfig,
    DonutVariant, Dot, ElementKey, Sector,
};

type Log = Rc<RefCell<Vec<Option<DataPoint>>>>;

fn listen<V: plotstate_shell::ChartVariant>(chart: &mut ChartShell<V>) -> Log {
    let log: Log = Rc::default();
    let sink = log.clone();
    chart.set_on_value_change(move |event| {
        sink.borrow_mut().push(event.map(|e| e.to_record()));
    });
    log
}

fn months(values: &[(&str, i32, i32)]) -> Dataset {
    values
        .iter()
        .map(|&(m, v, w)| DataPoint::new().with("m", m).with("v", v).with("w", w))
        .collect()
}

fn area(data: Dataset) -> ChartShell<Area> {
    let config = ChartConfig::default()
        .with_index("m")
        .with_categories(["v", "w"]);
    ChartShell::<Area>::new(Area, config)
        .unwrap()
        .with_data(data)
}

fn dot(data: &Dataset, category: &str, index: usize) -> Dot {
    Dot {
        category: Category::from(category),
        index,
        payload: data.rows()[index].clone(),
    }
}

#[test]
fn inert_chart_ignores_clicks() {
    let data = months(&[("Jan", 1, 2), ("Feb", 3, 4)]);
    let mut chart = area(data.clone());

    assert!(!chart.is_interactive());
    assert_eq!(chart.cursor(), Cursor::Default);

    let result = chart.click_element(&dot(&data, "v", 0));
    assert!(!result.stop_propagation);
    assert_eq!(result.change, None);
    assert!(chart.active().is_none());
    assert!(!chart.click_legend_item(&Category::from("v")).stop_propagation);
    assert!(!chart.root_handles_clicks());
}

#[test]
fn legend_click_is_not_cleared_by_the_root() {
    let data = months(&[("Jan", 1, 2), ("Feb", 3, 4)]);
    let mut chart = area(data);
    let log = listen(&mut chart);
    assert_eq!(chart.cursor(), Cursor::Pointer);

    let result = chart.click_legend_item(&Category::from("w"));
    assert!(result.stop_propagation);
    assert_eq!(chart.active(), &ActiveSelection::Category(Category::from("w")));
    assert!(chart.root_handles_clicks());

    let log = log.borrow();
    assert_eq!(log.len(), 1);
    let record = log[0].as_ref().unwrap();
    assert_eq!(record.get("eventType"), Some(&Value::from("category")));
    assert_eq!(record.get("categoryClicked"), Some(&Value::from("w")));
}

#[test]
fn background_click_clears_and_detaches() {
    let data = months(&[("Jan", 1, 2), ("Feb", 3, 4)]);
    let mut chart = area(data.clone());
    let log = listen(&mut chart);

    chart.click_element(&dot(&data, "v", 1));
    let result = chart.click_background();
    assert!(!result.stop_propagation);
    assert_eq!(result.change, Some(ValueChange::Cleared));
    assert!(!chart.root_handles_clicks());

    // Nothing selected: the root has no handler and nothing is emitted.
    assert_eq!(chart.click_background().change, None);
    assert_eq!(log.borrow().len(), 2);
    assert_eq!(log.borrow()[1], None);
}

#[test]
fn area_flat_series_collapses_onto_its_legend() {
    let data = months(&[("Jan", 10, 1), ("Feb", 10, 2)]);
    let mut chart = area(data.clone());
    let log = listen(&mut chart);

    chart.click_legend_item(&Category::from("v"));
    let result = chart.click_element(&dot(&data, "v", 1));
    assert_eq!(result.change, Some(ValueChange::Cleared));
    assert!(chart.active().is_none());
    assert_eq!(log.borrow().len(), 2);

    // `w` is not flat: the same gesture selects the point.
    chart.click_legend_item(&Category::from("w"));
    chart.click_element(&dot(&data, "w", 1));
    assert!(chart.active().is_point(&data.rows()[1], "w"));
}

#[test]
fn area_styles_follow_the_selection() {
    let data = months(&[("Jan", 10, 1), ("Feb", 10, 2)]);
    let mut chart = area(data.clone());
    listen(&mut chart);

    // `v` is flat, so its markers are drawn.
    assert!(chart.marker_visible(&dot(&data, "v", 0)));
    assert!(!chart.marker_visible(&dot(&data, "w", 0)));

    chart.click_element(&dot(&data, "w", 1));
    assert!(chart.marker_visible(&dot(&data, "w", 1)));
    assert!(!chart.marker_visible(&dot(&data, "w", 0)));
    assert!(!chart.marker_visible(&dot(&data, "v", 0)));

    assert_eq!(chart.series_style("v").opacity, 0.3);
    assert_eq!(chart.series_style("w").emphasis, Emphasis::Dimmed);
    let items = chart.legend_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].opacity, 0.4);
    assert_eq!(items[1].opacity, 1.0);
}

#[test]
fn data_change_resets_without_notifying() {
    let data = months(&[("Jan", 1, 2), ("Feb", 3, 4)]);
    let mut chart = area(data.clone());
    let log = listen(&mut chart);

    chart.click_element(&dot(&data, "v", 0));
    chart.hover(Some(&dot(&data, "v", 0)));
    chart.set_data(months(&[("Mar", 5, 6)]));

    assert!(chart.active().is_none());
    assert_eq!(chart.hovered(), None);
    assert_eq!(log.borrow().len(), 1);

    chart.click_legend_item(&Category::from("v"));
    chart.set_categories(["w", "v"]);
    assert!(chart.active().is_none());
    assert_eq!(chart.colors().get("w"), Some(&BaseColor::Blue));
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn unknown_category_falls_back_to_the_first_color() {
    let data = months(&[("Jan", 1, 2)]);
    let chart = area(data.clone());
    assert_eq!(chart.color("w"), &BaseColor::Cyan);
    assert_eq!(chart.color("gone"), &BaseColor::Blue);

    let stale = dot(&data, "gone", 0);
    assert_eq!(chart.element_style(&stale).color, BaseColor::Blue);
}

#[test]
fn hover_tracks_one_element() {
    let data = months(&[("Jan", 1, 2), ("Feb", 3, 4)]);
    let mut chart = area(data.clone());

    let enter = chart.hover(Some(&dot(&data, "v", 0)));
    let key = ElementKey {
        category: Category::from("v"),
        index: 0,
    };
    assert_eq!(enter.as_slice(), &[HoverEvent::Enter(key.clone())]);
    assert!(chart.element_style(&dot(&data, "v", 0)).hovered);
    assert!(!chart.element_style(&dot(&data, "v", 1)).hovered);

    let leave = chart.hover(None);
    assert_eq!(leave.as_slice(), &[HoverEvent::Leave(key)]);
}

fn bar(category: &str, value: f64, rect: Rect) -> BarShape {
    BarShape {
        category: Category::from(category),
        index: 0,
        payload: DataPoint::new().with("m", "Jan").with("v", value),
        value: Value::from(value),
        rect,
    }
}

#[test]
fn bar_clicks_toggle_and_carry_the_value() {
    let config = ChartConfig::default().with_index("m").with_categories(["v"]);
    let mut chart = ChartShell::<Bar>::new(Bar, config).unwrap();
    let log = listen(&mut chart);

    let shape = bar("v", 4.0, Rect::new(0.0, 0.0, 10.0, 40.0));
    chart.click_element(&shape);
    chart.click_element(&shape);

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    let record = log[0].as_ref().unwrap();
    assert_eq!(record.get("eventType"), Some(&Value::from("bar")));
    assert_eq!(record.get("value"), Some(&Value::from(4.0)));
    assert_eq!(log[1], None);
}

#[test]
fn bar_geometry_is_normalized() {
    let config = ChartConfig::default().with_categories(["v"]);
    let chart = ChartShell::<Bar>::new(Bar, config).unwrap();
    // A negative bar laid out with a negative height.
    let shape = bar("v", -3.0, Rect::new(10.0, 50.0, 20.0, 20.0));
    let style = chart.bar_style(&shape);
    assert_eq!(style.rect, Rect::new(10.0, 20.0, 20.0, 50.0));
    assert_eq!(style.style.opacity, 1.0);
}

fn slices() -> Dataset {
    Dataset::new(vec![
        DataPoint::new().with("name", "North").with("value", 120),
        DataPoint::new().with("name", "South").with("value", 80),
        DataPoint::new().with("name", "North").with("value", 5),
    ])
}

#[test]
fn donut_categories_come_from_the_rows() {
    let chart = ChartShell::<Donut>::new(Donut::default(), ChartConfig::default())
        .unwrap()
        .with_data(slices());
    assert_eq!(
        chart.categories(),
        &[Category::from("North"), Category::from("South")]
    );
    assert_eq!(chart.color("South"), &BaseColor::Cyan);
    assert_eq!(chart.center_label().as_deref(), Some("205"));
}

#[test]
fn pie_has_no_center_label() {
    let pie = Donut::new(DonutConfig::default().with_variant(DonutVariant::Pie));
    let chart = ChartShell::<Donut>::new(pie, ChartConfig::default())
        .unwrap()
        .with_data(slices());
    assert_eq!(chart.center_label(), None);
}

#[test]
fn sector_clicks_select_slices() {
    let data = slices();
    let mut chart = ChartShell::<Donut>::new(Donut::default(), ChartConfig::default())
        .unwrap()
        .with_data(data.clone());
    let log = listen(&mut chart);

    let south = Sector {
        index: 1,
        payload: data.rows()[1].clone(),
    };
    let north = Sector {
        index: 0,
        payload: data.rows()[0].clone(),
    };
    chart.click_element(&south);
    assert_eq!(chart.element_style(&north).opacity, 0.3);
    assert_eq!(chart.element_style(&south).opacity, 1.0);

    let log = log.borrow();
    let record = log[0].as_ref().unwrap();
    assert_eq!(record.get("eventType"), Some(&Value::from("sector")));
    assert_eq!(record.get("categoryClicked"), Some(&Value::from("South")));
}

#[test]
fn unnamed_sector_is_swallowed() {
    let mut chart = ChartShell::<Donut>::new(Donut::default(), ChartConfig::default()).unwrap();
    let log = listen(&mut chart);
    let result = chart.click_element(&Sector {
        index: 0,
        payload: DataPoint::new().with("value", 1),
    });
    assert!(result.stop_propagation);
    assert_eq!(result.change, None);
    assert!(log.borrow().is_empty());
}

fn frame(active: bool, label: &str) -> TooltipFrame {
    TooltipFrame {
        active,
        payload: vec![
            TooltipItem {
                data_key: Category::from("v"),
                value: Value::from(10),
                payload: DataPoint::new().with("m", label).with("v", 10),
                kind: LegendKind::Square,
            },
            TooltipItem {
                data_key: Category::from("hidden"),
                value: Value::from(0),
                payload: DataPoint::new().with("m", label),
                kind: LegendKind::None,
            },
        ],
        label: Some(label.into()),
    }
}

#[test]
fn tooltip_callback_hears_changes_only() {
    let mut chart = area(Dataset::default());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    chart.set_tooltip_callback(move |props| {
        sink.borrow_mut().push((props.active, props.label.clone(), props.payload.len()));
    });

    for (active, label) in [(true, "Jan"), (true, "Jan"), (true, "Feb"), (false, "Feb")] {
        chart.tooltip_frame(frame(active, label));
    }
    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0], (true, Some("Jan".into()), 1));
    assert_eq!(seen[2], (false, Some("Feb".into()), 1));
}

#[test]
fn tooltip_content_is_cleaned() {
    let mut chart = area(Dataset::default());
    let Some(TooltipContent::Default(props)) = chart.tooltip_frame(frame(true, "Jan")) else {
        panic!("expected the built-in tooltip");
    };
    assert_eq!(props.payload.len(), 1);
    let entry = &props.payload[0];
    assert_eq!(entry.category, "v");
    assert_eq!(entry.index, Value::from("Jan"));
    assert_eq!(entry.color, BaseColor::Blue);

    assert_eq!(chart.tooltip_frame(frame(false, "Jan")), None);
}

#[test]
fn tooltip_can_be_hidden_or_replaced() {
    let config = ChartConfig::default()
        .with_categories(["v"])
        .with_tooltip_shown(false);
    let mut hidden = ChartShell::<Area>::new(Area, config).unwrap();
    assert_eq!(hidden.tooltip_frame(frame(true, "Jan")), None);

    let config = ChartConfig::default().with_categories(["v"]);
    let mut custom = ChartShell::<Area, BaseColor, String>::new(Area, config).unwrap();
    custom.set_custom_tooltip(|props| format!("{} rows", props.payload.len()));
    assert_eq!(
        custom.tooltip_frame(frame(true, "Jan")),
        Some(TooltipContent::Custom("1 rows".into()))
    );
}

#[test]
fn legend_payload_hides_none_entries() {
    let mut chart = area(Dataset::default());
    chart.set_legend_payload(vec![
        LegendEntry {
            value: Category::from("w"),
            color: BaseColor::Cyan,
            kind: LegendKind::Square,
        },
        LegendEntry {
            value: Category::from("baseline"),
            color: BaseColor::Gray,
            kind: LegendKind::None,
        },
    ]);
    let items = chart.legend_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category, "w");

    let config = ChartConfig::default()
        .with_categories(["v"])
        .with_legend_shown(false);
    let hidden = ChartShell::<Area>::new(Area, config).unwrap();
    assert!(hidden.legend_items().is_empty());
}

#[test]
fn construction_rejects_bad_configuration() {
    let empty: [BaseColor; 0] = [];
    let err = ChartShell::<Area>::with_colors(Area, ChartConfig::default(), empty).unwrap_err();
    assert_eq!(err, ConfigError::Palette(PaletteError::Empty));

    let config =
        ChartConfig::default().with_legend(LegendConfig::default().with_timing(0, 400));
    let err = ChartShell::<Area>::new(Area, config).unwrap_err();
    assert_eq!(err, ConfigError::Legend(LegendConfigError::ZeroRepeatInterval));
}

#[test]
fn legend_height_uses_the_fallback_until_measured() {
    let chart = area(Dataset::default());
    assert_eq!(chart.legend_height(None), 60.0);
    assert_eq!(chart.legend_height(Some(24.0)), 44.0);
}

#[test]
fn removing_the_listener_makes_the_chart_inert() {
    let data = months(&[("Jan", 1, 2)]);
    let mut chart = area(data.clone());
    let log = listen(&mut chart);
    chart.click_element(&dot(&data, "v", 0));
    chart.clear_on_value_change();
    assert!(chart.active().is_none());
    assert!(!chart.click_element(&dot(&data, "v", 0)).stop_propagation);
    assert_eq!(log.borrow().len(), 1);
    assert_eq!(chart.cursor(), Cursor::Default);
}
