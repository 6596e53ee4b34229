// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area chart selection.
//!
//! Plays a scripted sequence of legend, point and background clicks against an
//! area chart and prints what the application would receive, plus the opacity
//! each series is drawn with afterwards.
//!
//! Run:
//! - `cargo run -p plotstate_demos --example area_selection`

use plotstate_data::{Category, DataPoint, Dataset};
use plotstate_demos::init_logging;
use plotstate_shell::{Area, ChartConfig, ChartShell, Dot};

fn main() {
    init_logging();

    let data = Dataset::new(vec![
        DataPoint::new().with("month", "Jan").with("sales", 120).with("quota", 100),
        DataPoint::new().with("month", "Feb").with("sales", 135).with("quota", 100),
        DataPoint::new().with("month", "Mar").with("sales", 128).with("quota", 100),
    ]);
    let config = ChartConfig::default()
        .with_index("month")
        .with_categories(["sales", "quota"]);
    let mut chart = match ChartShell::<Area>::new(Area, config) {
        Ok(chart) => chart.with_data(data.clone()),
        Err(err) => {
            eprintln!("invalid chart configuration: {err}");
            return;
        }
    };

    chart.set_on_value_change(|event| match event {
        Some(event) => println!(
            "  onValueChange: {}",
            serde_json::to_string(event).unwrap_or_default()
        ),
        None => println!("  onValueChange: null"),
    });

    let dot = |category: &str, index: usize| Dot {
        category: Category::from(category),
        index,
        payload: data.rows()[index].clone(),
    };

    println!("click legend `sales`");
    chart.click_legend_item(&Category::from("sales"));
    report(&chart);

    println!("click a point of the flat `quota` series while `sales` is active");
    chart.click_element(&dot("quota", 1));
    report(&chart);

    println!("click legend `quota`, then a `quota` point");
    chart.click_legend_item(&Category::from("quota"));
    chart.click_element(&dot("quota", 2));
    report(&chart);

    println!("click `sales` Feb twice");
    chart.click_element(&dot("sales", 1));
    chart.click_element(&dot("sales", 1));
    report(&chart);

    println!("click `sales` Mar, then the background");
    chart.click_element(&dot("sales", 2));
    chart.click_background();
    report(&chart);
}

fn report(chart: &ChartShell<Area>) {
    for category in chart.categories() {
        let style = chart.series_style(category);
        println!("  {category}: {} opacity {}", style.color, style.opacity);
    }
}
