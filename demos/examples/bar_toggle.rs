// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart selection with backend geometry.
//!
//! The bars are laid out the way a backend with a flipped y axis reports
//! them, with negative heights. Each click prints the event the application
//! receives and the normalized rectangle and opacity of every bar.
//!
//! Run:
//! - `cargo run -p plotstate_demos --example bar_toggle`

use kurbo::Rect;
use plotstate_data::{Category, DataPoint, Dataset, Value};
use plotstate_demos::init_logging;
use plotstate_shell::{Bar, BarShape, ChartConfig, ChartShell};

const BAR_WIDTH: f64 = 24.0;
const BASELINE: f64 = 200.0;

fn main() {
    init_logging();

    let data = Dataset::new(vec![
        DataPoint::new().with("region", "North").with("units", 42).with("returns", 6),
        DataPoint::new().with("region", "South").with("units", 57).with("returns", 9),
    ]);
    let config = ChartConfig::default()
        .with_index("region")
        .with_categories(["units", "returns"]);
    let mut chart = match ChartShell::<Bar>::new(Bar, config) {
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

    let bars = layout(&data, chart.categories());

    println!("click South `units`");
    chart.click_element(&bars[2]);
    report(&chart, &bars);

    println!("click South `units` again");
    chart.click_element(&bars[2]);
    report(&chart, &bars);

    println!("click legend `returns`");
    chart.click_legend_item(&Category::from("returns"));
    report(&chart, &bars);
}

/// Grouped bars growing upward from the baseline, with negative heights.
fn layout(data: &Dataset, categories: &[Category]) -> Vec<BarShape> {
    let mut bars = Vec::new();
    for (index, row) in data.rows().iter().enumerate() {
        for (slot, category) in categories.iter().enumerate() {
            let value = row.get(category).cloned().unwrap_or(Value::Null);
            let height = value.as_f64().unwrap_or(0.0);
            let x = (index * categories.len() + slot) as f64 * (BAR_WIDTH + 4.0);
            bars.push(BarShape {
                category: category.clone(),
                index,
                payload: row.clone(),
                value,
                rect: Rect::new(x + BAR_WIDTH, BASELINE, x, BASELINE - height),
            });
        }
    }
    bars
}

fn report(chart: &ChartShell<Bar>, bars: &[BarShape]) {
    for bar in bars {
        let style = chart.bar_style(bar);
        let r = style.rect;
        println!(
            "  {} #{}: ({:.0}, {:.0})-({:.0}, {:.0}) {} opacity {}",
            bar.category, bar.index, r.x0, r.y0, r.x1, r.y1, style.style.color, style.style.opacity
        );
    }
}
