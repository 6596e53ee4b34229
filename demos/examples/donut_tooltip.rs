// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Donut chart tooltips and center label.
//!
//! Feeds a stream of pointer-move tooltip frames into a donut chart and shows
//! that the tooltip callback only fires when the hovered slice changes.
//!
//! Run:
//! - `cargo run -p plotstate_demos --example donut_tooltip`

use plotstate_data::{Category, DataPoint, Dataset, Value};
use plotstate_demos::init_logging;
use plotstate_legend::LegendKind;
use plotstate_shell::tooltip::{TooltipContent, TooltipFrame, TooltipItem};
use plotstate_shell::{ChartConfig, ChartShell, Donut, DonutConfig};

fn main() {
    init_logging();

    let data = Dataset::new(vec![
        DataPoint::new().with("city", "Lisbon").with("visits", 420),
        DataPoint::new().with("city", "Porto").with("visits", 310),
        DataPoint::new().with("city", "Faro").with("visits", 95),
    ]);
    let donut = Donut::new(DonutConfig::default().with_keys("city", "visits"))
        .with_value_formatter(|v| format!("{v:.0} visits"));
    let mut chart = match ChartShell::<Donut>::new(donut, ChartConfig::default()) {
        Ok(chart) => chart.with_data(data.clone()),
        Err(err) => {
            eprintln!("invalid chart configuration: {err}");
            return;
        }
    };
    println!("center label: {:?}", chart.center_label());

    chart.set_tooltip_callback(|props| {
        let names: Vec<&str> = props.payload.iter().map(|e| e.category.as_str()).collect();
        println!("  tooltipCallback: active={} slices={names:?}", props.active);
    });

    let frame = |row: Option<usize>| match row {
        Some(row) => {
            let payload = data.rows()[row].clone();
            let label = payload.get("city").and_then(Value::as_str).map(String::from);
            TooltipFrame {
                active: true,
                payload: vec![TooltipItem {
                    data_key: Category::from("visits"),
                    value: payload.get("visits").cloned().unwrap_or_default(),
                    payload,
                    kind: LegendKind::Circle,
                }],
                label,
            }
        }
        None => TooltipFrame::default(),
    };

    // Pointer moves: three frames over Lisbon, two over Porto, then off the chart.
    for row in [Some(0), Some(0), Some(0), Some(1), Some(1), None] {
        match chart.tooltip_frame(frame(row)) {
            Some(TooltipContent::Default(props)) => {
                for entry in &props.payload {
                    println!(
                        "draw tooltip: {} = {:?} ({})",
                        entry.category, entry.value, entry.color
                    );
                }
            }
            Some(TooltipContent::Custom(())) => {}
            None => println!("draw tooltip: none"),
        }
    }
}
