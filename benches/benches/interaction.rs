// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use plotstate_data::{Category, DataPoint, Dataset};
use plotstate_interaction::tooltip::{TooltipChangeNotifier, TooltipObservation};
use plotstate_shell::{Area, ChartConfig, ChartShell, Dot};

fn chart(rows: usize, series: usize) -> (ChartShell<Area>, Dataset) {
    let names: Vec<String> = (0..series).map(|s| format!("s{s}")).collect();
    let data: Dataset = (0..rows)
        .map(|r| {
            names
                .iter()
                .enumerate()
                .fold(DataPoint::new().with("x", r as f64), |p, (s, name)| {
                    p.with(name.as_str(), (r * (s + 1)) as f64)
                })
        })
        .collect();
    let config = ChartConfig::default()
        .with_index("x")
        .with_categories(names.iter().map(String::as_str));
    let mut chart = ChartShell::<Area>::new(Area, config)
        .unwrap()
        .with_data(data.clone());
    chart.set_on_value_change(|event| {
        black_box(event);
    });
    (chart, data)
}

fn bench_restyle_after_click(c: &mut Criterion) {
    let mut group = c.benchmark_group("interaction/restyle_after_click");

    // A point click followed by a full restyle of every element.
    for (rows, series) in [(32usize, 2usize), (256, 4), (1_024, 8)] {
        let (chart, data) = chart(rows, series);
        let dots: Vec<Dot> = chart
            .categories()
            .iter()
            .flat_map(|category| {
                data.rows().iter().enumerate().map(move |(index, row)| Dot {
                    category: category.clone(),
                    index,
                    payload: row.clone(),
                })
            })
            .collect();
        group.throughput(Throughput::Elements(dots.len() as u64));
        let id = BenchmarkId::from_parameter(format!("{rows}x{series}"));
        group.bench_function(id, |b| {
            b.iter_batched(
                || fresh_chart(rows, series),
                |mut chart| {
                    chart.click_element(&dots[dots.len() / 2]);
                    for dot in &dots {
                        black_box(chart.element_style(dot));
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn fresh_chart(rows: usize, series: usize) -> ChartShell<Area> {
    chart(rows, series).0
}

fn bench_tooltip_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("interaction/tooltip_notifier");

    // Pointer moves mostly stay on the same label.
    let frames: Vec<TooltipObservation> = (0..4_096)
        .map(|i| TooltipObservation::new(true, Some(format!("label{}", i / 64))))
        .collect();
    group.throughput(Throughput::Elements(frames.len() as u64));
    group.bench_function("observe", |b| {
        b.iter(|| {
            let mut notifier = TooltipChangeNotifier::new();
            let delivered = frames.iter().filter(|f| notifier.observe(f)).count();
            black_box(delivered)
        });
    });

    group.finish();
}

fn bench_legend_clicks(c: &mut Criterion) {
    let (mut chart, _) = chart(16, 8);
    let categories: Vec<Category> = chart.categories().to_vec();
    c.bench_function("interaction/legend_click_cycle", |b| {
        b.iter(|| {
            for category in &categories {
                black_box(chart.click_legend_item(category));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_restyle_after_click,
    bench_tooltip_frames,
    bench_legend_clicks
);
criterion_main!(benches);
