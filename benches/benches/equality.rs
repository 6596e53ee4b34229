// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use plotstate_data::{CategoryColorMap, DataPoint, Dataset, Palette, Value, records_equal};

fn wide_record(fields: usize, tail: i32) -> DataPoint {
    let mut point: DataPoint = (0..fields)
        .map(|i| (format!("field{i:04}"), Value::from(i as f64)))
        .collect();
    point.insert("tail", tail);
    point
}

fn bench_records_equal(c: &mut Criterion) {
    let mut group = c.benchmark_group("equality/records_equal");

    // Worst case for hit testing: equal keys, values differ only in the last field.
    for fields in [4usize, 16, 64, 256] {
        let a = wide_record(fields, 1);
        let b = wide_record(fields, 2);
        group.throughput(Throughput::Elements(fields as u64));
        group.bench_with_input(BenchmarkId::new("last_field_differs", fields), &fields, |bench, _| {
            bench.iter(|| black_box(records_equal(black_box(&a), black_box(&b))));
        });
        let same = a.clone();
        group.bench_with_input(BenchmarkId::new("equal", fields), &fields, |bench, _| {
            bench.iter(|| black_box(records_equal(black_box(&a), black_box(&same))));
        });
    }

    group.finish();
}

fn bench_flat_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("equality/has_single_distinct_value");

    for rows in [128usize, 2_048, 32_768] {
        let data: Dataset = (0..rows)
            .map(|i| DataPoint::new().with("i", i as f64).with("flat", 10))
            .collect();
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &data, |b, data| {
            b.iter(|| black_box(data.has_single_distinct_value("flat")));
        });
    }

    group.finish();
}

fn bench_color_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("equality/color_map_build");
    let palette = Palette::default();

    // Repeated categories model a series list derived from many rows.
    for unique in [8usize, 64, 512] {
        let names: Vec<String> = (0..unique * 4).map(|i| format!("series{}", i % unique)).collect();
        group.throughput(Throughput::Elements(names.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(unique), &names, |b, names| {
            b.iter(|| black_box(CategoryColorMap::build(names.iter(), &palette)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_records_equal, bench_flat_series, bench_color_map);
criterion_main!(benches);
