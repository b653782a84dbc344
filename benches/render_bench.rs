//! Benchmarks for transforms and chart rendering
//!
//! Run with: cargo bench

use bikeboard::render::render_svg;
use bikeboard::stats::{
    transform_duration, transform_hour_range, DurationStatsResponse, HourRangeStatsResponse,
};
use bikeboard::view::{ChartView, HourRange, TripDuration};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn duration_response(size: usize) -> DurationStatsResponse {
    DurationStatsResponse {
        hours: (0..size as i64).collect(),
        count: (0..size as i64).map(|i| (i * 37) % 500).collect(),
    }
}

fn hour_range_response() -> HourRangeStatsResponse {
    HourRangeStatsResponse {
        hour_bucket: (0..24).collect(),
        count: (0..24).map(|i| if i % 5 == 0 { None } else { Some(i * 11) }).collect(),
    }
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for size in [24, 1000, 10000] {
        let response = duration_response(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("duration_{}", size), |b| {
            b.iter(|| transform_duration(black_box(response.clone())).unwrap())
        });
    }

    let response = hour_range_response();
    group.bench_function("hour_range_24", |b| {
        b.iter(|| transform_hour_range(black_box(response.clone())).unwrap())
    });

    group.finish();
}

fn bench_svg(c: &mut Criterion) {
    let mut group = c.benchmark_group("svg");

    for size in [24, 1000] {
        let rows = transform_duration(duration_response(size)).unwrap();
        let spec = TripDuration::chart(&rows);

        group.bench_function(format!("line_{}", size), |b| {
            b.iter(|| render_svg(black_box(&spec), 960, 500))
        });
    }

    let rows = transform_hour_range(hour_range_response()).unwrap();
    let spec = HourRange::chart(&rows);
    group.bench_function("bar_24", |b| b.iter(|| render_svg(black_box(&spec), 960, 500)));

    group.finish();
}

criterion_group!(benches, bench_transform, bench_svg);
criterion_main!(benches);
