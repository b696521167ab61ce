//! Layout and hit-test benchmarks.
//!
//! A drag across the strip resolves one pointer sample per frame, and every
//! draw asks the cache for the layout. Both must stay cheap as the symbol
//! count grows.
//!
//! Run with: cargo bench --bench hit_test

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use index_strip::model::{Extent, Orientation, Point, SymbolSet};
use index_strip::state::{IndexStrip, PointerEvent, StripStyle};
use index_strip::view_state::{
    compute_layout, HitTester, LayoutCache, LayoutConfig, LayoutParams, RecordingCanvas,
};

fn symbols(n: usize) -> SymbolSet {
    SymbolSet::new((0..n).map(|i| format!("{}", i)))
}

fn config(length: i32) -> LayoutConfig {
    LayoutConfig::new(24, false, Orientation::Vertical, Extent::new(40, length))
}

fn benchmark_compute_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_layout");

    for n in [27usize, 256, 4096] {
        let config = config(n as i32 * 40);
        group.bench_with_input(BenchmarkId::new("symbols", n), &n, |b, &n| {
            b.iter(|| compute_layout(black_box(&config), black_box(n)));
        });
    }

    group.finish();
}

fn benchmark_cached_layout(c: &mut Criterion) {
    let params = LayoutParams::new(config(1080), 27);
    let mut cache = LayoutCache::new();
    cache.get(params);

    c.bench_function("layout_cache_hit", |b| {
        b.iter(|| cache.get(black_box(params)).len());
    });
}

fn benchmark_drag_across_strip(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_across_strip");

    for n in [27usize, 256, 4096] {
        let length = n as i32 * 40;
        let layout = compute_layout(&config(length), n);
        let symbols = symbols(n);

        group.bench_with_input(BenchmarkId::new("symbols", n), &n, |b, _| {
            b.iter(|| {
                let mut tester = HitTester::new();
                let mut changes = 0usize;
                // Two samples per cell, so half are suppressed duplicates.
                for step in 0..(length / 20) {
                    let point = Point::new(20.0, (step * 20) as f32 + 5.0);
                    let raw = HitTester::resolve_index(&layout, black_box(point));
                    if tester.report_touch(raw, &symbols).is_some() {
                        changes += 1;
                    }
                }
                changes + usize::from(tester.release().is_some())
            });
        });
    }

    group.finish();
}

fn benchmark_widget_frame(c: &mut Criterion) {
    let mut strip = IndexStrip::new(StripStyle::default(), SymbolSet::latin());
    strip.on_size_changed(Extent::new(40, 1080));
    let mut canvas = RecordingCanvas::new();

    c.bench_function("widget_draw_and_touch", |b| {
        b.iter(|| {
            canvas.clear();
            strip.draw(&mut canvas);
            strip.on_pointer(PointerEvent::down(20.0, black_box(45.0)));
            strip.on_pointer(PointerEvent::up(20.0, 45.0))
        });
    });
}

criterion_group!(
    benches,
    benchmark_compute_layout,
    benchmark_cached_layout,
    benchmark_drag_across_strip,
    benchmark_widget_frame
);
criterion_main!(benches);
