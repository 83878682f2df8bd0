// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the split computation.
//!
//! Measures the performance of:
//! - Mapping a pointer coordinate onto a split position
//! - A full drag (press, moves, release) through the slider

use criterion::{criterion_group, criterion_main, Criterion};
use iced_compare::domain::compare::{
    ContainerGeometry, PointerEvent, PointerInput, PointerSource, SplitSlider,
};
use std::hint::black_box;

/// Benchmark the pointer-to-split conversion alone.
fn bench_split_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_computation");
    let geometry = ContainerGeometry::new(120.0, 1280.0);

    group.bench_function("split_at", |b| {
        b.iter(|| {
            for x in (-200..1800).step_by(7) {
                black_box(geometry.split_at(black_box(x as f32)));
            }
        });
    });

    group.finish();
}

/// Benchmark a drag sweeping across the container.
fn bench_drag_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_computation");
    let geometry = ContainerGeometry::new(0.0, 1920.0);

    group.bench_function("drag_sequence", |b| {
        b.iter(|| {
            let mut slider = SplitSlider::new();
            slider.handle(
                PointerEvent::Pressed(PointerInput::Mouse { x: 960.0 }),
                geometry,
            );
            for x in 0..1920 {
                slider.handle(
                    PointerEvent::Moved(PointerInput::Mouse { x: x as f32 }),
                    geometry,
                );
            }
            slider.handle(PointerEvent::Released(PointerSource::Mouse), geometry);
            black_box(slider.position());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_split_at, bench_drag_sequence);
criterion_main!(benches);
