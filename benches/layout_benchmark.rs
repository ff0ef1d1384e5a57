//! Layout benchmark: measure construction and full style recomputation.
//!
//! Relayout visits every row and cell, so cost scales with grid area.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fluidgrid::GridLayout;

fn construct_small_grid(c: &mut Criterion) {
    c.bench_function("construct_4x2", |b| {
        b.iter(|| GridLayout::new(black_box(4), black_box(2)))
    });
}

fn construct_large_grid(c: &mut Criterion) {
    c.bench_function("construct_12x64", |b| {
        b.iter(|| GridLayout::new(black_box(12), black_box(64)))
    });
}

fn relayout_large_grid(c: &mut Criterion) {
    let mut grid = GridLayout::new(12, 64);
    let mut height = 600;

    c.bench_function("relayout_12x64", |b| {
        b.iter(|| {
            // Alternate so every iteration really changes the property.
            height = if height == 600 { 900 } else { 600 };
            grid.set_height(black_box(height));
        })
    });
}

criterion_group!(
    benches,
    construct_small_grid,
    construct_large_grid,
    relayout_large_grid,
);
criterion_main!(benches);
