//! Benchmarks for generation advance and rendering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use torus_life::{Grid, Renderer};

fn random_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size, size).expect("non-zero size");
    grid.randomize(42);
    grid
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for size in [20, 64, 256] {
        let grid = random_grid(size);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| black_box(grid.advance()));
        });
    }

    group.finish();
}

fn bench_advance_with_hook(c: &mut Criterion) {
    let grid = random_grid(64);
    c.bench_function("advance_with_hook_64", |b| {
        b.iter(|| {
            let mut changes = 0usize;
            let next = grid.advance_with(|_, _, _| changes += 1);
            black_box((next, changes))
        });
    });
}

fn bench_format(c: &mut Criterion) {
    let grid = random_grid(64);
    let renderer = Renderer::default();
    c.bench_function("format_64", |b| {
        b.iter(|| black_box(renderer.format(black_box(&grid))));
    });
}

criterion_group!(benches, bench_advance, bench_advance_with_hook, bench_format);
criterion_main!(benches);
