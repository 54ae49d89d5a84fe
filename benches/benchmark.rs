use criterion::{criterion_group, criterion_main, Criterion};

use aoc2021::{
    day05::{count_overlaps, parse_segments, DiagonalMode},
    default_input, ALL_SOLUTIONS,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    for (i, day) in ALL_SOLUTIONS.iter().enumerate() {
        c.bench_function(&format!("day{}", i + 1), |b| {
            let input = default_input(i + 1).unwrap();
            b.iter(|| day(&input))
        });
    }

    let segments = parse_segments(&default_input(5).unwrap()).unwrap();
    for mode in [DiagonalMode::Skip, DiagonalMode::Include] {
        c.bench_function(&format!("day5 rasterize {:?}", mode), |b| {
            b.iter(|| count_overlaps(&segments, mode))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
