//! Criterion benchmarks for rejection sampling.
//! A triangle accepts about half the bounding-box draws; the holed square
//! accepts about 64%, with two extra membership tests per draw.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use planar::{populate, Polygon, PopulateCfg};

fn bench_populate(c: &mut Criterion) {
    let mut group = c.benchmark_group("populate");
    let tri = Polygon::from_xy(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]).unwrap();
    let square = Polygon::from_xy(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]).unwrap();
    let holes = vec![
        Polygon::from_xy(&[[1.0, 1.0], [4.0, 1.0], [4.0, 4.0], [1.0, 4.0]]).unwrap(),
        Polygon::from_xy(&[[6.0, 6.0], [9.0, 6.0], [9.0, 9.0], [6.0, 9.0]]).unwrap(),
    ];
    for &n in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("triangle", n), &n, |b, &n| {
            b.iter(|| populate(&tri, n, Some(7), &[], PopulateCfg::default()).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("square_two_holes", n), &n, |b, &n| {
            b.iter(|| populate(&square, n, Some(7), &holes, PopulateCfg::default()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_populate);
criterion_main!(benches);
