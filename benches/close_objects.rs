use criterion::{criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use criterion::measurement::WallTime;
use std::hint::black_box;

use neartree::test_utils::build_populated_tree_and_query_points;
use neartree::Geometry;

const QUERY_POINTS_PER_LOOP: usize = 100;

fn bench_close_objects(group: &mut BenchmarkGroup<WallTime>, geometry: Geometry, size: usize, radius: f64) {
    group.bench_with_input(BenchmarkId::new(format!("{geometry:?}"), size), &size, |b, &size| {
        let (tree, _, query_points) =
            build_populated_tree_and_query_points(geometry, size, QUERY_POINTS_PER_LOOP, 4);

        b.iter(|| {
            query_points.iter().for_each(|point| {
                black_box(tree.close_objects(black_box(point), radius));
            })
        });
    });
}

pub fn close_objects_small(c: &mut Criterion) {
    let mut group = c.benchmark_group("close_objects(small radius)");
    group.throughput(Throughput::Elements(QUERY_POINTS_PER_LOOP as u64));

    for size in [1_000, 10_000, 100_000] {
        bench_close_objects(&mut group, Geometry::Euclidean, size, 0.5);
        bench_close_objects(&mut group, Geometry::Spherical, size, 0.05);
        bench_close_objects(&mut group, Geometry::Hyperbolic, size, 0.05);
    }
    group.finish();
}

pub fn close_objects_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("close_objects(large radius)");
    group.throughput(Throughput::Elements(QUERY_POINTS_PER_LOOP as u64));

    for size in [1_000, 10_000, 100_000] {
        bench_close_objects(&mut group, Geometry::Euclidean, size, 3.0);
        bench_close_objects(&mut group, Geometry::Spherical, size, 0.3);
        bench_close_objects(&mut group, Geometry::Hyperbolic, size, 0.3);
    }
    group.finish();
}

criterion_group!(benches, close_objects_small, close_objects_large);
criterion_main!(benches);
