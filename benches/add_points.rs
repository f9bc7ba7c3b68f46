use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use neartree::test_utils::{build_populated_tree_and_query_points, rand_points, seeded_rng};
use neartree::Geometry;

const POINTS_PER_LOOP: usize = 100;

pub fn add_100(c: &mut Criterion) {
    for geometry in [Geometry::Euclidean, Geometry::Spherical, Geometry::Hyperbolic] {
        let mut group = c.benchmark_group(format!(
            "add 100 items to {geometry:?} near tree of increasing size"
        ));
        group.throughput(Throughput::Elements(POINTS_PER_LOOP as u64));

        for size in [100, 1_000, 10_000, 100_000].iter() {
            group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
                let (tree, _, _) = build_populated_tree_and_query_points(geometry, size, 0, 1);
                let points_to_add = rand_points(&mut seeded_rng(2), geometry, POINTS_PER_LOOP);

                b.iter_batched(
                    || tree.clone(),
                    |mut tree| {
                        points_to_add
                            .iter()
                            .enumerate()
                            .for_each(|(id, point)| tree.add(black_box(*point), id));
                        tree
                    },
                    BatchSize::LargeInput,
                );
            });
        }

        group.finish();
    }
}

criterion_group!(benches, add_100);
criterion_main!(benches);
