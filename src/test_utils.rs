//! Random point generation and brute-force reference queries, shared by the benches and
//! the integration tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::geometry::Geometry;
use crate::metric::Metric;
use crate::neartree::tree::NearTree;
use crate::vector::Vector3D;

/// Furthest a generated hyperbolic point is allowed from the origin of the disk.
pub const DISK_RADIUS: f64 = 0.95;

/// Furthest a generated spherical point is allowed from the origin of the projection.
pub const PROJECTION_RADIUS: f64 = 4.0;

/// A deterministic generator, so benches and tests see the same points on every run.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn rand_in_disk<R: Rng>(rng: &mut R, radius: f64) -> Vector3D<f64> {
    loop {
        let p = Vector3D::new(
            rng.random_range(-radius..radius),
            rng.random_range(-radius..radius),
            0.0,
        );
        if p.abs() < radius {
            return p;
        }
    }
}

/// A random point valid for `geometry`: inside a cube for Euclidean space, and in the plane
/// (inside the unit disk for hyperbolic space) otherwise.
pub fn rand_point<R: Rng>(rng: &mut R, geometry: Geometry) -> Vector3D<f64> {
    match geometry {
        Geometry::Euclidean => Vector3D::new(
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
        ),
        Geometry::Spherical => rand_in_disk(rng, PROJECTION_RADIUS),
        Geometry::Hyperbolic => rand_in_disk(rng, DISK_RADIUS),
    }
}

/// `count` random points valid for `geometry`, see [`rand_point`].
pub fn rand_points<R: Rng>(rng: &mut R, geometry: Geometry, count: usize) -> Vec<Vector3D<f64>> {
    (0..count).map(|_| rand_point(rng, geometry)).collect()
}

/// Builds a tree over `size` random points, with each point's index as its id, plus
/// `query_count` further random points to query it with.
pub fn build_populated_tree_and_query_points(
    geometry: Geometry,
    size: usize,
    query_count: usize,
    seed: u64,
) -> (NearTree<f64, usize>, Vec<Vector3D<f64>>, Vec<Vector3D<f64>>) {
    let mut rng = seeded_rng(seed);
    let points = rand_points(&mut rng, geometry, size);
    let query_points = rand_points(&mut rng, geometry, query_count);

    let mut tree = NearTree::with_capacity(Metric::from(geometry), size);
    for (id, p) in points.iter().enumerate() {
        tree.add(*p, id);
    }

    (tree, points, query_points)
}

/// Brute-force nearest neighbour: `(distance, index)` of the closest of `points` within `radius`.
pub fn linear_nearest(
    points: &[Vector3D<f64>],
    metric: Metric,
    location: &Vector3D<f64>,
    radius: f64,
) -> Option<(f64, usize)> {
    points
        .iter()
        .enumerate()
        .map(|(id, p)| (metric.dist(location, p), id))
        .filter(|&(dist, _)| dist <= radius)
        .fold(None, |best: Option<(f64, usize)>, candidate| match best {
            Some(best) if best.0 <= candidate.0 => Some(best),
            _ => Some(candidate),
        })
}

/// Brute-force radius search: indices of every one of `points` within `radius`, ascending.
pub fn linear_close_objects(
    points: &[Vector3D<f64>],
    metric: Metric,
    location: &Vector3D<f64>,
    radius: f64,
) -> Vec<usize> {
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| metric.dist(location, p) <= radius)
        .map(|(id, _)| id)
        .collect()
}
