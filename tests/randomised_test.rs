#![cfg(feature = "test_utils")]

use rayon::prelude::*;
use rstest::rstest;

use neartree::test_utils::{
    build_populated_tree_and_query_points, linear_close_objects, linear_nearest, seeded_rng,
    rand_points,
};
use neartree::{Geometry, Metric, NearTree};

#[rstest]
#[case(Geometry::Euclidean, 5.0)]
#[case(Geometry::Spherical, 0.4)]
#[case(Geometry::Hyperbolic, 0.6)]
fn close_objects_match_a_linear_scan(#[case] geometry: Geometry, #[case] max_radius: f64) {
    let (tree, points, query_points) =
        build_populated_tree_and_query_points(geometry, 3_000, 200, 7);
    let metric = Metric::from(geometry);
    let radii: Vec<f64> = (0..query_points.len())
        .map(|i| max_radius * i as f64 / query_points.len() as f64)
        .collect();

    for (query, radius) in query_points.iter().zip(radii) {
        let mut result: Vec<usize> = tree
            .close_objects(query, radius)
            .into_iter()
            .map(|nn| nn.item.id)
            .collect();
        result.sort_unstable();

        assert_eq!(result, linear_close_objects(&points, metric, query, radius));
    }
}

#[rstest]
#[case(Geometry::Euclidean)]
#[case(Geometry::Spherical)]
#[case(Geometry::Hyperbolic)]
fn nearest_neighbour_matches_a_linear_scan(#[case] geometry: Geometry) {
    let (tree, points, query_points) =
        build_populated_tree_and_query_points(geometry, 3_000, 500, 8);
    let metric = Metric::from(geometry);

    for query in &query_points {
        let expected = linear_nearest(&points, metric, query, f64::INFINITY).map(|(d, _)| d);
        let result = tree
            .nearest_neighbour(query, f64::INFINITY)
            .map(|nn| nn.distance);

        assert_eq!(result, expected);
    }
}

#[rstest]
#[case(Geometry::Euclidean)]
#[case(Geometry::Spherical)]
#[case(Geometry::Hyperbolic)]
fn concurrent_queries_agree_with_sequential_ones(#[case] geometry: Geometry) {
    let (tree, _, query_points) = build_populated_tree_and_query_points(geometry, 5_000, 1_000, 9);

    let sequential: Vec<Option<usize>> = query_points
        .iter()
        .map(|q| tree.nearest_neighbour(q, f64::INFINITY).map(|nn| nn.item.id))
        .collect();
    let concurrent: Vec<Option<usize>> = query_points
        .par_iter()
        .map(|q| tree.nearest_neighbour(q, f64::INFINITY).map(|nn| nn.item.id))
        .collect();

    assert_eq!(sequential, concurrent);
}

#[test]
fn reset_tree_is_indistinguishable_from_a_fresh_one() {
    let mut rng = seeded_rng(10);
    let hyperbolic_points = rand_points(&mut rng, Geometry::Hyperbolic, 1_000);
    let euclidean_points = rand_points(&mut rng, Geometry::Euclidean, 1_000);
    let queries = rand_points(&mut rng, Geometry::Hyperbolic, 100);

    let mut fresh: NearTree<f64, usize> = NearTree::for_geometry(Geometry::Hyperbolic);
    let mut reused: NearTree<f64, usize> = NearTree::for_geometry(Geometry::Euclidean);
    for (id, p) in euclidean_points.iter().enumerate() {
        reused.add(*p, id);
    }
    reused.reset(Metric::Hyperbolic);

    for (id, p) in hyperbolic_points.iter().enumerate() {
        fresh.add(*p, id);
        reused.add(*p, id);
    }

    assert_eq!(fresh.node_count(), reused.node_count());
    assert_eq!(fresh.depth(), reused.depth());
    for q in &queries {
        assert_eq!(
            fresh.nearest_neighbour(q, f64::INFINITY).map(|nn| nn.item.id),
            reused.nearest_neighbour(q, f64::INFINITY).map(|nn| nn.item.id)
        );
        let mut a: Vec<usize> = fresh.close_objects(q, 0.5).iter().map(|nn| nn.item.id).collect();
        let mut b: Vec<usize> = reused.close_objects(q, 0.5).iter().map(|nn| nn.item.id).collect();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }
}
