/// Neartree example: tiling vertices
///
/// Walks outwards across a regular hyperbolic tiling of the Poincaré disk by repeatedly
/// applying Möbius isometries, and uses a near tree to recognise tile centres and vertices
/// that have already been reached by a different route.
///
/// Run with an optional Schläfli symbol, e.g. `cargo run --example tiling-vertices -- 7 3`.
use std::collections::VecDeque;
use std::error::Error;
use std::f64::consts::PI;

use neartree::geometry::h2e_norm;
use neartree::{Geometry, Mobius, NearTree, Vector3D};
use num_complex::Complex;
use tracing::{info, Level};

/// Generated points are kept strictly inside this radius of the disk.
const MAX_EUCLIDEAN_RADIUS: f64 = 0.99;
/// Two points closer than this are taken to be the same point.
const DEDUPLICATION_RADIUS: f64 = 1e-6;
const MAX_TILES: usize = 5_000;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let mut args = std::env::args().skip(1);
    let p: u32 = args.next().map(|s| s.parse::<u32>()).transpose()?.unwrap_or(7);
    let q: u32 = args.next().map(|s| s.parse::<u32>()).transpose()?.unwrap_or(3);

    let geometry = Geometry::from_schlafli(p, q)?;
    if geometry != Geometry::Hyperbolic {
        return Err(format!("{{{p},{q}}} tiles the {geometry:?} plane, not the hyperbolic one").into());
    }

    let pf = f64::from(p);
    let qf = f64::from(q);

    // hyperbolic distances from a tile's centre to its edge midpoints and to its vertices
    let inradius = ((PI / qf).cos() / (PI / pf).sin()).acosh();
    let circumradius = (1.0 / ((PI / pf).tan() * (PI / qf).tan())).acosh();

    let rotation = Mobius::isometry(geometry, 2.0 * PI / pf, Complex::new(0.0, 0.0));
    // half-turn about the midpoint of the edge shared with the neighbour across the x axis
    let half_turn = Mobius::isometry(geometry, PI, Complex::new(h2e_norm(2.0 * inradius), 0.0));
    // vertices sit between edge midpoints, half a rotation step off the x axis
    let mut first_vertex = Vector3D::new(h2e_norm(circumradius), 0.0, 0.0);
    first_vertex.rotate_xy(PI / pf);

    let mut centres: NearTree<f64, usize> = NearTree::for_geometry(geometry);
    let mut vertices: NearTree<f64, usize> = NearTree::for_geometry(geometry);

    let mut queue = VecDeque::new();
    centres.add(Vector3D::origin(), 0);
    queue.push_back(Mobius::identity());

    while let Some(tile) = queue.pop_front() {
        record_vertices(&tile, &rotation, &first_vertex, p, &mut vertices);

        let mut side = tile;
        for _ in 0..p {
            let neighbour = side.compose(&half_turn);
            let centre = neighbour.apply(&Vector3D::origin());

            if centre.abs() < MAX_EUCLIDEAN_RADIUS
                && centres.size() < MAX_TILES
                && centres.nearest_neighbour(&centre, DEDUPLICATION_RADIUS).is_none()
            {
                centres.add(centre, centres.size());
                queue.push_back(neighbour);
            }

            side = side.compose(&rotation);
        }
    }

    info!(
        p,
        q,
        tiles = centres.size(),
        vertices = vertices.size(),
        "tiling generated"
    );
    info!(
        centre_tree_depth = centres.depth(),
        vertex_tree_depth = vertices.depth(),
        "near tree shape"
    );

    let sample = Vector3D::new(0.5, 0.25, 0.0);
    if let Some(nearest) = centres.nearest_neighbour(&sample, f64::INFINITY) {
        info!(
            tile = nearest.item.id,
            distance = nearest.distance,
            "tile containing {sample:?}"
        );
    }
    let around = vertices.close_objects_count(&Vector3D::origin(), circumradius + 1e-9);
    info!(vertices = around, "vertices of the central tile");

    Ok(())
}

fn record_vertices(
    tile: &Mobius<f64>,
    rotation: &Mobius<f64>,
    first_vertex: &Vector3D<f64>,
    p: u32,
    vertices: &mut NearTree<f64, usize>,
) {
    let mut corner = *tile;
    for _ in 0..p {
        let vertex = corner.apply(first_vertex);
        if vertex.abs() < MAX_EUCLIDEAN_RADIUS
            && vertices.nearest_neighbour(&vertex, DEDUPLICATION_RADIUS).is_none()
        {
            vertices.add(vertex, vertices.size());
        }
        corner = corner.compose(rotation);
    }
}
