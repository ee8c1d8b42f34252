//! Integration tests for cubemarch-polygonize
//!
//! These tests drive whole grids through the public API and check the
//! properties that must hold across every entry point.

use cubemarch_core::{from_fn, DensityField, Error, MeshBuffer, Point3f, Result, Triangle};
use cubemarch_polygonize::tables::{triangle_edges, EDGE_TABLE};
use cubemarch_polygonize::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Create a grid of uniformly random densities in [0, 1)
fn random_grid(extent: GridExtent, seed: u64) -> DensityGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let values = (0..extent.vertex_count()).map(|_| rng.gen::<f64>()).collect();
    DensityGrid::from_values(extent, values).unwrap()
}

/// Create a grid sampling a solid ball
fn ball_grid(n: usize, radius: f64) -> DensityGrid {
    let c = (n - 1) as f64 / 2.0;
    let field = from_fn(move |x, y, z| {
        let d = ((x - c).powi(2) + (y - c).powi(2) + (z - c).powi(2)).sqrt();
        radius - d
    });
    DensityGrid::sample_field(GridExtent::new(n, n, n), &field).unwrap()
}

#[test]
fn test_case_tables_are_consistent() {
    assert_eq!(EDGE_TABLE[0], 0);
    assert_eq!(EDGE_TABLE[255], 0);

    for index in 0..=255u8 {
        let triples: Vec<[usize; 3]> = triangle_edges(index).collect();
        assert!(triples.len() <= 5);
        for edge in triples.into_iter().flatten() {
            assert_ne!(EDGE_TABLE[index as usize] & (1 << edge), 0);
        }
    }
}

#[test]
fn test_eager_equals_stepped_on_random_grids() {
    for seed in 0..5 {
        let grid = random_grid(GridExtent::new(5, 4, 6), seed);

        for mode in [InterpolationMode::Linear, InterpolationMode::Midpoint] {
            let eager = polygonize_grid(&grid, 0.5, mode).unwrap();

            let mut batches: Vec<Triangle> = Vec::new();
            for step in polygonize_grid_stepped(&grid, 0.5, mode) {
                batches.extend(step.unwrap().triangles);
            }

            assert_eq!(eager, batches, "seed {} mode {:?}", seed, mode);
        }
    }
}

#[test]
fn test_polygonize_grid_is_deterministic() {
    let grid = random_grid(GridExtent::new(6, 6, 6), 42);
    let first = polygonize_grid(&grid, 0.3, InterpolationMode::Linear).unwrap();
    let second = polygonize_grid(&grid, 0.3, InterpolationMode::Linear).unwrap();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_grid_output_is_concatenation_of_cells() {
    let grid = random_grid(GridExtent::new(4, 4, 4), 7);

    let mut expected = Vec::new();
    for coord in grid.extent().cells() {
        let cell = build_cell(coord, &grid).unwrap();
        expected.extend(polygonize(&cell, 0.5, InterpolationMode::Linear));
    }

    assert_eq!(
        polygonize_grid(&grid, 0.5, InterpolationMode::Linear).unwrap(),
        expected
    );
}

#[test]
fn test_ball_surface_lies_near_radius() {
    let n = 16;
    let radius = 5.0;
    let grid = ball_grid(n, radius);
    let triangles = polygonize_grid(&grid, 0.0, InterpolationMode::Linear).unwrap();
    assert!(triangles.len() > 100);

    let c = (n - 1) as f32 / 2.0;
    let center = Point3f::new(c, c, c);
    for p in triangles.iter().flat_map(|t| t.points) {
        let d = (p - center).norm();
        assert!((d - radius as f32).abs() < 0.2, "vertex at distance {}", d);
    }
}

#[test]
fn test_ball_triangles_face_outward() {
    let n = 12;
    let grid = ball_grid(n, 4.0);
    let triangles = polygonize_grid(&grid, 0.0, InterpolationMode::Linear).unwrap();

    let c = (n - 1) as f32 / 2.0;
    let center = Point3f::new(c, c, c);
    let facings: Vec<f32> = triangles
        .iter()
        .filter(|t| t.area() > 1e-3)
        .map(|t| t.cross().dot(&(t.centroid() - center)).signum())
        .collect();

    // Clockwise seen from outside: the right-hand normal points into the solid
    assert!(!facings.is_empty());
    assert_eq!(facings[0], -1.0);
    assert!(
        facings.iter().all(|&f| f == facings[0]),
        "winding must be consistent"
    );
}

#[test]
fn test_midpoint_vertices_sit_on_half_lattice() {
    let grid = random_grid(GridExtent::new(5, 5, 5), 3);
    let triangles = polygonize_grid(&grid, 0.5, InterpolationMode::Midpoint).unwrap();

    for p in triangles.iter().flat_map(|t| t.points) {
        let halves = [p.x, p.y, p.z]
            .iter()
            .filter(|c| c.fract() == 0.5)
            .count();
        assert_eq!(halves, 1, "vertex {:?}", p);
    }
}

#[test]
fn test_degenerate_extent_is_not_an_error() {
    for extent in [GridExtent::new(1, 1, 1), GridExtent::new(2, 1, 2), GridExtent::new(0, 0, 0)] {
        let grid = DensityGrid::new(extent);
        assert!(polygonize_grid(&grid, 0.5, InterpolationMode::Linear)
            .unwrap()
            .is_empty());
    }
}

/// A field that fails everywhere beyond a plane
struct FailingField {
    limit: f64,
}

impl DensityField for FailingField {
    fn density(&self, x: f64, _y: f64, _z: f64) -> Result<f64> {
        if x > self.limit {
            Err(Error::Sampling(format!("x = {} is past the edge", x)))
        } else {
            Ok(0.0)
        }
    }
}

#[test]
fn test_sampling_errors_reach_the_caller() {
    let result = DensityGrid::sample_field(GridExtent::new(4, 4, 4), &FailingField { limit: 2.0 });
    assert_eq!(
        result,
        Err(Error::Sampling("x = 3 is past the edge".to_string()))
    );

    let cell = build_cell(CellCoord::new(2, 0, 0), &FailingField { limit: 2.0 });
    assert!(matches!(cell, Err(Error::Sampling(_))));
}

#[test]
fn test_mesh_buffer_from_grid() {
    let grid = ball_grid(10, 3.0);
    let mc = MarchingCubes::new(MarchingCubesConfig::default().with_iso_level(0.0));

    let triangles = mc.polygonize_grid(&grid).unwrap();
    let mesh = mc.extract_mesh(&grid).unwrap();

    assert_eq!(mesh.face_count(), triangles.len());
    assert_eq!(mesh.vertex_count(), triangles.len() * 3);
    assert_eq!(mesh, MeshBuffer::from_triangles(&triangles).unwrap());
    assert_eq!(mesh.triangles().collect::<Vec<_>>(), triangles);
}

#[test]
fn test_interactive_cell_matches_grid_polygonizer() {
    let mut interactive = InteractiveCell::new(InteractiveConfig::default()).unwrap();
    interactive.toggle(1).unwrap();
    interactive.toggle(4).unwrap();
    let cell = interactive.toggle(7).unwrap();

    let mut grid = DensityGrid::new(GridExtent::new(2, 2, 2));
    for (p, d) in cell.positions.iter().zip(cell.densities) {
        grid.set(p.x as usize, p.y as usize, p.z as usize, d).unwrap();
    }

    assert_eq!(
        polygonize_grid(&grid, 0.5, InterpolationMode::Linear).unwrap(),
        interactive.triangles()
    );
}

#[test]
fn test_near_threshold_samples_are_not_rounded_inside() {
    // Every sample is below the isolevel, some by less than f32 resolution
    let field = from_fn(|x, y, _| if (x + y) as usize % 2 == 0 { 0.499_999_999 } else { 0.0 });
    let grid = DensityGrid::sample_field(GridExtent::new(4, 4, 4), &field).unwrap();

    for coord in grid.extent().cells() {
        let cell = build_cell(coord, &grid).unwrap();
        assert_eq!(cube_index(&cell.densities, 0.5), 0, "cell {:?}", coord);
    }
    assert!(polygonize_grid(&grid, 0.5, InterpolationMode::Linear)
        .unwrap()
        .is_empty());
}
