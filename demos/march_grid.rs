// Marches a Perlin density grid one cell at a time, pacing the walk from the caller
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use cubemarch_core::{MeshBuffer, Vector3d};
use cubemarch_fields::{PerlinField, DEFAULT_NOISE_SCALE};
use cubemarch_polygonize::{
    DensityGrid, GridExtent, InterpolationMode, MarchingCubes, MarchingCubesConfig,
};

#[derive(Debug, Parser)]
#[command(about = "Polygonize a Perlin noise grid with marching cubes")]
struct Args {
    /// Grid vertices along x, y and z
    #[arg(long, num_args = 3, default_values_t = [10, 10, 10])]
    size: Vec<usize>,

    /// Density threshold of the surface
    #[arg(long, default_value_t = 0.5)]
    iso_level: f64,

    /// Vertex placement on crossed edges: linear or midpoint
    #[arg(long, default_value_t = InterpolationMode::Linear)]
    mode: InterpolationMode,

    #[arg(long, default_value_t = DEFAULT_NOISE_SCALE)]
    noise_scale: f64,

    /// Noise offset along x, y and z
    #[arg(long, num_args = 3, default_values_t = [0.0, 0.0, 0.0], allow_negative_numbers = true)]
    noise_offset: Vec<f64>,

    #[arg(long, default_value_t = 0)]
    seed: u32,

    /// Pause between cells; 0 runs the grid eagerly
    #[arg(long, default_value_t = 0)]
    step_delay_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let extent = GridExtent::new(args.size[0], args.size[1], args.size[2]);
    let offset = Vector3d::new(args.noise_offset[0], args.noise_offset[1], args.noise_offset[2]);
    let field = PerlinField::new(args.noise_scale, offset, args.seed)?;
    let grid = DensityGrid::sample_field(extent, &field)?;

    let config = MarchingCubesConfig::default()
        .with_iso_level(args.iso_level)
        .with_interpolation(args.mode);
    let mc = MarchingCubes::new(config);

    println!("Marching Cubes over a Perlin grid");
    println!("=================================");
    println!("  - Extent: {}x{}x{}", extent.nx, extent.ny, extent.nz);
    println!("  - Cells: {}", extent.cell_count());
    println!("  - Isolevel: {}", config.iso_level);
    println!("  - Interpolation: {:?}", config.interpolation);
    println!();

    let triangles = if args.step_delay_ms == 0 {
        mc.polygonize_grid(&grid)?
    } else {
        let delay = Duration::from_millis(args.step_delay_ms);
        let mut walk = mc.polygonize_grid_stepped(&grid);
        while let Some(step) = walk.next() {
            let step = step?;
            println!(
                "  cell ({}, {}, {}) -> {} triangles, {} total [{}/{}]",
                step.coord.x,
                step.coord.y,
                step.coord.z,
                step.triangles.len(),
                step.total_triangles,
                walk.cells_visited(),
                walk.cell_count()
            );
            thread::sleep(delay);
        }
        walk.into_triangles()
    };

    let mesh = MeshBuffer::from_triangles(&triangles)?;
    println!();
    println!("  ✓ Extracted {} triangles", triangles.len());
    println!("  - Vertices: {}", mesh.vertex_count());
    println!("  - Faces: {}", mesh.face_count());
    println!("  - Vertex buffer: {} bytes", mesh.vertex_bytes().len());
    println!("  - Index buffer: {} bytes", mesh.index_bytes().len());

    Ok(())
}
