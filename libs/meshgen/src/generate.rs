//! Subcommand arguments and mesh construction.

use anyhow::{Context, Result};
use clap::Args;
use config::constants::{GlobalConfig, EPSILON_TOLERANCE, PARALLEL_PLACEMENT_THRESHOLD};
use procedural_mesh::{
    create_box_surface, create_grid_with_config, create_rounded_cube_with_config, BoxDimensions,
    Caps, Mesh,
};
use tracing::info;

/// Arguments for the grid command
#[derive(Args, Debug)]
pub struct GridArgs {
    /// Quads along x
    pub x: u32,

    /// Quads along y
    pub y: u32,

    /// Compute per-vertex normals from the faces
    #[arg(long)]
    pub normals: bool,
}

/// Arguments for the cube command
#[derive(Args, Debug)]
pub struct CubeArgs {
    /// Subdivisions along x
    pub x: u32,

    /// Subdivisions along y
    pub y: u32,

    /// Subdivisions along z
    pub z: u32,

    /// Leave the bottom face untriangulated
    #[arg(long)]
    pub open_bottom: bool,
}

/// Arguments for the rounded-cube command
#[derive(Args, Debug)]
pub struct RoundedCubeArgs {
    /// Subdivisions along x
    pub x: u32,

    /// Subdivisions along y
    pub y: u32,

    /// Subdivisions along z
    pub z: u32,

    /// Rounding radius, at most half the smallest subdivision count
    pub roundness: u32,
}

/// Builds the generator limits, overriding the vertex cap when given.
pub fn limits(max_vertices: Option<usize>) -> Result<GlobalConfig> {
    match max_vertices {
        Some(max) => GlobalConfig::new(EPSILON_TOLERANCE, max, PARALLEL_PLACEMENT_THRESHOLD)
            .context("Invalid --max-vertices"),
        None => Ok(GlobalConfig::default()),
    }
}

pub fn grid(args: &GridArgs, config: &GlobalConfig) -> Result<Mesh> {
    let mut mesh = create_grid_with_config(args.x, args.y, config)
        .with_context(|| format!("Failed to build {}x{} grid", args.x, args.y))?;
    if args.normals {
        mesh.recalculate_normals();
    }
    info!(x = args.x, y = args.y, "generated grid");
    Ok(mesh)
}

pub fn cube(args: &CubeArgs, config: &GlobalConfig) -> Result<Mesh> {
    let dims = dimensions(args.x, args.y, args.z)?;
    let caps = if args.open_bottom {
        Caps::OpenBottom
    } else {
        Caps::Closed
    };
    let mesh = create_box_surface(dims, caps, config)
        .with_context(|| format!("Failed to build {} cube", label(dims)))?;
    info!(?dims, ?caps, "generated cube");
    Ok(mesh)
}

pub fn rounded_cube(args: &RoundedCubeArgs, config: &GlobalConfig) -> Result<Mesh> {
    let dims = dimensions(args.x, args.y, args.z)?;
    let mesh = create_rounded_cube_with_config(dims, args.roundness, config).with_context(|| {
        format!(
            "Failed to build {} rounded cube with roundness {}",
            label(dims),
            args.roundness
        )
    })?;
    info!(?dims, roundness = args.roundness, "generated rounded cube");
    Ok(mesh)
}

fn dimensions(x: u32, y: u32, z: u32) -> Result<BoxDimensions> {
    BoxDimensions::new(x, y, z).with_context(|| format!("Invalid box size {x}x{y}x{z}"))
}

fn label(dims: BoxDimensions) -> String {
    format!("{}x{}x{}", dims.x, dims.y, dims.z)
}
