//! meshgen - generate subdivided meshes from the command line
//!
//! # Commands
//!
//! - `meshgen grid <X> <Y>` - flat grid in the z = 0 plane
//! - `meshgen cube <X> <Y> <Z>` - subdivided box surface
//! - `meshgen rounded-cube <X> <Y> <Z> <ROUNDNESS>` - box with rounded edges
//!
//! # Usage
//!
//! ```bash
//! # Print vertex/triangle counts and bounds
//! meshgen cube 4 2 3
//!
//! # Dump the buffers as JSON
//! meshgen --json rounded-cube 8 8 8 2 > mesh.json
//!
//! # Watch the generator
//! RUST_LOG=procedural_mesh=debug meshgen grid 16 16
//! ```

mod generate;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// meshgen - procedural grid, box and rounded box meshes
#[derive(Parser, Debug)]
#[command(name = "meshgen")]
#[command(about = "Generate subdivided grid, box and rounded box meshes")]
#[command(version)]
struct Cli {
    /// Print the mesh buffers as JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,

    /// Reject meshes with more vertices than this
    #[arg(long, global = true)]
    max_vertices: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Flat grid in the z = 0 plane
    Grid(generate::GridArgs),

    /// Subdivided box surface
    Cube(generate::CubeArgs),

    /// Box surface with rounded edges and corners
    RoundedCube(generate::RoundedCubeArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = generate::limits(cli.max_vertices)?;

    let mesh = match &cli.command {
        Commands::Grid(args) => generate::grid(args, &config)?,
        Commands::Cube(args) => generate::cube(args, &config)?,
        Commands::RoundedCube(args) => generate::rounded_cube(args, &config)?,
    };

    let stdout = std::io::stdout();
    if cli.json {
        report::write_json(&mesh, stdout.lock())
    } else {
        report::write_summary(&mesh, &config, stdout.lock())
    }
}
