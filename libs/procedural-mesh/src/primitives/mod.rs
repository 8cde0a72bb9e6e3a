//! # Primitives
//!
//! Mesh generation for the subdivided grid, cube and rounded cube.

pub mod box_surface;
pub mod cube;
pub mod grid;
pub mod rounded_cube;

pub use box_surface::{BoxDimensions, BoxLattice, BoxLayout, Caps};
pub use cube::{create_box_surface, create_cube};
pub use grid::{create_grid, create_grid_with_config};
pub use rounded_cube::{create_rounded_cube, create_rounded_cube_with_config, RoundedPlacement};
