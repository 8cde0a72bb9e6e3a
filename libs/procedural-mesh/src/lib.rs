//! # Procedural Mesh
//!
//! Closed-form mesh generation for subdivided primitives: a flat grid, a box
//! and a box with rounded edges and corners.
//!
//! ## Architecture
//!
//! ```text
//! (dimensions, roundness?) → vertex fill → quad emission → Mesh
//! ```
//!
//! Topology is derived from the subdivision counts alone. Vertex and index
//! positions are closed-form functions of the box layout, so no adjacency
//! structure is ever built. The cube and the rounded cube share one
//! triangulation and differ only in their vertex placement strategy.
//!
//! ## Usage
//!
//! ```rust
//! use procedural_mesh::{create_cube, create_grid, create_rounded_cube, BoxDimensions};
//!
//! let grid = create_grid(4, 2)?;
//! assert_eq!(grid.vertex_count(), 15);
//!
//! let dims = BoxDimensions::new(4, 4, 4)?;
//! let cube = create_cube(dims)?;
//! assert!(cube.is_watertight());
//!
//! let rounded = create_rounded_cube(dims, 1)?;
//! assert_eq!(rounded.indices(), cube.indices());
//! # Ok::<(), procedural_mesh::MeshError>(())
//! ```

pub mod error;
pub mod mesh;
pub mod primitives;
pub mod quad;

pub use error::MeshError;
pub use mesh::Mesh;
pub use primitives::{
    create_box_surface, create_cube, create_grid, create_grid_with_config, create_rounded_cube,
    create_rounded_cube_with_config, BoxDimensions, BoxLattice, BoxLayout, Caps,
    RoundedPlacement,
};
