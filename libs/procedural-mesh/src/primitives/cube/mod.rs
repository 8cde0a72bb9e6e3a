//! # Cube Primitive
//!
//! Subdivided box with vertices left on their integer lattice points.

use config::constants::GlobalConfig;

use super::box_surface::{build_surface, BoxDimensions, Caps, FlatPlacement};
use crate::error::MeshError;
use crate::mesh::Mesh;

/// Creates a closed, subdivided box surface.
///
/// # Arguments
///
/// * `dims` - Subdivision counts along x, y and z
///
/// # Returns
///
/// A watertight mesh without normals.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::{create_cube, BoxDimensions};
///
/// let mesh = create_cube(BoxDimensions::new(1, 1, 1).unwrap()).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.indices().len(), 36);
/// ```
pub fn create_cube(dims: BoxDimensions) -> Result<Mesh, MeshError> {
    create_box_surface(dims, Caps::Closed, &GlobalConfig::default())
}

/// Creates a subdivided box surface with explicit caps and limits.
///
/// With [`Caps::OpenBottom`] the bottom face is left untriangulated; its
/// interior vertices are still stored so the vertex layout matches the
/// closed box.
///
/// # Example
///
/// ```rust
/// use config::constants::GlobalConfig;
/// use procedural_mesh::{create_box_surface, BoxDimensions, Caps};
///
/// let dims = BoxDimensions::new(2, 2, 2).unwrap();
/// let open = create_box_surface(dims, Caps::OpenBottom, &GlobalConfig::default()).unwrap();
/// assert_eq!(open.vertex_count(), 26);
/// assert!(!open.is_watertight());
/// ```
pub fn create_box_surface(
    dims: BoxDimensions,
    caps: Caps,
    config: &GlobalConfig,
) -> Result<Mesh, MeshError> {
    build_surface(dims, caps, &FlatPlacement, config)
}
