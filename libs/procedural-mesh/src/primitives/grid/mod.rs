//! # Grid Primitive
//!
//! Flat subdivided plane in the `z = 0` plane.

use config::constants::GlobalConfig;
use glam::DVec3;
use tracing::debug;

use super::box_surface::layout::saturate;
use super::box_surface::{check_indices, check_limits, validate_size};
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::quad::{emit_quad, QUAD_INDICES};

/// Creates an `x_size` × `y_size` grid.
///
/// Vertices sit on the integer lattice `(x, y, 0)`, row-major. Normals are
/// not produced here; call [`Mesh::recalculate_normals`] when they are
/// needed.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::create_grid;
///
/// let mesh = create_grid(2, 2).unwrap();
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.indices().len(), 24);
/// ```
pub fn create_grid(x_size: u32, y_size: u32) -> Result<Mesh, MeshError> {
    create_grid_with_config(x_size, y_size, &GlobalConfig::default())
}

/// Creates a grid with explicit limits.
pub fn create_grid_with_config(
    x_size: u32,
    y_size: u32,
    config: &GlobalConfig,
) -> Result<Mesh, MeshError> {
    validate_size('x', x_size)?;
    validate_size('y', y_size)?;

    let (wide_x, wide_y) = (u128::from(x_size), u128::from(y_size));
    let vertex_count = saturate((wide_x + 1) * (wide_y + 1));
    let index_count = saturate(wide_x * wide_y).saturating_mul(QUAD_INDICES);
    check_limits(vertex_count, index_count, config)?;

    debug!(x_size, y_size, vertex_count, index_count, "building grid");

    let mut vertices = Vec::with_capacity(vertex_count);
    for y in 0..=y_size {
        for x in 0..=x_size {
            vertices.push(DVec3::new(x as f64, y as f64, 0.0));
        }
    }

    let mut indices = vec![0u32; index_count];
    let mut cursor = 0;
    let mut vi = 0;
    for _ in 0..y_size {
        for _ in 0..x_size {
            cursor = emit_quad(
                &mut indices,
                cursor,
                vi,
                vi + 1,
                vi + x_size + 1,
                vi + x_size + 2,
            );
            vi += 1;
        }
        // skip the last column to reach the next row
        vi += 1;
    }
    check_indices(&indices, cursor, vertices.len())?;

    Ok(Mesh::from_buffers(vertices, None, indices))
}
