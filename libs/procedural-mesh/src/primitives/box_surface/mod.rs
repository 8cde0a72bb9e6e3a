//! # Box Surface
//!
//! Shared topology for the cube and the rounded cube.
//!
//! The surface is stored as `y_size + 1` perimeter rings followed by the
//! interior grids of the top and bottom faces. Every index is computed in
//! closed form from the subdivision counts (see [`layout`]); no adjacency
//! structure is built. Vertex positions come from a [`VertexPlacement`]
//! strategy so both variants share one triangulation.

pub mod lattice;
pub mod layout;
pub mod placement;
mod triangulate;

pub use lattice::BoxLattice;
pub use layout::BoxLayout;
pub use placement::{FlatPlacement, PlacedVertex, VertexPlacement};

use config::constants::GlobalConfig;
use glam::DVec3;
use tracing::{debug, error};

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Subdivision counts of a box along each axis.
///
/// The box spans `[0, x] × [0, y] × [0, z]` in local units, one unit per
/// subdivision.
///
/// # Examples
/// ```
/// use procedural_mesh::BoxDimensions;
///
/// let dims = BoxDimensions::new(2, 3, 4).unwrap();
/// assert_eq!(dims.min_axis(), 2);
/// assert!(BoxDimensions::new(0, 1, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxDimensions {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl BoxDimensions {
    /// Validates and builds a set of dimensions. Every axis must be at least 1.
    pub fn new(x: u32, y: u32, z: u32) -> Result<Self, MeshError> {
        let dims = Self { x, y, z };
        dims.validate()?;
        Ok(dims)
    }

    /// Checks every axis is at least 1. Needed for values built from the
    /// public fields directly.
    pub fn validate(&self) -> Result<(), MeshError> {
        validate_size('x', self.x)?;
        validate_size('y', self.y)?;
        validate_size('z', self.z)
    }

    /// Builds a cube with the same count on every axis.
    pub fn uniform(size: u32) -> Result<Self, MeshError> {
        Self::new(size, size, size)
    }

    /// Smallest subdivision count.
    pub fn min_axis(&self) -> u32 {
        self.x.min(self.y).min(self.z)
    }

    /// Largest rounding radius these dimensions accept.
    pub fn max_roundness(&self) -> u32 {
        self.min_axis() / 2
    }

    /// Dimensions as a float vector, the far corner of the box.
    pub fn extent(&self) -> DVec3 {
        DVec3::new(self.x as f64, self.y as f64, self.z as f64)
    }
}

/// Rejects a zero subdivision count on `axis`.
pub(crate) fn validate_size(axis: char, value: u32) -> Result<(), MeshError> {
    if value == 0 {
        return Err(MeshError::InvalidDimensions { axis });
    }
    Ok(())
}

/// Which horizontal faces are triangulated.
///
/// Both variants store the bottom interior vertices, so the vertex buffer is
/// the same; only the index buffer differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Caps {
    /// Top and bottom faces; the surface is watertight.
    #[default]
    Closed,
    /// Top face only; the bottom ring is left as an open boundary.
    OpenBottom,
}

/// Builds the box surface with the given placement strategy.
///
/// Dimensions are validated and sizes checked against `config` before
/// allocation. After filling, the vertex count, the index cursor and the
/// largest emitted index are checked against the closed-form layout; any
/// mismatch is an [`MeshError::InvalidTopology`].
pub fn build_surface<P: VertexPlacement>(
    dims: BoxDimensions,
    caps: Caps,
    placement: &P,
    config: &GlobalConfig,
) -> Result<Mesh, MeshError> {
    dims.validate()?;
    let layout = BoxLayout::new(dims);
    let vertex_count = layout.vertex_count();
    let index_count = layout.index_count(caps);
    check_limits(vertex_count, index_count, config)?;

    debug!(
        x = dims.x,
        y = dims.y,
        z = dims.z,
        ?caps,
        vertex_count,
        index_count,
        "building box surface"
    );

    let placed = placement::place_all(
        BoxLattice::new(dims).points(),
        vertex_count,
        placement,
        config,
    );
    if placed.len() != vertex_count {
        error!(
            expected = vertex_count,
            actual = placed.len(),
            "vertex fill disagrees with layout"
        );
        return Err(MeshError::invalid_topology(format!(
            "filled {} vertices, layout expects {}",
            placed.len(),
            vertex_count
        )));
    }

    let mut indices = vec![0u32; index_count];
    let mut cursor = triangulate::emit_sides(&layout, &mut indices, 0);
    cursor = triangulate::emit_top_cap(&layout, &mut indices, cursor);
    if caps == Caps::Closed {
        cursor = triangulate::emit_bottom_cap(&layout, &mut indices, cursor);
    }
    check_indices(&indices, cursor, vertex_count)?;

    let (vertices, normals): (Vec<DVec3>, Vec<DVec3>) = placed
        .into_iter()
        .map(|vertex| (vertex.position, vertex.normal))
        .unzip();
    let normals = placement.emits_normals().then_some(normals);

    Ok(Mesh::from_buffers(vertices, normals, indices))
}

/// Rejects buffers larger than the configured limits.
pub(crate) fn check_limits(
    vertex_count: usize,
    index_count: usize,
    config: &GlobalConfig,
) -> Result<(), MeshError> {
    if vertex_count > config.max_vertices {
        return Err(MeshError::TooManyVertices {
            count: vertex_count,
            max: config.max_vertices,
        });
    }
    if index_count > config.max_indices() {
        return Err(MeshError::TooManyIndices {
            count: index_count,
            max: config.max_indices(),
        });
    }
    Ok(())
}

/// Verifies the index buffer was filled exactly and stays in range.
pub(crate) fn check_indices(
    indices: &[u32],
    cursor: usize,
    vertex_count: usize,
) -> Result<(), MeshError> {
    if cursor != indices.len() {
        error!(cursor, len = indices.len(), "index buffer not filled");
        return Err(MeshError::invalid_topology(format!(
            "index cursor stopped at {} of {}",
            cursor,
            indices.len()
        )));
    }
    if let Some(&max) = indices.iter().max() {
        if max as usize >= vertex_count {
            error!(max, vertex_count, "index out of range");
            return Err(MeshError::invalid_topology(format!(
                "index {max} out of range for {vertex_count} vertices"
            )));
        }
    }
    Ok(())
}
