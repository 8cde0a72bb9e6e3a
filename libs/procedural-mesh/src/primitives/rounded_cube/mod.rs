//! # Rounded Cube Primitive
//!
//! Same topology as the cube; only vertex placement differs. Each lattice
//! point is clamped into an inner core box shrunk by the roundness on every
//! side, and the vertex is pushed back out from that core point by exactly
//! the roundness along the normalized offset:
//!
//! ```text
//! inner  = clamp(raw, r, size - r)
//! normal = normalize(raw - inner)
//! final  = inner + normal * r
//! ```
//!
//! On flat face regions only one axis is clamped, so the face stays flat.
//! Near edges and corners two or three axes are clamped and the normal turns
//! diagonal, which rounds the surface.

use config::constants::GlobalConfig;
use glam::DVec3;
use tracing::debug;

use super::box_surface::{
    build_surface, BoxDimensions, Caps, PlacedVertex, VertexPlacement,
};
use crate::error::MeshError;
use crate::mesh::Mesh;

/// Clamp-and-project placement for a box with rounded edges and corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedPlacement {
    roundness: f64,
    core_min: DVec3,
    core_max: DVec3,
}

impl RoundedPlacement {
    /// Builds the placement, rejecting a roundness above half the smallest
    /// dimension.
    ///
    /// # Examples
    /// ```
    /// use procedural_mesh::{BoxDimensions, RoundedPlacement};
    ///
    /// let dims = BoxDimensions::new(4, 4, 2).unwrap();
    /// assert!(RoundedPlacement::new(dims, 1).is_ok());
    /// assert!(RoundedPlacement::new(dims, 2).is_err());
    /// ```
    pub fn new(dims: BoxDimensions, roundness: u32) -> Result<Self, MeshError> {
        let max = dims.max_roundness();
        if roundness > max {
            return Err(MeshError::RoundnessTooLarge { roundness, max });
        }
        let r = roundness as f64;
        Ok(Self {
            roundness: r,
            core_min: DVec3::splat(r),
            core_max: dims.extent() - r,
        })
    }

    /// Corner-most points of the inner core box.
    pub fn core(&self) -> (DVec3, DVec3) {
        (self.core_min, self.core_max)
    }

    /// Closest point of the core box to `raw`.
    #[inline]
    pub fn inner(&self, raw: DVec3) -> DVec3 {
        raw.clamp(self.core_min, self.core_max)
    }
}

impl VertexPlacement for RoundedPlacement {
    /// A point already inside the core has no offset; its normal is zero and
    /// it stays on the core point instead of producing NaN.
    #[inline]
    fn place(&self, raw: DVec3) -> PlacedVertex {
        let inner = self.inner(raw);
        let normal = (raw - inner).normalize_or_zero();
        PlacedVertex {
            position: inner + normal * self.roundness,
            normal,
        }
    }

    fn emits_normals(&self) -> bool {
        true
    }
}

/// Creates a closed box surface with rounded edges and corners.
///
/// # Arguments
///
/// * `dims` - Subdivision counts along x, y and z
/// * `roundness` - Rounding radius, at most `min(x, y, z) / 2`
///
/// # Returns
///
/// A watertight mesh with unit outward normals. A roundness of 0 yields the
/// plain cube's positions with zero normals.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::{create_rounded_cube, BoxDimensions};
///
/// let dims = BoxDimensions::new(4, 4, 4).unwrap();
/// let mesh = create_rounded_cube(dims, 1).unwrap();
/// assert_eq!(mesh.normals().unwrap().len(), mesh.vertex_count());
/// ```
pub fn create_rounded_cube(dims: BoxDimensions, roundness: u32) -> Result<Mesh, MeshError> {
    create_rounded_cube_with_config(dims, roundness, &GlobalConfig::default())
}

/// Creates a rounded cube with explicit limits.
pub fn create_rounded_cube_with_config(
    dims: BoxDimensions,
    roundness: u32,
    config: &GlobalConfig,
) -> Result<Mesh, MeshError> {
    let placement = RoundedPlacement::new(dims, roundness)?;
    debug!(roundness, "rounding box surface");
    build_surface(dims, Caps::Closed, &placement, config)
}

#[cfg(test)]
mod tests;
