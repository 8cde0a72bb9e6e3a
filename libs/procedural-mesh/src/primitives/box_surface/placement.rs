//! Vertex placement strategies.
//!
//! The box topology is fixed; a placement only decides where each raw
//! lattice point ends up and which normal it carries.

use config::constants::GlobalConfig;
use glam::DVec3;

/// Final position and normal of one vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedVertex {
    pub position: DVec3,
    pub normal: DVec3,
}

/// Maps raw lattice points to final vertex positions.
pub trait VertexPlacement: Sync {
    /// Places the vertex generated at raw lattice point `raw`.
    fn place(&self, raw: DVec3) -> PlacedVertex;

    /// Whether the normals from [`VertexPlacement::place`] belong in the
    /// output mesh.
    fn emits_normals(&self) -> bool;
}

/// Leaves every vertex on its lattice point. Used by the plain cube.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatPlacement;

impl VertexPlacement for FlatPlacement {
    #[inline]
    fn place(&self, raw: DVec3) -> PlacedVertex {
        PlacedVertex {
            position: raw,
            normal: DVec3::ZERO,
        }
    }

    fn emits_normals(&self) -> bool {
        false
    }
}

/// Places every point yielded by `points`, keeping fill order.
///
/// With the `parallel` feature, requests above the configured threshold are
/// mapped on the rayon pool; the collect keeps input order.
pub(crate) fn place_all<P, I>(
    points: I,
    expected: usize,
    placement: &P,
    config: &GlobalConfig,
) -> Vec<PlacedVertex>
where
    P: VertexPlacement,
    I: Iterator<Item = DVec3>,
{
    #[cfg(feature = "parallel")]
    if expected >= config.parallel_threshold {
        use rayon::prelude::*;

        let raw: Vec<DVec3> = points.collect();
        return raw.par_iter().map(|&p| placement.place(p)).collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = config;

    let mut placed = Vec::with_capacity(expected);
    placed.extend(points.map(|p| placement.place(p)));
    placed
}
