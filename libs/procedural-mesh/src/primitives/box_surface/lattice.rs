//! Vertex fill order of the box surface.
//!
//! [`BoxLattice::points`] yields the raw integer lattice points lazily, in
//! exactly the order the vertex buffer stores them. A host that spreads
//! generation over several frames can pull a chunk at a time from the same
//! iterator; the synchronous builders collect it in one go.

use glam::DVec3;

use super::BoxDimensions;

/// Lazily enumerates the raw lattice points of a box surface.
///
/// # Examples
/// ```
/// use procedural_mesh::{BoxDimensions, BoxLattice};
/// use glam::DVec3;
///
/// let lattice = BoxLattice::new(BoxDimensions::new(1, 1, 1).unwrap());
/// let mut points = lattice.points();
/// assert_eq!(points.next(), Some(DVec3::new(0.0, 0.0, 0.0)));
/// assert_eq!(points.next(), Some(DVec3::new(1.0, 0.0, 0.0)));
/// assert_eq!(points.count(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxLattice {
    dims: BoxDimensions,
}

impl BoxLattice {
    pub fn new(dims: BoxDimensions) -> Self {
        Self { dims }
    }

    /// All surface points: every ring bottom to top, then the top interior
    /// grid, then the bottom interior grid.
    pub fn points(self) -> impl Iterator<Item = DVec3> {
        let top = self.dims.y;
        (0..=top)
            .flat_map(move |level| self.ring_points(level))
            .chain(self.interior_points(top))
            .chain(self.interior_points(0))
    }

    /// One perimeter ring at height `level`.
    pub fn ring_points(self, level: u32) -> impl Iterator<Item = DVec3> {
        let BoxDimensions { x: sx, z: sz, .. } = self.dims;
        let front = (0..=sx).map(|x| (x, 0));
        let right = (1..=sz).map(move |z| (sx, z));
        let back = (0..sx).rev().map(move |x| (x, sz));
        let left = (1..sz).rev().map(|z| (0, z));

        front
            .chain(right)
            .chain(back)
            .chain(left)
            .map(move |(x, z)| point(x, level, z))
    }

    /// Interior grid of a horizontal face at height `level`, row-major.
    pub fn interior_points(self, level: u32) -> impl Iterator<Item = DVec3> {
        let BoxDimensions { x: sx, z: sz, .. } = self.dims;
        (1..sz).flat_map(move |z| (1..sx).map(move |x| point(x, level, z)))
    }
}

fn point(x: u32, y: u32, z: u32) -> DVec3 {
    DVec3::new(x as f64, y as f64, z as f64)
}
