//! Closed-form index arithmetic for the box surface.
//!
//! Vertex buffer layout:
//!
//! ```text
//! [ ring 0 | ring 1 | ... | ring y | top interior | bottom interior ]
//! ```
//!
//! A ring walks the horizontal perimeter at one height: the front edge
//! (`z = 0`, x ascending), the right edge (`x = x_size`, z ascending), the
//! back edge (`z = z_size`, x descending) and the left edge (`x = 0`, z
//! descending). Corners appear once. Interior grids are row-major with `z`
//! as the row.

use super::{BoxDimensions, Caps};
use crate::quad::QUAD_INDICES;

/// Index calculator for one set of box dimensions.
///
/// # Examples
/// ```
/// use procedural_mesh::{BoxDimensions, BoxLayout};
///
/// let layout = BoxLayout::new(BoxDimensions::new(2, 2, 2).unwrap());
/// assert_eq!(layout.ring(), 8);
/// assert_eq!(layout.vertex_count(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxLayout {
    dims: BoxDimensions,
}

impl BoxLayout {
    pub fn new(dims: BoxDimensions) -> Self {
        Self { dims }
    }

    pub fn dims(&self) -> BoxDimensions {
        self.dims
    }

    /// Vertices per ring: `(x + z) * 2`.
    #[inline]
    pub fn ring(&self) -> u32 {
        (self.dims.x + self.dims.z) * 2
    }

    /// Total vertex count.
    ///
    /// `8` corners, `(x + y + z - 3) * 4` edge vertices and
    /// `((x-1)(y-1) + (x-1)(z-1) + (y-1)(z-1)) * 2` face vertices. Computed in
    /// 128 bits and saturated so oversized requests can be rejected rather
    /// than overflow.
    pub fn vertex_count(&self) -> usize {
        let (x, y, z) = self.wide();
        let corners = 8;
        let edges = (x + y + z - 3) * 4;
        let faces = ((x - 1) * (y - 1) + (x - 1) * (z - 1) + (y - 1) * (z - 1)) * 2;
        saturate(corners + edges + faces)
    }

    /// Vertices in one interior grid: `(x - 1) * (z - 1)`.
    pub fn cap_interior_count(&self) -> usize {
        let (x, _, z) = self.wide();
        saturate((x - 1) * (z - 1))
    }

    /// Indices covering the side faces: `y * ring * 6`.
    pub fn side_index_count(&self) -> usize {
        let (x, y, z) = self.wide();
        saturate(y * (x + z) * 2 * QUAD_INDICES as u128)
    }

    /// Indices covering one horizontal face: `x * z * 6`.
    pub fn cap_index_count(&self) -> usize {
        let (x, _, z) = self.wide();
        saturate(x * z * QUAD_INDICES as u128)
    }

    /// Total index count for the requested caps.
    pub fn index_count(&self, caps: Caps) -> usize {
        let caps_count = match caps {
            Caps::Closed => 2,
            Caps::OpenBottom => 1,
        };
        self.side_index_count()
            .saturating_add(self.cap_index_count().saturating_mul(caps_count))
    }

    /// Position of a perimeter lattice point `(x, z)` within a ring.
    ///
    /// The point must lie on the perimeter.
    pub fn ring_position(&self, x: u32, z: u32) -> u32 {
        let BoxDimensions { x: sx, z: sz, .. } = self.dims;
        debug_assert!(
            x == 0 || z == 0 || x == sx || z == sz,
            "({x}, {z}) is not on the perimeter"
        );
        if z == 0 {
            x
        } else if x == sx {
            sx + z
        } else if z == sz {
            sx + sz + (sx - x)
        } else {
            2 * sx + sz + (sz - z)
        }
    }

    /// Buffer index of ring position `pos` at height `level`.
    #[inline]
    pub fn ring_index(&self, level: u32, pos: u32) -> u32 {
        level * self.ring() + pos
    }

    /// First index of the top interior grid, right after the last ring.
    #[inline]
    pub fn top_interior_start(&self) -> u32 {
        self.ring() * (self.dims.y + 1)
    }

    /// First index of the bottom interior grid.
    #[inline]
    pub fn bottom_interior_start(&self) -> u32 {
        self.top_interior_start() + (self.dims.x - 1) * (self.dims.z - 1)
    }

    /// Buffer index of lattice point `(x, z)` on the top face.
    pub fn top_index(&self, x: u32, z: u32) -> u32 {
        self.cap_index(self.dims.y, self.top_interior_start(), x, z)
    }

    /// Buffer index of lattice point `(x, z)` on the bottom face.
    pub fn bottom_index(&self, x: u32, z: u32) -> u32 {
        self.cap_index(0, self.bottom_interior_start(), x, z)
    }

    fn cap_index(&self, level: u32, interior_start: u32, x: u32, z: u32) -> u32 {
        let BoxDimensions { x: sx, z: sz, .. } = self.dims;
        if x == 0 || z == 0 || x == sx || z == sz {
            self.ring_index(level, self.ring_position(x, z))
        } else {
            interior_start + (z - 1) * (sx - 1) + (x - 1)
        }
    }

    fn wide(&self) -> (u128, u128, u128) {
        (
            u128::from(self.dims.x),
            u128::from(self.dims.y),
            u128::from(self.dims.z),
        )
    }
}

/// Narrows a wide count, saturating at `usize::MAX` so limit checks reject it.
pub(crate) fn saturate(count: u128) -> usize {
    usize::try_from(count).unwrap_or(usize::MAX)
}
