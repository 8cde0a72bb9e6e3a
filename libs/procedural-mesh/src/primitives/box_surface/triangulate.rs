//! Quad emission for the side faces and the caps.
//!
//! Quads are written in a fixed order: sides level by level, then the top
//! cap, then the bottom cap. Each function takes the write cursor and returns
//! it advanced.

use super::layout::BoxLayout;
use crate::quad::emit_quad;

/// Emits `ring` quads per level between consecutive rings.
///
/// The last quad of each level is the seam: it joins the final ring vertex
/// back to the first one, the only place where ring neighbours are not
/// consecutive indices.
pub(super) fn emit_sides(layout: &BoxLayout, buffer: &mut [u32], mut cursor: usize) -> usize {
    let ring = layout.ring();
    let mut v = 0;
    for _ in 0..layout.dims().y {
        for _ in 0..ring - 1 {
            cursor = emit_quad(buffer, cursor, v, v + 1, v + ring, v + ring + 1);
            v += 1;
        }
        cursor = emit_quad(buffer, cursor, v, v + 1 - ring, v + ring, v + 1);
        v += 1;
    }
    cursor
}

/// Emits the top cap, one row of quads per `z`, front to back.
///
/// The first row borders the front ring segment and the last row the back
/// one. In between, the row walks down the left ring segment while the
/// interior grid and the right ring segment walk up; [`BoxLayout::top_index`]
/// resolves each corner to whichever of the three it lies on. A cap one unit
/// wide or deep has no interior vertices and is stitched from ring vertices
/// alone.
pub(super) fn emit_top_cap(layout: &BoxLayout, buffer: &mut [u32], mut cursor: usize) -> usize {
    let dims = layout.dims();
    for z in 0..dims.z {
        for x in 0..dims.x {
            cursor = emit_quad(
                buffer,
                cursor,
                layout.top_index(x, z),
                layout.top_index(x + 1, z),
                layout.top_index(x, z + 1),
                layout.top_index(x + 1, z + 1),
            );
        }
    }
    cursor
}

/// Emits the bottom cap in the same row order as the top cap, with the rows
/// of each quad swapped so the faces point down.
pub(super) fn emit_bottom_cap(layout: &BoxLayout, buffer: &mut [u32], mut cursor: usize) -> usize {
    let dims = layout.dims();
    for z in 0..dims.z {
        for x in 0..dims.x {
            cursor = emit_quad(
                buffer,
                cursor,
                layout.bottom_index(x, z + 1),
                layout.bottom_index(x + 1, z + 1),
                layout.bottom_index(x, z),
                layout.bottom_index(x + 1, z),
            );
        }
    }
    cursor
}
