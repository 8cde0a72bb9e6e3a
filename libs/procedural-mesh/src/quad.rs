//! Quad emission shared by every generator.

/// Number of indices written per quad (two triangles).
pub const QUAD_INDICES: usize = 6;

/// Writes one quad as two triangles and returns the advanced cursor.
///
/// Corners follow the layout below; the triangles are `(a, c, b)` and
/// `(b, c, d)`, which share the `b`-`c` diagonal and have the same winding.
///
/// ```text
/// c------d
/// |      |
/// a------b
/// ```
///
/// Indices are not checked against the vertex count. Writing past the end of
/// `buffer` panics.
///
/// # Examples
/// ```
/// use procedural_mesh::quad::emit_quad;
///
/// let mut buffer = [0u32; 6];
/// let cursor = emit_quad(&mut buffer, 0, 0, 1, 2, 3);
/// assert_eq!(cursor, 6);
/// assert_eq!(buffer, [0, 2, 1, 1, 2, 3]);
/// ```
#[inline]
pub fn emit_quad(buffer: &mut [u32], cursor: usize, a: u32, b: u32, c: u32, d: u32) -> usize {
    buffer[cursor..cursor + QUAD_INDICES].copy_from_slice(&[a, c, b, b, c, d]);
    cursor + QUAD_INDICES
}
