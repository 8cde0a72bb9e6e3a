//! # Mesh Data Structure
//!
//! Output container for the generators: a vertex buffer, an optional
//! per-vertex normal buffer and a flat triangle index buffer.

use std::collections::HashMap;

use glam::DVec3;
use serde::Serialize;

/// A triangle mesh with vertices, optional normals and flat indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the rendering boundary.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::Mesh;
/// use glam::DVec3;
///
/// let mesh = Mesh::from_buffers(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     None,
///     vec![0, 2, 1],
/// );
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Optional vertex normals, parallel to `vertices`
    normals: Option<Vec<DVec3>>,
    /// Triangle indices (3 per triangle, 6 per quad)
    indices: Vec<u32>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps finished buffers without copying them.
    pub fn from_buffers(
        vertices: Vec<DVec3>,
        normals: Option<Vec<DVec3>>,
        indices: Vec<u32>,
    ) -> Self {
        Self {
            vertices,
            normals,
            indices,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the vertex normals, if the generator produced them.
    #[inline]
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Returns the flat index buffer.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Iterates over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Recomputes per-vertex normals from face geometry.
    ///
    /// Each triangle contributes its unnormalized face normal, so larger faces
    /// weigh more. Vertices touched by no triangle get a zero normal.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in self.indices.chunks_exact(3) {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Index buffer holds whole triangles
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex
    /// - Normals, when present, are parallel to the vertices
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.indices.len() % 3 != 0 {
            return false;
        }
        if let Some(normals) = &self.normals {
            if normals.len() != self.vertices.len() {
                return false;
            }
        }

        let vertex_count = self.vertices.len();
        self.triangles().all(|[a, b, c]| {
            let in_range = [a, b, c].iter().all(|&i| (i as usize) < vertex_count);
            in_range && a != b && b != c && a != c
        })
    }

    /// Counts directed edges that are not matched by exactly one opposite
    /// edge.
    ///
    /// Zero means every edge borders exactly two triangles with opposite
    /// orientation: the surface is closed and consistently wound.
    pub fn unmatched_edge_count(&self) -> usize {
        let mut edges: HashMap<(u32, u32), u32> = HashMap::with_capacity(self.indices.len());
        for [a, b, c] in self.triangles() {
            for edge in [(a, b), (b, c), (c, a)] {
                *edges.entry(edge).or_insert(0) += 1;
            }
        }

        edges
            .iter()
            .filter(|&(&(from, to), &count)| count != 1 || edges.get(&(to, from)) != Some(&1))
            .count()
    }

    /// Returns true if the mesh is a closed, consistently oriented surface.
    pub fn is_watertight(&self) -> bool {
        !self.indices.is_empty() && self.unmatched_edge_count() == 0
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            let mut result = Vec::with_capacity(normals.len() * 3);
            for n in normals {
                result.push(n.x as f32);
                result.push(n.y as f32);
                result.push(n.z as f32);
            }
            result
        })
    }
}
