//! Output formats: a human-readable summary or the raw buffers as JSON.

use std::io::Write;

use anyhow::{Context, Result};
use config::constants::{approx_zero, GlobalConfig};
use procedural_mesh::Mesh;

/// Headline numbers for one mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub vertices: usize,
    pub triangles: usize,
    pub watertight: bool,
    /// Triangles with zero area
    pub degenerate_triangles: usize,
    pub bounds_min: [f64; 3],
    pub bounds_max: [f64; 3],
    /// Normals of unit length, `None` when the mesh carries no normals
    pub unit_normals: Option<usize>,
}

impl Summary {
    pub fn of(mesh: &Mesh, config: &GlobalConfig) -> Self {
        let (min, max) = mesh.bounding_box();
        let vertices = mesh.vertices();
        let degenerate_triangles = mesh
            .triangles()
            .filter(|&[a, b, c]| {
                let (pa, pb, pc) = (
                    vertices[a as usize],
                    vertices[b as usize],
                    vertices[c as usize],
                );
                approx_zero((pb - pa).cross(pc - pa).length())
            })
            .count();
        let unit_normals = mesh.normals().map(|normals| {
            normals
                .iter()
                .filter(|n| (n.length() - 1.0).abs() <= config.tolerance)
                .count()
        });
        Self {
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
            watertight: mesh.is_watertight(),
            degenerate_triangles,
            bounds_min: min.to_array(),
            bounds_max: max.to_array(),
            unit_normals,
        }
    }
}

pub fn write_summary(mesh: &Mesh, config: &GlobalConfig, mut out: impl Write) -> Result<()> {
    let summary = Summary::of(mesh, config);
    writeln!(out, "vertices:   {}", summary.vertices)?;
    writeln!(out, "triangles:  {}", summary.triangles)?;
    writeln!(out, "watertight: {}", summary.watertight)?;
    writeln!(out, "degenerate: {}", summary.degenerate_triangles)?;
    writeln!(
        out,
        "bounds:     {:?} .. {:?}",
        summary.bounds_min, summary.bounds_max
    )?;
    match summary.unit_normals {
        Some(unit) => writeln!(out, "normals:    {unit}/{} unit", summary.vertices)?,
        None => writeln!(out, "normals:    none")?,
    }
    Ok(())
}

pub fn write_json(mesh: &Mesh, mut out: impl Write) -> Result<()> {
    serde_json::to_writer(&mut out, mesh).context("Failed to serialize mesh")?;
    writeln!(out)?;
    Ok(())
}
