//! Tests for the rounded cube primitive.

use approx::assert_relative_eq;

use super::*;
use crate::primitives::{create_cube, BoxLattice};

fn dims(x: u32, y: u32, z: u32) -> BoxDimensions {
    BoxDimensions::new(x, y, z).unwrap()
}

#[test]
fn test_zero_roundness_matches_cube() {
    for d in [dims(1, 1, 1), dims(3, 2, 4)] {
        let rounded = create_rounded_cube(d, 0).unwrap();
        let cube = create_cube(d).unwrap();
        assert_eq!(rounded.vertices(), cube.vertices());
        assert_eq!(rounded.indices(), cube.indices());

        // the core is the whole box, so every offset is zero
        let normals = rounded.normals().unwrap();
        assert!(normals.iter().all(|n| *n == DVec3::ZERO));
    }
}

#[test]
fn test_topology_is_shared_with_cube() {
    let d = dims(4, 6, 5);
    let rounded = create_rounded_cube(d, 2).unwrap();
    let cube = create_cube(d).unwrap();
    assert_eq!(rounded.vertex_count(), cube.vertex_count());
    assert_eq!(rounded.indices(), cube.indices());
    assert!(rounded.validate());
    assert!(rounded.is_watertight());
}

#[test]
fn test_vertices_sit_at_roundness_from_core() {
    let d = dims(4, 4, 4);
    let placement = RoundedPlacement::new(d, 1).unwrap();
    let mesh = create_rounded_cube(d, 1).unwrap();
    let normals = mesh.normals().unwrap();

    for (v, n) in mesh.vertices().iter().zip(normals) {
        let inner = placement.inner(*v);
        assert_relative_eq!(v.distance(inner), 1.0, epsilon = 1e-9);
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-9);
        assert!(v.abs_diff_eq(inner + *n, 1e-9));
    }
}

#[test]
fn test_corner_is_pushed_diagonally() {
    let d = dims(4, 4, 4);
    let mesh = create_rounded_cube(d, 1).unwrap();
    // vertex 0 is the raw corner (0, 0, 0)
    let corner = mesh.vertices()[0];
    let normal = mesh.normals().unwrap()[0];
    let diagonal = DVec3::splat(-1.0).normalize();
    assert!(normal.abs_diff_eq(diagonal, 1e-12));
    assert!(corner.abs_diff_eq(DVec3::ONE + diagonal, 1e-12));
}

#[test]
fn test_flat_face_stays_flat() {
    let d = dims(4, 4, 4);
    let mesh = create_rounded_cube(d, 1).unwrap();
    let normals = mesh.normals().unwrap();
    // front points within the core's x and y range stay on the z = 0 plane
    let front: Vec<usize> = BoxLattice::new(d)
        .points()
        .enumerate()
        .filter(|(_, p)| p.z == 0.0 && (1.0..=3.0).contains(&p.x) && (1.0..=3.0).contains(&p.y))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(front.len(), 9);
    for i in front {
        assert_eq!(mesh.vertices()[i].z, 0.0);
        assert_eq!(normals[i], DVec3::NEG_Z);
    }
}

#[test]
fn test_bounding_box_is_preserved() {
    let d = dims(6, 4, 8);
    let mesh = create_rounded_cube(d, 2).unwrap();
    let (min, max) = mesh.bounding_box();
    assert!(min.abs_diff_eq(DVec3::ZERO, 1e-9));
    assert!(max.abs_diff_eq(d.extent(), 1e-9));
}

#[test]
fn test_roundness_limit() {
    let d = dims(5, 7, 9);
    assert!(create_rounded_cube(d, 2).is_ok());
    assert_eq!(
        create_rounded_cube(d, 3).unwrap_err(),
        MeshError::RoundnessTooLarge { roundness: 3, max: 2 }
    );
}

#[test]
fn test_unit_cube_only_accepts_zero() {
    let d = dims(1, 1, 1);
    let mesh = create_rounded_cube(d, 0).unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert!(mesh.is_watertight());
    assert!(create_rounded_cube(d, 1).is_err());
}

#[test]
fn test_core_bounds() {
    let placement = RoundedPlacement::new(dims(4, 6, 8), 2).unwrap();
    let (min, max) = placement.core();
    assert_eq!(min, DVec3::splat(2.0));
    assert_eq!(max, DVec3::new(2.0, 4.0, 6.0));
}

#[test]
fn test_parallel_placement_matches_sequential() {
    let d = dims(6, 5, 7);
    let sequential = create_rounded_cube(d, 2).unwrap();
    let eager = GlobalConfig::new(1.0e-9, 1_000_000, 1).unwrap();
    let parallel = create_rounded_cube_with_config(d, 2, &eager).unwrap();
    assert_eq!(parallel, sequential);
}
