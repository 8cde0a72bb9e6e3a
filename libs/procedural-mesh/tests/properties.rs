//! Structural properties shared by every generated mesh.

use approx::assert_relative_eq;
use config::constants::GlobalConfig;
use procedural_mesh::{
    create_box_surface, create_cube, create_grid, create_rounded_cube, BoxDimensions, BoxLayout,
    Caps, Mesh, RoundedPlacement,
};

fn box_sizes() -> Vec<BoxDimensions> {
    let mut sizes = Vec::new();
    for x in [1, 2, 3, 5] {
        for y in [1, 2, 4] {
            for z in [1, 2, 3, 6] {
                sizes.push(BoxDimensions::new(x, y, z).unwrap());
            }
        }
    }
    sizes
}

fn expected_vertices(d: BoxDimensions) -> usize {
    let (x, y, z) = (d.x as usize, d.y as usize, d.z as usize);
    8 + (x + y + z - 3) * 4 + ((x - 1) * (y - 1) + (x - 1) * (z - 1) + (y - 1) * (z - 1)) * 2
}

fn assert_well_formed(mesh: &Mesh, label: &str) {
    assert!(mesh.validate(), "{label}: invalid");
    assert_eq!(mesh.indices().len() % 6, 0, "{label}: not whole quads");
    assert!(
        mesh.indices().iter().all(|&i| (i as usize) < mesh.vertex_count()),
        "{label}: index out of range"
    );
}

#[test]
fn test_cube_vertex_count_follows_closed_form() {
    for d in box_sizes() {
        let mesh = create_cube(d).unwrap();
        assert_eq!(mesh.vertex_count(), expected_vertices(d), "{d:?}");
        assert_eq!(
            mesh.indices().len(),
            BoxLayout::new(d).index_count(Caps::Closed),
            "{d:?}"
        );
    }
}

#[test]
fn test_closed_cubes_are_watertight() {
    for d in box_sizes() {
        let mesh = create_cube(d).unwrap();
        let label = format!("{d:?}");
        assert_well_formed(&mesh, &label);
        assert!(mesh.is_watertight(), "{label}");
    }
}

#[test]
fn test_rounded_cubes_are_watertight_for_every_roundness() {
    for d in box_sizes() {
        for r in 0..=d.max_roundness() {
            let mesh = create_rounded_cube(d, r).unwrap();
            let label = format!("{d:?} r={r}");
            assert_well_formed(&mesh, &label);
            assert!(mesh.is_watertight(), "{label}");
            assert_eq!(mesh.normals().unwrap().len(), mesh.vertex_count(), "{label}");
        }
    }
}

#[test]
fn test_rounded_vertices_sit_at_roundness_from_core() {
    for d in box_sizes() {
        for r in 1..=d.max_roundness() {
            let placement = RoundedPlacement::new(d, r).unwrap();
            let mesh = create_rounded_cube(d, r).unwrap();
            for v in mesh.vertices() {
                assert_relative_eq!(v.distance(placement.inner(*v)), r as f64, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn test_every_vertex_is_referenced_when_closed() {
    for d in box_sizes() {
        let mesh = create_cube(d).unwrap();
        let mut used = vec![false; mesh.vertex_count()];
        for &i in mesh.indices() {
            used[i as usize] = true;
        }
        assert!(used.iter().all(|&u| u), "{d:?}");
    }
}

#[test]
fn test_open_bottom_boundary_is_one_ring() {
    for d in box_sizes() {
        let mesh = create_box_surface(d, Caps::OpenBottom, &GlobalConfig::default()).unwrap();
        assert_well_formed(&mesh, &format!("{d:?}"));
        assert_eq!(
            mesh.unmatched_edge_count(),
            BoxLayout::new(d).ring() as usize,
            "{d:?}"
        );
    }
}

#[test]
fn test_grids_are_well_formed() {
    for x in 1..=5 {
        for y in 1..=5 {
            let mesh = create_grid(x, y).unwrap();
            assert_well_formed(&mesh, &format!("{x}x{y}"));
            assert_eq!(mesh.vertex_count(), ((x + 1) * (y + 1)) as usize);
        }
    }
}

#[test]
fn test_mesh_serializes_buffers() {
    let mesh = create_cube(BoxDimensions::uniform(1).unwrap()).unwrap();
    let json = serde_json::to_value(&mesh).unwrap();
    assert_eq!(json["indices"].as_array().unwrap().len(), 36);
    assert_eq!(json["vertices"].as_array().unwrap().len(), 8);
    assert!(json["normals"].is_null());
}
