use cgmath::Vector3;
use meshpack::data_structures::scene::{Scene, SceneMaterial};
use meshpack::flatten::{FlatStats, flatten};

use crate::common::test_utils::{submesh, two_submesh_scene};

mod common;

#[test]
fn packs_the_reference_scene_into_tiled_ranges() {
    let (flat, stats) = flatten(&two_submesh_scene());

    assert_eq!(flat.meshes.len(), 2);

    let a = flat.meshes[0];
    assert_eq!(a.color, Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(a.vertex_base, 0);
    assert_eq!(a.vertex_count, 4);
    assert_eq!(a.index_base, 0);
    assert_eq!(a.index_count, 6);

    let b = flat.meshes[1];
    assert_eq!(b.color, Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(b.vertex_base, 4);
    assert_eq!(b.vertex_count, 3);
    assert_eq!(b.index_base, 6);
    assert_eq!(b.index_count, 3);

    assert_eq!(flat.vertices.len(), 7);
    assert_eq!(flat.indices.len(), 9);
    assert_eq!(
        stats,
        FlatStats {
            skipped_faces: 1,
            defaulted_materials: 1,
        }
    );
}

#[test]
fn offsets_indices_by_the_submesh_vertex_base() {
    let (flat, _) = flatten(&two_submesh_scene());

    assert_eq!(flat.indices[..6], [0, 1, 2, 0, 2, 3]);
    // Submesh B's triangle references vertices 4..7 of the global pool.
    assert_eq!(flat.indices[6..], [4, 5, 6]);
}

#[test]
fn copies_positions_verbatim_with_zeroed_normals() {
    let (flat, _) = flatten(&two_submesh_scene());

    assert_eq!(flat.vertices[0].position, [0.0, 0.0, 0.0]);
    assert_eq!(flat.vertices[3].position, [0.0, 1.0, 0.0]);
    assert_eq!(flat.vertices[4].position, [0.0, 0.0, 1.0]);
    assert_eq!(flat.vertices[6].position, [0.0, 1.0, 1.0]);
    for vertex in &flat.vertices {
        assert_eq!(vertex.normal, [0.0; 3]);
    }
}

#[test]
fn ranges_tile_the_pools_without_gaps() {
    let scene = Scene {
        meshes: vec![
            submesh(
                &[[0.0; 3], [1.0; 3], [2.0; 3], [3.0; 3], [4.0; 3]],
                &[&[0, 1, 2], &[2, 3, 4], &[0, 1, 2, 3]],
                None,
            ),
            submesh(&[], &[], None),
            submesh(&[[5.0; 3], [6.0; 3], [7.0; 3]], &[&[0, 1, 2]], None),
        ],
        materials: Vec::new(),
    };

    let (flat, _) = flatten(&scene);

    let mut expected_vertex_base = 0;
    let mut expected_index_base = 0;
    for mesh in &flat.meshes {
        assert_eq!(mesh.vertex_base, expected_vertex_base);
        assert_eq!(mesh.index_base, expected_index_base);
        assert_eq!(mesh.index_count % 3, 0);
        expected_vertex_base += mesh.vertex_count;
        expected_index_base += mesh.index_count;
    }
    assert_eq!(expected_vertex_base as usize, flat.vertices.len());
    assert_eq!(expected_index_base as usize, flat.indices.len());
}

#[test]
fn a_quad_face_contributes_nothing() {
    let scene = Scene {
        meshes: vec![submesh(
            &[[0.0; 3], [1.0; 3], [2.0; 3], [3.0; 3]],
            &[&[0, 1, 2, 3]],
            None,
        )],
        materials: Vec::new(),
    };

    let (flat, stats) = flatten(&scene);

    assert_eq!(flat.meshes[0].vertex_count, 4);
    assert_eq!(flat.meshes[0].index_count, 0);
    assert!(flat.indices.is_empty());
    assert_eq!(stats.skipped_faces, 1);
}

#[test]
fn unresolvable_materials_default_to_black() {
    let black = Vector3::new(0.0, 0.0, 0.0);
    let scene = Scene {
        meshes: vec![
            // Material exists but has no diffuse key.
            submesh(&[[0.0; 3]], &[], Some(0)),
            // Material id points past the table.
            submesh(&[[1.0; 3]], &[], Some(7)),
            // No material assigned at all.
            submesh(&[[2.0; 3]], &[], None),
        ],
        materials: vec![SceneMaterial { diffuse: None }],
    };

    let (flat, stats) = flatten(&scene);

    for mesh in &flat.meshes {
        assert_eq!(mesh.color, black);
    }
    assert_eq!(stats.defaulted_materials, 3);
}

#[test]
fn empty_scene_produces_empty_buffers() {
    let (flat, stats) = flatten(&Scene::default());

    assert!(flat.meshes.is_empty());
    assert!(flat.vertices.is_empty());
    assert!(flat.indices.is_empty());
    assert_eq!(stats, FlatStats::default());
}

#[test]
fn zero_vertex_submesh_yields_an_empty_mesh_record() {
    let scene = Scene {
        meshes: vec![submesh(&[], &[], None)],
        materials: Vec::new(),
    };

    let (flat, _) = flatten(&scene);

    assert_eq!(flat.meshes.len(), 1);
    assert_eq!(flat.meshes[0].vertex_count, 0);
    assert_eq!(flat.meshes[0].index_count, 0);
    assert!(flat.vertices.is_empty());
}
