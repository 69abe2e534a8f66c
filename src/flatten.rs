//! Scene flattening: merges per-submesh geometry into shared global pools.
//!
//! The flattener is a pure function over an imported scene. Each submesh
//! contributes a slice of the global vertex and index pools, recorded as
//! base/count pairs in its mesh record. Ranges are appended in scene order
//! and tile the pools with no gaps or overlaps.
//!
//! Upstream import is trusted to have triangulated faces and merged
//! identical vertices; nothing is validated here. Whatever slipped through
//! anyway is handled permissively: faces that are not triangles are dropped
//! and unresolvable materials fall back to black. Both cases are counted in
//! [`FlatStats`] so callers can assert on them instead of scraping logs.

use cgmath::Vector3;

use crate::data_structures::{
    model::{FlatModel, Mesh, Vertex},
    scene::{Scene, SceneMaterial},
};

/// Counts of everything the flattener papered over during one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlatStats {
    /// Faces dropped because they did not have exactly three vertex references.
    pub skipped_faces: u32,
    /// Submeshes whose diffuse lookup failed and fell back to black.
    pub defaulted_materials: u32,
}

/// Flattens a scene into a mesh table plus shared vertex/index pools.
///
/// Empty scenes are not an error; they produce empty buffers. The returned
/// stats make the silent-drop and silent-default behaviour observable.
pub fn flatten(scene: &Scene) -> (FlatModel, FlatStats) {
    let mut flat = FlatModel::default();
    let mut stats = FlatStats::default();

    for submesh in &scene.meshes {
        let vertex_base = flat.vertices.len() as u32;
        let index_base = flat.indices.len() as u32;

        let color = resolve_diffuse(submesh.material_id, &scene.materials, &mut stats);

        for position in &submesh.positions {
            flat.vertices.push(Vertex {
                position: [position.x, position.y, position.z],
                // Reserved on disk, see `Vertex::normal`.
                normal: [0.0; 3],
            });
        }

        let mut index_count = 0u32;
        for face in &submesh.faces {
            match face.0.as_slice() {
                // Local references become global by the submesh's vertex base.
                &[a, b, c] => {
                    flat.indices
                        .extend([vertex_base + a, vertex_base + b, vertex_base + c]);
                    index_count += 3;
                }
                // Anything that is not a triangle is dropped, not triangulated.
                _ => stats.skipped_faces += 1,
            }
        }

        let mesh = Mesh {
            color,
            vertex_base,
            vertex_count: submesh.vertex_count() as u32,
            index_base,
            index_count,
        };
        log_mesh(&mesh);
        flat.meshes.push(mesh);
    }

    (flat, stats)
}

fn resolve_diffuse(
    material_id: Option<usize>,
    materials: &[SceneMaterial],
    stats: &mut FlatStats,
) -> Vector3<f32> {
    let diffuse = material_id
        .and_then(|id| materials.get(id))
        .and_then(|material| material.diffuse);
    match diffuse {
        Some([r, g, b]) => Vector3::new(r, g, b),
        None => {
            stats.defaulted_materials += 1;
            Vector3::new(0.0, 0.0, 0.0)
        }
    }
}

// Advisory per-mesh summary; has no effect on the produced buffers.
fn log_mesh(mesh: &Mesh) {
    log::info!(
        "Color: r: {}, g: {}, b: {}",
        mesh.color.x,
        mesh.color.y,
        mesh.color.z
    );
    log::info!("Vertex base: {}", mesh.vertex_base);
    log::info!("Vertex count: {}", mesh.vertex_count);
    log::info!("Index base: {}", mesh.index_base);
    log::info!("Index count: {}", mesh.index_count);
}
