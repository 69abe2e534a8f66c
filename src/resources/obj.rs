//! Wavefront OBJ import backed by `tobj`.

use std::path::Path;

use anyhow::Context;
use cgmath::Vector3;

use crate::data_structures::scene::{Face, Scene, SceneMaterial, SceneMesh};
use crate::resources::ImportOptions;

/// Imports an OBJ file (plus its `.mtl` library, resolved relative to the
/// OBJ's directory) into a scene.
///
/// Flag mapping: `triangulate` maps to tobj's `triangulate`,
/// `merge_vertices` to `single_index` so positions, texels and normals share
/// one index stream. `sort_by_primitive` is a no-op here as faces are the
/// only primitive kind tobj yields as geometry.
pub fn import_obj(path: &Path, options: &ImportOptions) -> anyhow::Result<Scene> {
    let (models, materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: options.triangulate,
            single_index: options.merge_vertices,
            ..Default::default()
        },
    )
    .with_context(|| format!("failed to load model {}", path.display()))?;

    // A broken or absent .mtl is not fatal; affected meshes resolve to the
    // default colour downstream.
    let materials = match materials {
        Ok(materials) => materials,
        Err(e) => {
            log::warn!(
                "Material library for {} could not be loaded ({e}). Colours fall back to black.",
                path.display()
            );
            Vec::new()
        }
    };
    let materials = materials
        .iter()
        .map(|material| SceneMaterial {
            diffuse: material.diffuse,
        })
        .collect();

    let meshes = models
        .iter()
        .map(|model| to_scene_mesh(&model.mesh))
        .collect();

    Ok(Scene { meshes, materials })
}

fn to_scene_mesh(mesh: &tobj::Mesh) -> SceneMesh {
    let positions = mesh
        .positions
        .chunks_exact(3)
        .map(|p| Vector3::new(p[0], p[1], p[2]))
        .collect();
    let normals = (!mesh.normals.is_empty()).then(|| {
        mesh.normals
            .chunks_exact(3)
            .map(|n| Vector3::new(n[0], n[1], n[2]))
            .collect()
    });
    let tex_coords = (!mesh.texcoords.is_empty()).then(|| {
        mesh.texcoords
            .chunks_exact(2)
            .map(|uv| [uv[0], uv[1]])
            .collect()
    });

    SceneMesh {
        positions,
        normals,
        tex_coords,
        faces: group_faces(&mesh.indices, &mesh.face_arities),
        material_id: mesh.material_id,
    }
}

// tobj flattens all faces into one index stream; `face_arities` is only
// populated when triangulation was off. Without it every face is a triple.
fn group_faces(indices: &[u32], face_arities: &[u32]) -> Vec<Face> {
    if face_arities.is_empty() {
        return indices
            .chunks_exact(3)
            .map(|face| Face(face.to_vec()))
            .collect();
    }

    let mut faces = Vec::with_capacity(face_arities.len());
    let mut next = 0;
    for &arity in face_arities {
        let end = next + arity as usize;
        faces.push(Face(indices[next..end].to_vec()));
        next = end;
    }
    faces
}
